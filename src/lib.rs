//! Examinee record management: SQL mapper, transactional service and HTTP endpoints
//! returning a `{code, message, data}` envelope.

pub mod config;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use mapper::ExamineeMapper;
pub use model::{Examinee, ExamineeForm};
pub use response::ApiResult;
pub use routes::{common_routes, common_routes_with_ready, examinee_routes};
pub use service::{ExamineeService, PgExamineeService};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_examinee_table};
