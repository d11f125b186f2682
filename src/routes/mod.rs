//! Routers: common health/readiness routes and examinee endpoints.

mod common;
mod examinee;

pub use common::{common_routes, common_routes_with_ready};
pub use examinee::{examinee_routes, REQUEST_BODY_LIMIT};
