//! ExamineeService: transactional façade over the examinee mapper.

mod examinee;
#[cfg(test)]
pub(crate) mod memory;

pub use examinee::PgExamineeService;

use crate::error::AppError;
use crate::model::Examinee;
use async_trait::async_trait;

/// Business operations on examinee records. Implementations run each call as one unit of work.
#[async_trait]
pub trait ExamineeService: Send + Sync {
    async fn get_all_examinee(&self) -> Result<Vec<Examinee>, AppError>;

    /// Returns rows affected.
    async fn delete_examinee(&self, id: i32) -> Result<u64, AppError>;

    async fn add_examinee(&self, record: &Examinee) -> Result<u64, AppError>;

    async fn update_examinee(&self, record: &Examinee) -> Result<u64, AppError>;
}
