//! PostgreSQL-backed service: one transaction per call.

use super::ExamineeService;
use crate::error::AppError;
use crate::mapper::ExamineeMapper;
use crate::model::Examinee;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgExamineeService {
    pool: PgPool,
    mapper: ExamineeMapper,
}

impl PgExamineeService {
    pub fn new(pool: PgPool, mapper: ExamineeMapper) -> Self {
        PgExamineeService { pool, mapper }
    }
}

#[async_trait]
impl ExamineeService for PgExamineeService {
    async fn get_all_examinee(&self) -> Result<Vec<Examinee>, AppError> {
        let mut tx = self.pool.begin().await?;
        let rows = self.mapper.select_all_examinee(&mut tx).await?;
        tx.commit().await?;
        Ok(rows)
    }

    async fn delete_examinee(&self, id: i32) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let n = self.mapper.delete_by_primary_key(&mut tx, id).await?;
        tx.commit().await?;
        Ok(n)
    }

    async fn add_examinee(&self, record: &Examinee) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let n = self.mapper.insert(&mut tx, record).await?;
        tx.commit().await?;
        Ok(n)
    }

    async fn update_examinee(&self, record: &Examinee) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let n = self.mapper.update(&mut tx, record).await?;
        tx.commit().await?;
        Ok(n)
    }
}
