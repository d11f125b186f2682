//! In-memory service for handler tests.

use super::ExamineeService;
use crate::error::AppError;
use crate::model::Examinee;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct MemoryExamineeService {
    rows: Mutex<Vec<Examinee>>,
    next_id: Mutex<i32>,
    /// When set, every call fails as if the database were unreachable.
    pub(crate) unavailable: bool,
}

impl MemoryExamineeService {
    pub(crate) fn with_rows(rows: Vec<Examinee>) -> Self {
        let next = rows.iter().map(|r| r.id).max().unwrap_or(0);
        MemoryExamineeService {
            rows: Mutex::new(rows),
            next_id: Mutex::new(next),
            unavailable: false,
        }
    }

    pub(crate) fn unavailable() -> Self {
        MemoryExamineeService {
            unavailable: true,
            ..Default::default()
        }
    }

    pub(crate) fn snapshot(&self) -> Vec<Examinee> {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ExamineeService for MemoryExamineeService {
    async fn get_all_examinee(&self) -> Result<Vec<Examinee>, AppError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn delete_examinee(&self, id: i32) -> Result<u64, AppError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn add_examinee(&self, record: &Examinee) -> Result<u64, AppError> {
        self.check()?;
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        self.rows.lock().unwrap().push(Examinee {
            id: *next,
            ..record.clone()
        });
        Ok(1)
    }

    async fn update_examinee(&self, record: &Examinee) -> Result<u64, AppError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id == record.id) {
            Some(row) => {
                *row = record.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
