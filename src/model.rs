//! Examinee record and its form binding.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// One exam candidate. `id` is assigned by the database on insert.
#[derive(Serialize, Deserialize, sqlx::FromRow, Debug, Clone, Default, PartialEq, Eq)]
pub struct Examinee {
    pub id: i32,
    /// Admission number.
    pub number: String,
    pub username: String,
    pub gender: String,
    pub phone: String,
    pub academy: String,
    pub major: String,
}

/// Form fields bound from a request. Every field is optional; absent strings bind as empty.
/// `id` stays raw text so a blank or malformed value reaches `require_id` instead of failing extraction.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ExamineeForm {
    pub id: Option<String>,
    pub number: String,
    pub username: String,
    pub gender: String,
    pub phone: String,
    pub academy: String,
    pub major: String,
}

impl ExamineeForm {
    pub fn require_id(&self) -> Result<i32, AppError> {
        let raw = self
            .id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::BadRequest("id is required".into()))?;
        raw.parse()
            .map_err(|_| AppError::BadRequest(format!("invalid id: {}", raw)))
    }

    /// Record for insert: any submitted id is dropped since the store assigns it.
    pub fn into_new_record(self) -> Examinee {
        Examinee {
            id: 0,
            number: self.number,
            username: self.username,
            gender: self.gender,
            phone: self.phone,
            academy: self.academy,
            major: self.major,
        }
    }

    /// Record for update, matched on the submitted id.
    pub fn into_record(self) -> Result<Examinee, AppError> {
        let id = self.require_id()?;
        Ok(Examinee {
            id,
            ..self.into_new_record()
        })
    }
}
