//! Standard response envelope: `{code, message, data}`.

use serde::Serialize;

pub const CODE_SUCCESS: u16 = 200;
pub const CODE_FAILURE: u16 = 500;

/// Envelope returned by every examinee endpoint. `data` serializes as `null` when absent.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResult<T> {
    pub fn new(code: u16, message: impl Into<String>, data: Option<T>) -> Self {
        ApiResult {
            code,
            message: message.into(),
            data,
        }
    }

    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::new(CODE_SUCCESS, message, Some(data))
    }

    pub fn failure(message: impl Into<String>, data: Option<T>) -> Self {
        Self::new(CODE_FAILURE, message, data)
    }

    pub fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }
}

impl ApiResult<u64> {
    /// Single-row write outcome: success only when exactly one row was affected.
    /// The count is echoed back either way.
    pub fn from_affected(affected: u64, ok_message: &str, fail_message: &str) -> Self {
        if affected == 1 {
            Self::success(ok_message, affected)
        } else {
            Self::failure(fail_message, Some(affected))
        }
    }
}
