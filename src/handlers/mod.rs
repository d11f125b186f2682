//! HTTP handlers for examinee records.

pub mod examinee;
pub use examinee::*;
