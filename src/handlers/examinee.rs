//! Examinee endpoints: list, delete, add, update. Outcomes are wrapped in the `{code, message, data}` envelope.

use crate::error::AppError;
use crate::model::{Examinee, ExamineeForm};
use crate::response::ApiResult;
use crate::state::AppState;
use axum::{extract::State, Form, Json};

pub const QUERY_OK: &str = "query succeeded";
pub const QUERY_FAILED: &str = "query failed";
pub const DELETE_OK: &str = "delete succeeded";
pub const DELETE_FAILED: &str = "delete failed";
pub const ADD_OK: &str = "add succeeded";
pub const ADD_FAILED: &str = "add failed";
pub const UPDATE_OK: &str = "update succeeded";
pub const UPDATE_FAILED: &str = "update failed";

/// A present list is success even when empty; only failing to produce one is a 500.
pub async fn get_all_examinees(State(state): State<AppState>) -> Json<ApiResult<Vec<Examinee>>> {
    match state.examinees.get_all_examinee().await {
        Ok(list) => Json(ApiResult::success(QUERY_OK, list)),
        Err(e) => {
            tracing::error!(error = %e, "list examinees");
            Json(ApiResult::failure(QUERY_FAILED, None))
        }
    }
}

/// Only the form's `id` is used.
pub async fn delete_examinee(
    State(state): State<AppState>,
    Form(form): Form<ExamineeForm>,
) -> Result<Json<ApiResult<u64>>, AppError> {
    let id = form.require_id()?;
    let affected = state.examinees.delete_examinee(id).await?;
    Ok(Json(ApiResult::from_affected(affected, DELETE_OK, DELETE_FAILED)))
}

pub async fn add_examinee(
    State(state): State<AppState>,
    Form(form): Form<ExamineeForm>,
) -> Result<Json<ApiResult<u64>>, AppError> {
    let record = form.into_new_record();
    let affected = state.examinees.add_examinee(&record).await?;
    Ok(Json(ApiResult::from_affected(affected, ADD_OK, ADD_FAILED)))
}

pub async fn update_examinee(
    State(state): State<AppState>,
    Form(form): Form<ExamineeForm>,
) -> Result<Json<ApiResult<u64>>, AppError> {
    let record = form.into_record()?;
    let affected = state.examinees.update_examinee(&record).await?;
    Ok(Json(ApiResult::from_affected(affected, UPDATE_OK, UPDATE_FAILED)))
}
