//! Examinee routes.

use crate::handlers::examinee::{add_examinee, delete_examinee, get_all_examinees, update_examinee};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};
use tower_http::limit::RequestBodyLimitLayer;

/// Form bodies are small; anything larger is rejected with 413.
pub const REQUEST_BODY_LIMIT: usize = 64 * 1024;

pub fn examinee_routes(state: AppState) -> Router {
    Router::new()
        .route("/getAllExaminees", get(get_all_examinees))
        .route("/deleteExaminee", post(delete_examinee))
        .route("/addExaminee", post(add_examinee))
        .route("/updateExaminee", post(update_examinee))
        .layer(RequestBodyLimitLayer::new(REQUEST_BODY_LIMIT))
        .with_state(state)
}
