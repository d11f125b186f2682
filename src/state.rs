//! Shared application state for all routes. Services are constructed once at startup and injected here.

use crate::service::ExamineeService;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub examinees: Arc<dyn ExamineeService>,
}

impl AppState {
    pub fn new(pool: PgPool, examinees: Arc<dyn ExamineeService>) -> Self {
        AppState { pool, examinees }
    }
}
