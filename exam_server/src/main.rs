//! Examinee record server.
//!
//! Run from repo root: `cargo run -p exam-server`
//! Configuration comes from the environment (or `.env`): `DATABASE_URL`, `EXAM_SCHEMA`,
//! `BIND_ADDR`, `DB_MAX_CONNECTIONS`.

use exam_admin::{
    common_routes_with_ready,
    ensure_database_exists,
    ensure_examinee_table,
    examinee_routes,
    AppConfig,
    AppState,
    ExamineeMapper,
    PgExamineeService,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("exam_admin=info,exam_server=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    ensure_examinee_table(&pool, &config.schema).await?;

    let mapper = ExamineeMapper::new(&config.schema)?;
    let service = PgExamineeService::new(pool.clone(), mapper);
    let state = AppState::new(pool, Arc::new(service));

    let app = common_routes_with_ready(state.clone())
        .merge(examinee_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(schema = %config.schema, "listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
