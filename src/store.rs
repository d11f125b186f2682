//! Database bootstrap and `examinee` table DDL. The table lives in the schema named by `EXAM_SCHEMA` (default `public`).

use crate::error::{AppError, ConfigError};
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const EXAMINEE_TABLE: &str = "examinee";

/// Quote identifier for PostgreSQL.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Schema-qualified, quoted table name (e.g. `"public"."examinee"`).
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(table))
}

/// Schema names come from configuration; only plain identifiers are accepted.
pub fn validate_schema_name(name: &str) -> Result<(), ConfigError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            name.len() <= 63 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidSchema(name.to_string()))
    }
}

/// Create the schema if not exists, then the `examinee` table.
pub async fn ensure_examinee_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    validate_schema_name(schema)?;
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(pool)
        .await?;

    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            number TEXT NOT NULL DEFAULT '',
            username TEXT NOT NULL DEFAULT '',
            gender TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            academy TEXT NOT NULL DEFAULT '',
            major TEXT NOT NULL DEFAULT ''
        )
        "#,
        qualified_table(schema, EXAMINEE_TABLE)
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::debug!(schema = %schema, "examinee table ready");
    Ok(())
}

/// Split `database_url` into the target database name and options for the `postgres`
/// maintenance database on the same server. `None` when the URL names no database.
pub fn admin_connect_options(database_url: &str) -> Result<(PgConnectOptions, Option<String>), AppError> {
    let target = PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::InvalidValue {
        key: "DATABASE_URL",
        value: e.to_string(),
    })?;
    let db_name = target
        .get_database()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from);
    Ok((target.database("postgres"), db_name))
}

/// Create the database named in `database_url` when it is missing. Runs against the
/// `postgres` maintenance database; call before building the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin, db_name) = admin_connect_options(database_url)?;
    let db_name = match db_name {
        Some(name) if name != "postgres" => name,
        _ => return Ok(()),
    };
    let mut conn = admin.connect().await?;
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if exists {
        tracing::debug!(database = %db_name, "database present");
    } else {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}
