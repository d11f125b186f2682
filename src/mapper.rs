//! Record store gateway for the `examinee` table.
//!
//! One parameterized statement per operation, executed on a connection supplied by the
//! caller. Transactions are the service's concern; nothing here begins or commits one.

use crate::error::AppError;
use crate::model::Examinee;
use crate::store::{qualified_table, validate_schema_name, EXAMINEE_TABLE};
use sqlx::PgConnection;

#[derive(Clone, Debug)]
pub struct ExamineeMapper {
    select_all_sql: String,
    delete_sql: String,
    insert_sql: String,
    update_sql: String,
}

impl ExamineeMapper {
    /// Build statements for `<schema>.examinee`. The schema name is an identifier, never a value.
    pub fn new(schema: &str) -> Result<Self, AppError> {
        validate_schema_name(schema)?;
        let table = qualified_table(schema, EXAMINEE_TABLE);
        Ok(ExamineeMapper {
            select_all_sql: format!(
                "SELECT id, number, username, gender, phone, academy, major FROM {}",
                table
            ),
            delete_sql: format!("DELETE FROM {} WHERE id = $1", table),
            insert_sql: format!(
                "INSERT INTO {} (number, username, gender, phone, academy, major) VALUES ($1, $2, $3, $4, $5, $6)",
                table
            ),
            update_sql: format!(
                "UPDATE {} SET number = $1, username = $2, gender = $3, phone = $4, academy = $5, major = $6 WHERE id = $7",
                table
            ),
        })
    }

    /// All rows in storage order. An empty table yields an empty vec.
    pub async fn select_all_examinee(&self, conn: &mut PgConnection) -> Result<Vec<Examinee>, AppError> {
        tracing::debug!(sql = %self.select_all_sql, "query");
        let rows = sqlx::query_as::<_, Examinee>(&self.select_all_sql)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Returns rows affected: 1 when the id existed, 0 otherwise.
    pub async fn delete_by_primary_key(&self, conn: &mut PgConnection, id: i32) -> Result<u64, AppError> {
        tracing::debug!(sql = %self.delete_sql, id, "query");
        let done = sqlx::query(&self.delete_sql)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(done.rows_affected())
    }

    /// Inserts the six non-id fields; `record.id` is ignored.
    pub async fn insert(&self, conn: &mut PgConnection, record: &Examinee) -> Result<u64, AppError> {
        tracing::debug!(sql = %self.insert_sql, params = ?record, "query");
        let done = sqlx::query(&self.insert_sql)
            .bind(&record.number)
            .bind(&record.username)
            .bind(&record.gender)
            .bind(&record.phone)
            .bind(&record.academy)
            .bind(&record.major)
            .execute(&mut *conn)
            .await?;
        Ok(done.rows_affected())
    }

    /// Overwrites the six non-id fields of the row matching `record.id`.
    pub async fn update(&self, conn: &mut PgConnection, record: &Examinee) -> Result<u64, AppError> {
        tracing::debug!(sql = %self.update_sql, params = ?record, "query");
        let done = sqlx::query(&self.update_sql)
            .bind(&record.number)
            .bind(&record.username)
            .bind(&record.gender)
            .bind(&record.phone)
            .bind(&record.academy)
            .bind(&record.major)
            .bind(record.id)
            .execute(&mut *conn)
            .await?;
        Ok(done.rows_affected())
    }
}
