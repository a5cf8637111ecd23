//! Schema setup: the `clients` table is created on startup if it does not exist.

use crate::error::AppError;
use sqlx::SqlitePool;

pub const CLIENTS_TABLE: &str = "clients";

/// Idempotent: safe to run on every start.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            client_id TEXT PRIMARY KEY NOT NULL,
            client_name TEXT NOT NULL,
            contact_name TEXT,
            contact_email TEXT,
            contact_mobile INTEGER
        )
        "#,
        CLIENTS_TABLE
    );
    tracing::debug!(sql = %ddl, "migration");
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::connect;

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = connect("sqlite::memory:").await.unwrap();
        apply_migrations(&pool).await.unwrap();
        apply_migrations(&pool).await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn table_holds_exactly_the_client_fields() {
        let pool = connect("sqlite::memory:").await.unwrap();
        apply_migrations(&pool).await.unwrap();
        let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info('clients') ORDER BY cid")
            .fetch_all(&pool)
            .await
            .unwrap();
        assert_eq!(
            columns,
            vec!["client_id", "client_name", "contact_name", "contact_email", "contact_mobile"]
        );
    }
}
