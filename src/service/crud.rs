//! Client persistence against SQLite.

use crate::error::AppError;
use crate::model::Client;
use sqlx::SqlitePool;

const SELECT_COLUMNS: &str = "client_id, client_name, contact_name, contact_email, contact_mobile";

pub struct ClientStore;

impl ClientStore {
    /// Fetch one client by id. Returns None when no row matches.
    pub async fn get(pool: &SqlitePool, client_id: &str) -> Result<Option<Client>, AppError> {
        let sql = format!("SELECT {} FROM clients WHERE client_id = ?1", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, client_id = %client_id, "query");
        let row = sqlx::query_as::<_, Client>(&sql)
            .bind(client_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert one client. A duplicate id is reported as `Conflict`.
    pub async fn create(pool: &SqlitePool, client: &Client) -> Result<(), AppError> {
        let sql = "INSERT INTO clients (client_id, client_name, contact_name, contact_email, contact_mobile) \
                   VALUES (?1, ?2, ?3, ?4, ?5)";
        tracing::debug!(sql = %sql, client_id = %client.client_id, "query");
        sqlx::query(sql)
            .bind(&client.client_id)
            .bind(&client.client_name)
            .bind(&client.contact_name)
            .bind(&client.contact_email)
            .bind(client.contact_mobile)
            .execute(pool)
            .await
            .map_err(|e| AppError::from_insert(e, &client.client_id))?;
        Ok(())
    }

    /// All clients, ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Client>, AppError> {
        let sql = format!("SELECT {} FROM clients ORDER BY client_id", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Client>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }
}
