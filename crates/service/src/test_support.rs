#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory SQLite database; one per test, no shared state.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_memory().await
}
