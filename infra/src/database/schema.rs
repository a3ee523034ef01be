//! Idempotent table bootstrap
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so running this against
//! an existing database is a no-op. There is no versioning.

use sqlx::SqlitePool;

use crate::InfrastructureError;

const TABLES: &[(&str, &str)] = &[
    (
        "users",
        "CREATE TABLE IF NOT EXISTS users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name    TEXT    NOT NULL DEFAULT '',
            last_name     TEXT    NOT NULL DEFAULT '',
            email         TEXT    NOT NULL,
            phone         TEXT    NOT NULL DEFAULT '',
            password_hash TEXT    NOT NULL,
            role          TEXT    NOT NULL DEFAULT ''
        )",
    ),
    (
        "properties",
        "CREATE TABLE IF NOT EXISTS properties (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            owner_user_id INTEGER NOT NULL REFERENCES users(id),
            name          TEXT    NOT NULL DEFAULT '',
            street        TEXT    NOT NULL DEFAULT '',
            city          TEXT    NOT NULL DEFAULT '',
            state         TEXT    NOT NULL DEFAULT '',
            zip           TEXT    NOT NULL DEFAULT '',
            property_type TEXT    NOT NULL DEFAULT '',
            year_built    INTEGER NOT NULL DEFAULT 0,
            notes         TEXT    NOT NULL DEFAULT ''
        )",
    ),
    (
        "property_units",
        "CREATE TABLE IF NOT EXISTS property_units (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            property_id  INTEGER NOT NULL REFERENCES properties(id),
            unit_number  TEXT    NOT NULL DEFAULT '',
            beds         INTEGER NOT NULL DEFAULT 0,
            baths        INTEGER NOT NULL DEFAULT 0,
            sqft         INTEGER NOT NULL DEFAULT 0,
            default_rent INTEGER NOT NULL DEFAULT 0,
            notes        TEXT    NOT NULL DEFAULT ''
        )",
    ),
    (
        "tenants",
        "CREATE TABLE IF NOT EXISTS tenants (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT    NOT NULL,
            last_name  TEXT    NOT NULL,
            email      TEXT    NOT NULL,
            phone      TEXT    NOT NULL DEFAULT ''
        )",
    ),
    (
        "leases",
        "CREATE TABLE IF NOT EXISTS leases (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            tenant_id        INTEGER NOT NULL REFERENCES tenants(id),
            unit_id          INTEGER NOT NULL REFERENCES property_units(id),
            start_date       INTEGER NOT NULL,
            end_date         INTEGER,
            rent_amount      INTEGER NOT NULL,
            security_deposit INTEGER NOT NULL DEFAULT 0,
            document_link    TEXT    NOT NULL DEFAULT '',
            status           TEXT    NOT NULL DEFAULT ''
        )",
    ),
    (
        "payments",
        "CREATE TABLE IF NOT EXISTS payments (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            lease_id     INTEGER NOT NULL REFERENCES leases(id),
            amount       INTEGER NOT NULL,
            payment_date INTEGER NOT NULL,
            method       TEXT    NOT NULL DEFAULT '',
            notes        TEXT    NOT NULL DEFAULT '',
            confirmation BLOB    NOT NULL DEFAULT x''
        )",
    ),
    (
        "maintenance_requests",
        "CREATE TABLE IF NOT EXISTS maintenance_requests (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            unit_id      INTEGER NOT NULL REFERENCES property_units(id),
            lease_id     INTEGER REFERENCES leases(id),
            description  TEXT    NOT NULL,
            priority     TEXT    NOT NULL DEFAULT '',
            category     TEXT    NOT NULL DEFAULT '',
            status       TEXT    NOT NULL DEFAULT '',
            created_at   INTEGER NOT NULL,
            completed_at INTEGER,
            assignee     TEXT    NOT NULL DEFAULT ''
        )",
    ),
    (
        "activity_logs",
        "CREATE TABLE IF NOT EXISTS activity_logs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     INTEGER NOT NULL DEFAULT 0,
            entity_type TEXT    NOT NULL DEFAULT '',
            entity_id   INTEGER NOT NULL DEFAULT 0,
            action      TEXT    NOT NULL DEFAULT '',
            logged_at   INTEGER NOT NULL
        )",
    ),
];

/// Create every table that does not exist yet, parents before children
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), InfrastructureError> {
    for (table, ddl) in TABLES {
        sqlx::query(ddl).execute(pool).await.map_err(|e| {
            tracing::error!(table, "Failed to create table: {}", e);
            InfrastructureError::Database(e)
        })?;
    }

    tracing::info!(tables = TABLES.len(), "Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabasePool;
    use rt_shared::DatabaseConfig;

    #[tokio::test]
    async fn test_schema_bootstrap_is_idempotent() {
        let pool = DatabasePool::new(DatabaseConfig::in_memory()).await.unwrap();

        ensure_schema(pool.get_pool()).await.unwrap();
        ensure_schema(pool.get_pool()).await.unwrap();

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        )
        .fetch_one(pool.get_pool())
        .await
        .unwrap();
        assert_eq!(count, TABLES.len() as i64);
    }
}
