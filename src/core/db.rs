use std::{str::FromStr, time::Duration};

use sqlx::{
    pool::PoolOptions,
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
    Pool, Sqlite, Transaction,
};
use tracing::info;

use crate::{
    model::{manager::TABLE_NAME as MANAGER_TABLE_NAME, user::TABLE_NAME as USER_TABLE_NAME},
    settings::Config,
};

/// Managers seeded into an empty `managers` table on first run.
pub const SAMPLE_MANAGERS: [(&str, bool); 3] = [
    ("test-manager-123", true),
    ("test-manager-456", true),
    ("inactive-manager", false),
];

pub async fn init_pool(config: &Config) -> anyhow::Result<Pool<Sqlite>> {
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(10));
    let pool = PoolOptions::new()
        .min_connections(1)
        .max_connections(10)
        .idle_timeout(Duration::from_secs(5))
        .connect_with(connect_options)
        .await?;
    Ok(pool)
}

/// Opens a transaction holding the write lock from its first statement.
///
/// A deferred transaction that reads before writing cannot upgrade its lock
/// while another connection writes, and SQLite fails it without waiting on
/// the busy timeout.
pub async fn begin_write(
    pool: &Pool<Sqlite>,
) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}

/// Create both tables when missing and seed sample managers into an empty
/// `managers` table. Safe to run on every startup.
pub async fn init_schema(pool: &Pool<Sqlite>) -> anyhow::Result<()> {
    let mut tx = begin_write(pool).await?;
    sqlx::query(
        format!(
            r#"CREATE TABLE IF NOT EXISTS {} (
                user_id TEXT PRIMARY KEY,
                full_name TEXT NOT NULL,
                mob_num TEXT NOT NULL,
                pan_num TEXT NOT NULL,
                manager_id TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                is_active BOOLEAN DEFAULT 1
            )"#,
            USER_TABLE_NAME
        )
        .as_str(),
    )
    .execute(&mut *tx)
    .await?;
    sqlx::query(
        format!(
            r#"CREATE TABLE IF NOT EXISTS {} (
                manager_id TEXT PRIMARY KEY,
                is_active BOOLEAN DEFAULT 1
            )"#,
            MANAGER_TABLE_NAME
        )
        .as_str(),
    )
    .execute(&mut *tx)
    .await?;

    let count: (i64,) =
        sqlx::query_as(format!("SELECT COUNT(*) FROM {}", MANAGER_TABLE_NAME).as_str())
            .fetch_one(&mut *tx)
            .await?;
    if count.0 == 0 {
        for (manager_id, is_active) in SAMPLE_MANAGERS {
            sqlx::query(
                format!(
                    "INSERT INTO {} (manager_id, is_active) VALUES (?, ?)",
                    MANAGER_TABLE_NAME
                )
                .as_str(),
            )
            .bind(manager_id)
            .bind(is_active)
            .execute(&mut *tx)
            .await?;
        }
        info!("sample managers added");
    }
    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use sqlx::SqlitePool;

    use super::init_schema;

    #[sqlx::test]
    async fn test_init_schema_seeds_managers_once(pool: SqlitePool) -> anyhow::Result<()> {
        // When
        init_schema(&pool).await?;
        init_schema(&pool).await?;

        // Expect
        let managers: Vec<(String, bool)> =
            sqlx::query_as("SELECT manager_id, is_active FROM managers ORDER BY manager_id")
                .fetch_all(&pool)
                .await?;
        assert_eq!(
            managers,
            vec![
                ("inactive-manager".to_string(), false),
                ("test-manager-123".to_string(), true),
                ("test-manager-456".to_string(), true),
            ]
        );
        Ok(())
    }

    #[sqlx::test]
    async fn test_init_schema_keeps_existing_managers(pool: SqlitePool) -> anyhow::Result<()> {
        // Given
        sqlx::query(
            "CREATE TABLE managers (manager_id TEXT PRIMARY KEY, is_active BOOLEAN DEFAULT 1)",
        )
        .execute(&pool)
        .await?;
        sqlx::query("INSERT INTO managers (manager_id, is_active) VALUES ('boss', 1)")
            .execute(&pool)
            .await?;

        // When
        init_schema(&pool).await?;

        // Expect
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM managers")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count.0, 1);
        let users: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await?;
        assert_eq!(users.0, 0);
        Ok(())
    }
}
