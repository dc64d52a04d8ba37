use sqlx::{Sqlite, Transaction};

use crate::model::manager::{Manager, TABLE_NAME};

pub async fn get_active_manager_by_id(
    tx: &mut Transaction<'_, Sqlite>,
    manager_id: &str,
) -> anyhow::Result<Option<Manager>> {
    Ok(sqlx::query_as(
        format!(
            "SELECT * FROM {} WHERE manager_id = ? AND is_active = ?",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(manager_id)
    .bind(true)
    .fetch_optional(&mut **tx)
    .await?)
}

pub async fn get_all_manager(tx: &mut Transaction<'_, Sqlite>) -> anyhow::Result<Vec<Manager>> {
    Ok(
        sqlx::query_as(format!("SELECT * FROM {} ORDER BY manager_id", TABLE_NAME).as_str())
            .fetch_all(&mut **tx)
            .await?,
    )
}

/// Inserts the manager unless one with the same id already exists.
/// Returns whether a row was inserted.
pub async fn create_manager(
    tx: &mut Transaction<'_, Sqlite>,
    manager: &Manager,
) -> anyhow::Result<bool> {
    let res = sqlx::query(
        format!(
            "INSERT OR IGNORE INTO {} (manager_id, is_active) VALUES (?, ?)",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&manager.manager_id)
    .bind(manager.is_active)
    .execute(&mut **tx)
    .await?;
    Ok(res.rows_affected() > 0)
}

/// Returns whether a manager with that id exists.
pub async fn update_manager_status(
    tx: &mut Transaction<'_, Sqlite>,
    manager_id: &str,
    is_active: bool,
) -> anyhow::Result<bool> {
    let res = sqlx::query(
        format!("UPDATE {} SET is_active = ? WHERE manager_id = ?", TABLE_NAME).as_str(),
    )
    .bind(is_active)
    .bind(manager_id)
    .execute(&mut **tx)
    .await?;
    Ok(res.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use sqlx::SqlitePool;

    use super::{create_manager, get_active_manager_by_id, get_all_manager, update_manager_status};
    use crate::{core::db::init_schema, model::manager::Manager};

    #[sqlx::test]
    async fn test_get_active_manager_by_id(pool: SqlitePool) -> anyhow::Result<()> {
        // Given
        init_schema(&pool).await?;
        let mut tx = pool.begin().await?;

        // Expect
        let manager = get_active_manager_by_id(&mut tx, "test-manager-123").await?;
        assert_eq!(
            manager,
            Some(Manager {
                manager_id: "test-manager-123".to_string(),
                is_active: true
            })
        );
        assert!(get_active_manager_by_id(&mut tx, "inactive-manager")
            .await?
            .is_none());
        assert!(get_active_manager_by_id(&mut tx, "nobody").await?.is_none());
        Ok(())
    }

    #[sqlx::test]
    async fn test_create_manager_ignores_existing(pool: SqlitePool) -> anyhow::Result<()> {
        // Given
        init_schema(&pool).await?;
        let mut tx = pool.begin().await?;

        // When
        let inserted_new = create_manager(
            &mut tx,
            &Manager {
                manager_id: "new-manager".to_string(),
                is_active: true,
            },
        )
        .await?;
        let inserted_existing = create_manager(
            &mut tx,
            &Manager {
                manager_id: "inactive-manager".to_string(),
                is_active: true,
            },
        )
        .await?;

        // Expect
        assert!(inserted_new);
        assert!(!inserted_existing);
        let managers = get_all_manager(&mut tx).await?;
        assert_eq!(managers.len(), 4);
        assert!(get_active_manager_by_id(&mut tx, "inactive-manager")
            .await?
            .is_none());
        Ok(())
    }

    #[sqlx::test]
    async fn test_update_manager_status(pool: SqlitePool) -> anyhow::Result<()> {
        // Given
        init_schema(&pool).await?;
        let mut tx = pool.begin().await?;

        // When
        let found = update_manager_status(&mut tx, "inactive-manager", true).await?;
        let missing = update_manager_status(&mut tx, "nobody", true).await?;

        // Expect
        assert!(found);
        assert!(!missing);
        assert!(get_active_manager_by_id(&mut tx, "inactive-manager")
            .await?
            .is_some());
        Ok(())
    }
}
