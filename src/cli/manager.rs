use sqlx::{Pool, Sqlite};

use crate::{
    model::manager::Manager,
    repository::manager::{create_manager, get_all_manager, update_manager_status},
};

pub async fn add_manager(
    pool: &Pool<Sqlite>,
    manager_id: &str,
    is_active: bool,
) -> anyhow::Result<()> {
    let mut tx = pool.begin().await?;
    let inserted = create_manager(
        &mut tx,
        &Manager {
            manager_id: manager_id.to_string(),
            is_active,
        },
    )
    .await?;
    tx.commit().await?;
    if inserted {
        println!("manager inserted: {manager_id}");
    } else {
        println!("manager already exists: {manager_id}");
    }
    Ok(())
}

pub async fn list_managers(pool: &Pool<Sqlite>) -> anyhow::Result<Vec<Manager>> {
    let mut tx = pool.begin().await?;
    let managers = get_all_manager(&mut tx).await?;
    tx.commit().await?;
    for item in managers.iter() {
        let status = if item.is_active { "active" } else { "inactive" };
        println!("{}\t{}", item.manager_id, status);
    }
    Ok(managers)
}

pub async fn set_manager_status(
    pool: &Pool<Sqlite>,
    manager_id: &str,
    is_active: bool,
) -> anyhow::Result<()> {
    let mut tx = pool.begin().await?;
    let found = update_manager_status(&mut tx, manager_id, is_active).await?;
    if !found {
        anyhow::bail!("manager with id = {} not found", manager_id);
    }
    tx.commit().await?;
    println!("manager {manager_id} is_active = {is_active}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use sqlx::SqlitePool;

    use super::{add_manager, list_managers, set_manager_status};
    use crate::core::db::init_schema;

    #[sqlx::test]
    async fn test_add_and_list_managers(pool: SqlitePool) -> anyhow::Result<()> {
        // Given
        init_schema(&pool).await?;

        // When
        add_manager(&pool, "ops-manager", true).await?;
        add_manager(&pool, "ops-manager", false).await?;

        // Expect
        let managers = list_managers(&pool).await?;
        assert_eq!(managers.len(), 4);
        let ops = managers.iter().find(|x| x.manager_id == "ops-manager");
        assert!(ops.is_some_and(|x| x.is_active));
        Ok(())
    }

    #[sqlx::test]
    async fn test_set_manager_status(pool: SqlitePool) -> anyhow::Result<()> {
        // Given
        init_schema(&pool).await?;

        // When
        set_manager_status(&pool, "test-manager-123", false).await?;
        let missing = set_manager_status(&pool, "nobody", true).await;

        // Expect
        assert!(missing.is_err());
        let managers = list_managers(&pool).await?;
        let manager = managers.iter().find(|x| x.manager_id == "test-manager-123");
        assert!(manager.is_some_and(|x| !x.is_active));
        Ok(())
    }
}
