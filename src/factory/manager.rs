use fake::{Dummy, Fake, Faker};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::model::manager::{Manager, TABLE_NAME};

#[derive(Debug, Dummy, Clone)]
struct ManagerDummy {
    pub manager_id: Uuid,
}

pub struct ManagerFactory;

impl ManagerFactory {
    /// Inserts a random manager with the requested status.
    pub async fn generate_one(db: &SqlitePool, is_active: bool) -> anyhow::Result<Manager> {
        let dummy = Faker.fake::<ManagerDummy>();
        let data = Manager {
            manager_id: format!("manager-{}", dummy.manager_id),
            is_active,
        };
        sqlx::query(
            format!(
                "INSERT INTO {} (manager_id, is_active) VALUES (?, ?)",
                TABLE_NAME
            )
            .as_str(),
        )
        .bind(&data.manager_id)
        .bind(data.is_active)
        .execute(db)
        .await?;
        Ok(data)
    }
}
