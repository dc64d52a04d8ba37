use chrono::Utc;
use fake::{
    faker::{name::en::Name, number::en::NumberWithFormat},
    Dummy, Fake, Faker,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::model::user::{User, TABLE_NAME};

pub struct UserFactory<T: Clone> {
    modifier_one: fn(x: &User, ext: T) -> User,
    modifier_many: fn(x: &User, idx: usize, ext: T) -> User,
}

impl<T: Clone> Default for UserFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> UserFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &User, ext: T) -> User) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &User, idx: usize, ext: T) -> User) {
        self.modifier_many = modifier
    }

    pub async fn generate_one(&mut self, db: &SqlitePool, ext: T) -> anyhow::Result<User> {
        let data = UserDummy::generate_one();
        let data = (self.modifier_one)(&data, ext);
        insert_user(db, &data).await?;
        Ok(data)
    }

    pub async fn generate_many(
        &mut self,
        db: &SqlitePool,
        num: u32,
        ext: T,
    ) -> anyhow::Result<Vec<User>> {
        let mut result: Vec<User> = vec![];
        for (idx, item) in UserDummy::generate_many(num).iter().enumerate() {
            result.push((self.modifier_many)(item, idx, ext.clone()));
        }
        for item in result.iter() {
            insert_user(db, item).await?;
        }
        Ok(result)
    }
}

async fn insert_user(db: &SqlitePool, data: &User) -> anyhow::Result<()> {
    sqlx::query(
        format!(
            r#"INSERT INTO {} (user_id, full_name, mob_num, pan_num, manager_id, created_at, updated_at, is_active)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&data.user_id)
    .bind(&data.full_name)
    .bind(&data.mob_num)
    .bind(&data.pan_num)
    .bind(&data.manager_id)
    .bind(data.created_at)
    .bind(data.updated_at)
    .bind(data.is_active)
    .execute(db)
    .await?;
    Ok(())
}

#[derive(Debug, Dummy, Clone)]
struct UserDummy {
    pub user_id: Uuid,
    #[dummy(faker = "Name()")]
    pub full_name: String,
    #[dummy(faker = "NumberWithFormat(\"9#########\")")]
    pub mob_num: String,
    #[dummy(faker = "1000..10000")]
    pub pan_digits: u16,
}

impl UserDummy {
    fn into_user(self) -> User {
        let now = Utc::now();
        User {
            user_id: self.user_id.to_string(),
            full_name: self.full_name,
            mob_num: self.mob_num,
            pan_num: format!("ABCDE{}F", self.pan_digits),
            manager_id: "test-manager-123".to_string(),
            created_at: now,
            updated_at: now,
            is_active: true,
        }
    }

    pub fn generate_one() -> User {
        Faker.fake::<Self>().into_user()
    }

    pub fn generate_many(num: u32) -> Vec<User> {
        (0..num).map(|_| Faker.fake::<Self>().into_user()).collect()
    }
}
