use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::prelude::FromRow;

pub const TABLE_NAME: &str = "users";

#[derive(Clone, Debug, Deserialize, FromRow, PartialEq)]
pub struct User {
    pub user_id: String,
    pub full_name: String,
    pub mob_num: String,
    pub pan_num: String,
    pub manager_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}
