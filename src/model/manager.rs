use serde::Deserialize;
use sqlx::prelude::FromRow;

pub const TABLE_NAME: &str = "managers";

#[derive(Clone, Debug, Deserialize, FromRow, PartialEq)]
pub struct Manager {
    pub manager_id: String,
    pub is_active: bool,
}
