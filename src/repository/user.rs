use chrono::{DateTime, Utc};
use sqlx::{Sqlite, Transaction};

use crate::{
    core::sqlx_utils::{binds_query, binds_query_as, query_builder, update_builder, SqlxBinds},
    model::user::{User, TABLE_NAME},
};

/// Selects which active rows a soft delete applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserSelector {
    UserId(String),
    MobNum(String),
}

/// Active users matching every provided filter.
pub async fn get_all_user(
    tx: &mut Transaction<'_, Sqlite>,
    user_id: Option<String>,
    mob_num: Option<String>,
    manager_id: Option<String>,
) -> anyhow::Result<Vec<User>> {
    let mut binds: Vec<SqlxBinds> = vec![SqlxBinds::Bool(true)];
    let mut filters: Vec<String> = vec!["is_active = ?".to_string()];

    if let Some(val) = user_id {
        binds.push(SqlxBinds::String(val));
        filters.push("user_id = ?".to_string());
    }
    if let Some(val) = mob_num {
        binds.push(SqlxBinds::String(val));
        filters.push("mob_num = ?".to_string());
    }
    if let Some(val) = manager_id {
        binds.push(SqlxBinds::String(val));
        filters.push("manager_id = ?".to_string());
    }

    let stmt = query_builder(
        TABLE_NAME,
        &filters,
        vec!["created_at ASC".to_string(), "user_id ASC".to_string()],
    );
    Ok(binds_query_as::<User>(&stmt, binds)
        .fetch_all(&mut **tx)
        .await?)
}

pub async fn get_active_user_by_id(
    tx: &mut Transaction<'_, Sqlite>,
    user_id: &str,
) -> anyhow::Result<Option<User>> {
    let binds = vec![SqlxBinds::String(user_id.to_string()), SqlxBinds::Bool(true)];
    let filters = vec!["user_id = ?".to_string(), "is_active = ?".to_string()];
    let stmt = query_builder(TABLE_NAME, &filters, vec![]);
    Ok(binds_query_as::<User>(&stmt, binds)
        .fetch_optional(&mut **tx)
        .await?)
}

pub async fn create_user(tx: &mut Transaction<'_, Sqlite>, user: &User) -> anyhow::Result<()> {
    sqlx::query(
        format!(
            r#"INSERT INTO {} (user_id, full_name, mob_num, pan_num, manager_id, created_at, updated_at, is_active)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&user.user_id)
    .bind(&user.full_name)
    .bind(&user.mob_num)
    .bind(&user.pan_num)
    .bind(&user.manager_id)
    .bind(user.created_at)
    .bind(user.updated_at)
    .bind(user.is_active)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// Flags matching active rows inactive and returns how many were changed.
pub async fn soft_delete_user(
    tx: &mut Transaction<'_, Sqlite>,
    selector: &UserSelector,
    now: &DateTime<Utc>,
) -> anyhow::Result<u64> {
    let mut binds = vec![SqlxBinds::Bool(false), SqlxBinds::DateTimeUtc(*now)];
    let sets = vec!["is_active = ?".to_string(), "updated_at = ?".to_string()];
    let mut filters: Vec<String> = vec![];
    match selector {
        UserSelector::UserId(val) => {
            binds.push(SqlxBinds::String(val.clone()));
            filters.push("user_id = ?".to_string());
        }
        UserSelector::MobNum(val) => {
            binds.push(SqlxBinds::String(val.clone()));
            filters.push("mob_num = ?".to_string());
        }
    }
    binds.push(SqlxBinds::Bool(true));
    filters.push("is_active = ?".to_string());

    let stmt = update_builder(TABLE_NAME, &sets, &filters);
    let res = binds_query(&stmt, binds).execute(&mut **tx).await?;
    Ok(res.rows_affected())
}

pub async fn update_user_manager(
    tx: &mut Transaction<'_, Sqlite>,
    user: &mut User,
    manager_id: &str,
    now: &DateTime<Utc>,
) -> anyhow::Result<()> {
    user.manager_id = manager_id.to_string();
    user.updated_at = *now;
    sqlx::query(
        format!(
            "UPDATE {} SET manager_id = ?, updated_at = ? WHERE user_id = ?",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&user.manager_id)
    .bind(user.updated_at)
    .bind(&user.user_id)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
