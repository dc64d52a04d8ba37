use chrono::{DateTime, Utc};
use sqlx::{
    query::{Query, QueryAs},
    sqlite::{SqliteArguments, SqliteRow},
    Sqlite,
};

#[derive(Clone, Debug, PartialEq)]
pub enum SqlxBinds {
    String(String),
    Bool(bool),
    DateTimeUtc(DateTime<Utc>),
}

pub fn binds_query<'a>(
    stmt: &'a str,
    binds: Vec<SqlxBinds>,
) -> Query<'a, Sqlite, SqliteArguments<'a>> {
    let mut q: Query<'a, Sqlite, SqliteArguments<'a>> = sqlx::query(stmt);
    for bind in binds {
        q = match bind {
            SqlxBinds::String(val) => q.bind(val),
            SqlxBinds::Bool(val) => q.bind(val),
            SqlxBinds::DateTimeUtc(val) => q.bind(val),
        };
    }
    q
}

pub fn binds_query_as<'a, T: for<'r> sqlx::FromRow<'r, SqliteRow>>(
    stmt: &'a str,
    binds: Vec<SqlxBinds>,
) -> QueryAs<'a, Sqlite, T, SqliteArguments<'a>> {
    let mut q: QueryAs<'a, Sqlite, T, SqliteArguments<'a>> = sqlx::query_as(stmt);
    for bind in binds {
        q = match bind {
            SqlxBinds::String(val) => q.bind(val),
            SqlxBinds::Bool(val) => q.bind(val),
            SqlxBinds::DateTimeUtc(val) => q.bind(val),
        };
    }
    q
}

/// Joins `wheres` with AND. Every placeholder in `wheres` must be a bare `?`
/// with its value pushed to the bind list in the same order.
fn where_clause(wheres: &[String]) -> String {
    if wheres.is_empty() {
        return String::new();
    }
    format!(" WHERE {}", wheres.join(" AND "))
}

pub fn query_builder(table_name: &str, wheres: &[String], order_by: Vec<String>) -> String {
    let mut stmt = format!("SELECT * FROM {}", table_name);

    // Where
    stmt.push_str(&where_clause(wheres));

    // order by
    if !order_by.is_empty() {
        stmt.push_str(" ORDER BY ");
        stmt.push_str(&order_by.join(", "));
    }
    stmt
}

pub fn update_builder(table_name: &str, sets: &[String], wheres: &[String]) -> String {
    format!(
        "UPDATE {} SET {}{}",
        table_name,
        sets.join(", "),
        where_clause(wheres)
    )
}

#[cfg(test)]
mod tests {
    use super::{query_builder, update_builder};

    #[test]
    fn test_query_builder_without_filter() {
        let stmt = query_builder("users", &[], vec![]);
        assert_eq!(stmt, "SELECT * FROM users");
    }

    #[test]
    fn test_query_builder_with_filters_and_order() {
        let stmt = query_builder(
            "users",
            &["is_active = ?".to_string(), "manager_id = ?".to_string()],
            vec!["created_at ASC".to_string(), "user_id ASC".to_string()],
        );
        assert_eq!(
            stmt,
            "SELECT * FROM users WHERE is_active = ? AND manager_id = ? ORDER BY created_at ASC, user_id ASC"
        );
    }

    #[test]
    fn test_update_builder() {
        let stmt = update_builder(
            "users",
            &["is_active = ?".to_string(), "updated_at = ?".to_string()],
            &["user_id = ?".to_string(), "is_active = ?".to_string()],
        );
        assert_eq!(
            stmt,
            "UPDATE users SET is_active = ?, updated_at = ? WHERE user_id = ? AND is_active = ?"
        );
    }
}
