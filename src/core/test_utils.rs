use std::sync::Arc;

use poem::{
    middleware::{AddDataEndpoint, CorsEndpoint},
    test::TestClient,
    Route,
};
use sqlx::SqlitePool;

use crate::{core::db::init_schema, init_openapi_route, settings::Config, AppState};

pub type TestApp = CorsEndpoint<AddDataEndpoint<Route, Arc<AppState>>>;

/// Bootstraps the schema on `pool` and wraps the full route tree, mounted on `/api`.
pub async fn generate_test_client(pool: SqlitePool) -> anyhow::Result<TestClient<TestApp>> {
    init_schema(&pool).await?;
    let config = Config {
        prefix: Some("/api".to_string()),
        ..Config::default()
    };
    let app_state = Arc::new(AppState { db: pool });
    Ok(TestClient::new(init_openapi_route(app_state, &config)))
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use sqlx::SqlitePool;

    use super::generate_test_client;

    #[sqlx::test]
    async fn test_generate_test_client(pool: SqlitePool) -> anyhow::Result<()> {
        // When
        let cli = generate_test_client(pool.clone()).await?;
        let resp = cli.post("/api/get_users").body_json(&json!({})).send().await;

        // Expect
        resp.assert_status_is_ok();
        let body: Value = resp.json().await.value().deserialize();
        assert_eq!(body, json!({"users": []}));
        let managers: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM managers")
            .fetch_one(&pool)
            .await?;
        assert_eq!(managers.0, 3);
        Ok(())
    }
}
