use std::sync::Arc;

use poem::listener::TcpListener;
use tracing::Level;
use user_manager_service::{
    core::db::{init_pool, init_schema},
    init_openapi_route,
    settings::{get_config, uses_env_file},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_config()?;

    let log_level = Level::DEBUG;
    // Logging to File
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(log_level)
        .init();

    // Logging to Console
    // tracing_subscriber::fmt().with_max_level(log_level).init();

    if uses_env_file() {
        tracing::info!("using .env file as environtment variable");
    } else {
        tracing::info!("using server environtment as environtment variable");
    }
    tracing::info!("run with config: {:?}", config);

    // Init Database Connection
    tracing::info!("Init SQLite connection on {}", config.database_url);
    let pool = init_pool(&config).await?;
    init_schema(&pool).await?;
    // Init App State
    let app_state = Arc::new(AppState { db: pool });

    let app = init_openapi_route(app_state.clone(), &config);
    tracing::info!("run server on {}:{}", config.host, config.port);
    poem::Server::new(TcpListener::bind(format!(
        "{}:{}",
        config.host, config.port
    )))
    .run(app)
    .await?;
    Ok(())
}
