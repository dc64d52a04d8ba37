use crate::{
    core::db::{init_pool, init_schema},
    settings::Config,
};

pub async fn db_init(config: &Config) -> anyhow::Result<()> {
    let pool = init_pool(config).await?;
    init_schema(&pool).await?;
    pool.close().await;
    Ok(())
}
