//! `employees-server`: serves the employee REST API
//!
//! Configuration comes from the YAML file named by `EMPLOYEES_CONFIG` (if
//! set) plus environment overrides; see [`employees::config::AppConfig`].

use anyhow::Result;
use employees::config::{AppConfig, Backend};
use employees::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(backend = ?config.database.backend, "starting employees server");

    let builder = match config.database.backend {
        Backend::InMemory => ServerBuilder::new().with_repository(InMemoryEmployeeRepository::new()),
        Backend::Postgres => postgres_builder(&config).await?,
    };

    builder.serve(&config.server.bind_addr()).await
}

#[cfg(feature = "postgres")]
async fn postgres_builder(config: &AppConfig) -> Result<ServerBuilder> {
    use employees::storage::postgres::{connect, ensure_schema};

    let url = config
        .database
        .url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("database.url is required for the postgres backend"))?;

    let pool = connect(url, config.database.max_connections).await?;
    ensure_schema(&pool).await?;

    Ok(ServerBuilder::new().with_repository(PostgresEmployeeRepository::new(pool)))
}

#[cfg(not(feature = "postgres"))]
async fn postgres_builder(_config: &AppConfig) -> Result<ServerBuilder> {
    Err(anyhow::anyhow!(
        "this binary was built without the `postgres` feature"
    ))
}
