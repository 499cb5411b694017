mod bot;
mod config;
mod data;
mod dialogue;
mod error;
mod model;
mod service;
mod util;

#[cfg(test)]
mod test_support;

use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::bot::start;
use crate::config::Config;
use crate::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = Database::connect(&config.database_url).await?;
    Migrator::up(&db, None).await?;

    info!("Starting bot");

    let client = start::init_bot(&config, db).await?;
    start::start_bot(client).await?;

    Ok(())
}
