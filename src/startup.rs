//! Database initialization for hosting processes.

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::{config::Config, error::AppError};

/// Connects to the configured database and applies pending migrations.
///
/// # Arguments
/// - `config` - Application configuration with the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected and fully migrated database
/// - `Err(AppError)` - Connection or migration failure
pub async fn init_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let db = Database::connect(&config.database_url).await?;

    Migrator::up(&db, None).await?;
    info!("database connected and migrations applied");

    Ok(db)
}
