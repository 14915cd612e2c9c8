//! Store Service Library
//!
//! Data access for the skill-sharing backend: SeaORM entities and migrations
//! for every collection, and one repository per collection applying the
//! soft-delete lookup discipline.

pub mod config;
pub mod infra;
pub mod repository;

use tracing::info;

use crate::config::StoreServiceConfig;
use crate::infra::Database;

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Check that the configured database answers.
pub async fn ping() -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;
    db.ping().await?;
    info!("Database reachable");
    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
