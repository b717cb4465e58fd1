//! Store bootstrap: pick and prepare the persistence backend named by
//! `DATABASE_URL`.

use std::sync::Arc;

use anyhow::Context;
use notes_core::memory::MemoryNoteStore;
use notes_core::store::SharedNoteStore;
use notes_db::PgNoteStore;

use crate::config::ServerConfig;

/// Open the configured store.
///
/// `memory://` yields an empty in-process store. Anything else is treated as
/// a Postgres URL: the pool is created, checked and migrated before use.
pub async fn open_store(config: &ServerConfig) -> anyhow::Result<SharedNoteStore> {
    if config.uses_memory_store() {
        tracing::warn!("Using in-memory note store; data will not survive a restart");
        return Ok(Arc::new(MemoryNoteStore::new()));
    }

    let pool = notes_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    notes_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    notes_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(Arc::new(PgNoteStore::new(pool)))
}
