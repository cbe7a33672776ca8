use diesel::{Connection, PgConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use lostpaws_utils::error::LostpawsResult;
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Runs pending migrations on a dedicated blocking connection. Called once at startup, before the
/// async pool is built.
pub fn run(db_url: &str) -> LostpawsResult<()> {
  let mut conn = PgConnection::establish(db_url)?;
  let applied = conn
    .run_pending_migrations(MIGRATIONS)
    .map_err(|e| anyhow::anyhow!("Couldn't run DB migrations: {e}"))?;
  for migration in applied {
    info!("Applied migration {migration}");
  }
  Ok(())
}
