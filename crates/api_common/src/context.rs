use lostpaws_db_schema::utils::{ActualDbPool, DbPool};
use lostpaws_utils::settings::structs::Settings;
use std::sync::Arc;

#[derive(Clone)]
pub struct LostpawsContext {
  pool: ActualDbPool,
  settings: Arc<Settings>,
}

impl LostpawsContext {
  pub fn create(pool: ActualDbPool, settings: Settings) -> LostpawsContext {
    LostpawsContext {
      pool,
      settings: Arc::new(settings),
    }
  }

  pub fn pool(&self) -> DbPool<'_> {
    DbPool::Pool(&self.pool)
  }

  pub fn inner_pool(&self) -> &ActualDbPool {
    &self.pool
  }

  pub fn settings(&self) -> &Settings {
    &self.settings
  }
}
