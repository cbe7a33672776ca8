use crate::error::LostpawsResult;
use deser_hjson::from_str;
use std::{env, fs, path::PathBuf};

pub mod structs;

use structs::Settings;

static DEFAULT_CONFIG_FILE: &str = "config/config.hjson";

impl Settings {
  /// Reads the config from the given file (falling back to
  /// `LOSTPAWS_CONFIG_LOCATION`, then the default location) and returns it as
  /// a plain value. Missing file means built-in defaults, which is enough to
  /// run tests against a local database.
  pub fn init(config_location: Option<PathBuf>) -> LostpawsResult<Settings> {
    let path = config_location.unwrap_or_else(|| {
      env::var("LOSTPAWS_CONFIG_LOCATION")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
    });

    if path.exists() {
      Ok(from_str::<Settings>(&fs::read_to_string(&path)?)?)
    } else {
      Ok(Settings::default())
    }
  }

  /// The env var `LOSTPAWS_DATABASE_URL` overrides the config file, which
  /// keeps credentials out of checked-in config.
  pub fn get_database_url(&self) -> String {
    match env::var("LOSTPAWS_DATABASE_URL") {
      Ok(url) => url,
      Err(_) => self.database.connection.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_missing_file_uses_defaults() -> LostpawsResult<()> {
    let settings = Settings::init(Some(PathBuf::from("/nonexistent/config.hjson")))?;

    assert_eq!("localhost", settings.hostname);
    assert_eq!(8560, settings.port);

    Ok(())
  }

  #[test]
  fn test_parses_hjson() -> LostpawsResult<()> {
    let parsed = from_str::<Settings>(
      r#"{
        hostname: pets.example
        port: 9000
        database: {
          pool_size: 5
        }
      }"#,
    )?;

    assert_eq!("pets.example", parsed.hostname);
    assert_eq!(9000, parsed.port);
    assert_eq!(5, parsed.database.pool_size);

    Ok(())
  }
}
