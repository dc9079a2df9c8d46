use crate::error::{PillboxError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SNAPSHOT_PATH: &str = "medicines.dat";
const DEFAULT_DB_PATH: &str = "medicines.db";

/// Configuration for pillbox, stored in config.json.
///
/// Both paths default to files in the current directory; callers that want
/// their data elsewhere pass a config into [`Inventory::open`] rather than
/// relying on process-wide constants.
///
/// [`Inventory::open`]: crate::store::Inventory::open
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PillboxConfig {
    /// Where the binary session snapshot lives
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// The SQLite database backing the relational table
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from(DEFAULT_SNAPSHOT_PATH)
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

impl Default for PillboxConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            db_path: default_db_path(),
        }
    }
}

impl PillboxConfig {
    /// A config whose data files live under the given directory.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            snapshot_path: dir.join(DEFAULT_SNAPSHOT_PATH),
            db_path: dir.join(DEFAULT_DB_PATH),
        }
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PillboxError::Io)?;
        let config: PillboxConfig =
            serde_json::from_str(&content).map_err(PillboxError::Json)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PillboxError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PillboxError::Json)?;
        fs::write(config_path, content).map_err(PillboxError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PillboxConfig::default();
        assert_eq!(config.snapshot_path, PathBuf::from("medicines.dat"));
        assert_eq!(config.db_path, PathBuf::from("medicines.db"));
    }

    #[test]
    fn test_in_dir_prefixes_both_paths() {
        let config = PillboxConfig::in_dir("/tmp/pillbox");
        assert_eq!(config.snapshot_path, PathBuf::from("/tmp/pillbox/medicines.dat"));
        assert_eq!(config.db_path, PathBuf::from("/tmp/pillbox/medicines.db"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = PillboxConfig::load(temp_dir.path().join("nowhere")).unwrap();
        assert_eq!(config, PillboxConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let config = PillboxConfig::in_dir(temp_dir.path());
        config.save(temp_dir.path()).unwrap();

        let loaded = PillboxConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = PillboxConfig {
            snapshot_path: PathBuf::from("stock.dat"),
            db_path: PathBuf::from("stock.db"),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: PillboxConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
