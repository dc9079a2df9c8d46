use super::Codec;
use crate::error::{PillboxError, Result};
use crate::model::Medicine;
use std::fs;
use std::path::PathBuf;

/// JSON export/import: a top-level array of records.
///
/// Attribute names match the entity (`name, dosage, expiryDate, quantity`),
/// the date as a `YYYY-MM-DD` string. A malformed document aborts the import
/// with no partial result.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Codec for JsonFile {
    fn encode(&mut self, records: &[Medicine]) -> Result<()> {
        let content = serde_json::to_string_pretty(records).map_err(PillboxError::Json)?;
        fs::write(&self.path, content).map_err(PillboxError::Io)?;
        Ok(())
    }

    fn decode(&self) -> Result<Vec<Medicine>> {
        let content = fs::read_to_string(&self.path).map_err(PillboxError::Io)?;
        let records = serde_json::from_str(&content).map_err(PillboxError::Json)?;
        Ok(records)
    }
}
