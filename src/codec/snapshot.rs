use super::Codec;
use crate::error::{PillboxError, Result};
use crate::model::Medicine;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Whole-collection binary snapshot, used for session continuity.
///
/// The format is opaque (bincode over the record sequence). A missing file
/// decodes to an empty sequence so a fresh session starts clean; a file that
/// exists but cannot be read or deserialized is an error, which
/// [`Inventory::open`] alone degrades to start-empty.
///
/// [`Inventory::open`]: crate::store::Inventory::open
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Codec for SnapshotFile {
    fn encode(&mut self, records: &[Medicine]) -> Result<()> {
        let file = File::create(&self.path).map_err(PillboxError::Io)?;
        let writer = BufWriter::new(file);
        bincode::serialize_into(writer, records).map_err(PillboxError::Snapshot)?;
        Ok(())
    }

    fn decode(&self) -> Result<Vec<Medicine>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path).map_err(PillboxError::Io)?;
        let reader = BufReader::new(file);
        let records = bincode::deserialize_from(reader).map_err(PillboxError::Snapshot)?;
        Ok(records)
    }
}
