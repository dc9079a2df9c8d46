use crate::codec::csv::CsvFile;
use crate::codec::json::JsonFile;
use crate::codec::snapshot::SnapshotFile;
use crate::codec::Codec;
use crate::config::PillboxConfig;
use crate::error::Result;
use crate::model::Medicine;
use std::path::Path;

/// The authoritative in-memory collection of medicine records.
///
/// Records keep insertion order until a load replaces the whole sequence.
/// The inventory owns its sequence exclusively: `list` and `find_by_name`
/// return clones, so nothing outside can alias the internal state.
///
/// Position-based `update_at`/`delete_at` silently no-op when out of range.
/// That mirrors the intended caller contract (the position comes from a
/// listing the caller just saw) and is intentional: no error is signaled.
pub struct Inventory {
    config: PillboxConfig,
    records: Vec<Medicine>,
}

impl Inventory {
    /// Open an inventory, loading the default binary snapshot.
    ///
    /// If the snapshot is absent or unreadable the inventory starts with an
    /// empty sequence rather than failing.
    pub fn open(config: PillboxConfig) -> Self {
        let records = SnapshotFile::new(&config.snapshot_path)
            .decode()
            .unwrap_or_default();
        Self { config, records }
    }

    pub fn config(&self) -> &PillboxConfig {
        &self.config
    }

    /// Append a record. Always succeeds; no duplicate check.
    pub fn add(&mut self, record: Medicine) {
        self.records.push(record);
    }

    /// An independent copy of the full sequence. Mutating it never affects
    /// the inventory.
    pub fn list(&self) -> Vec<Medicine> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the record at `position`, or do nothing when out of range.
    pub fn update_at(&mut self, position: usize, record: Medicine) {
        if let Some(slot) = self.records.get_mut(position) {
            *slot = record;
        }
    }

    /// Remove the record at `position`, or do nothing when out of range.
    pub fn delete_at(&mut self, position: usize) {
        if position < self.records.len() {
            self.records.remove(position);
        }
    }

    /// Case-insensitive exact match on the name; first hit wins.
    pub fn find_by_name(&self, name: &str) -> Option<Medicine> {
        self.records
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    /// Replace the entire sequence with what the codec decodes.
    ///
    /// The decode completes before anything is replaced, so a failure leaves
    /// the prior sequence untouched; there is never a mix of old and new
    /// records.
    pub fn load_from<C: Codec>(&mut self, codec: &C) -> Result<()> {
        let records = codec.decode()?;
        self.records = records;
        Ok(())
    }

    /// Serialize the current sequence through the codec, overwriting any
    /// prior content at the destination.
    pub fn save_to<C: Codec>(&self, codec: &mut C) -> Result<()> {
        codec.encode(&self.records)
    }

    /// Write the default binary snapshot.
    pub fn save_snapshot(&self) -> Result<()> {
        self.save_to(&mut SnapshotFile::new(&self.config.snapshot_path))
    }

    pub fn export_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_to(&mut CsvFile::new(path.as_ref()))
    }

    pub fn import_csv(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.load_from(&CsvFile::new(path.as_ref()))
    }

    pub fn export_json(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_to(&mut JsonFile::new(path.as_ref()))
    }

    pub fn import_json(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.load_from(&JsonFile::new(path.as_ref()))
    }
}
