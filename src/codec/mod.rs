//! # Persistence Codecs
//!
//! This module defines the codec abstraction for pillbox. The [`Codec`] trait
//! allows the inventory to be persisted through interchangeable external
//! representations.
//!
//! ## Design Rationale
//!
//! Codecs are abstracted behind a trait to:
//! - Keep the inventory's in-memory shape a single ordered sequence no matter
//!   which representation is in play
//! - Let callers mix representations (edit in memory, export to CSV, sync the
//!   same records to the relational table) without format-specific logic in
//!   the store
//!
//! ## Implementations
//!
//! - [`snapshot::SnapshotFile`]: whole-collection binary snapshot (bincode),
//!   the default session format. A missing file decodes to an empty sequence.
//! - [`CsvFile`](crate::codec::csv::CsvFile): one headerless row per record,
//!   four columns in fixed order (`name,dosage,expiryDate,quantity`).
//! - [`json::JsonFile`]: whole-collection JSON array with attributes
//!   `name, dosage, expiryDate, quantity`.
//! - [`sqlite::MedicineDb`]: a `medicines` table keyed by name. Unlike the
//!   file codecs its unit of persistence is one row; the trait impl maps
//!   `decode` to `select_all` and `encode` to a transactional full-table
//!   replace.
//!
//! ## Failure Contract
//!
//! Decoding is all-or-nothing: the first malformed date or quantity aborts
//! the decode with [`PillboxError::Parse`] naming the offending field, and no
//! partial sequence is returned. I/O failures surface separately as
//! [`PillboxError::Io`].
//!
//! [`PillboxError::Parse`]: crate::error::PillboxError::Parse
//! [`PillboxError::Io`]: crate::error::PillboxError::Io

use crate::error::Result;
use crate::model::Medicine;

pub mod csv;
pub mod json;
pub mod snapshot;
pub mod sqlite;

/// A paired encode/decode routine for one external representation.
///
/// Each implementation carries its own destination (a file path or an open
/// database connection), so the store never handles format-specific state.
pub trait Codec {
    /// Persist the full sequence, overwriting any prior content.
    fn encode(&mut self, records: &[Medicine]) -> Result<()>;

    /// Read back a full sequence from the destination.
    fn decode(&self) -> Result<Vec<Medicine>>;
}
