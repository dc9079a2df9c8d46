//! # Pillbox Architecture
//!
//! Pillbox is a **UI-agnostic inventory library**: one authoritative
//! in-memory collection of medicine records that can be loaded from and
//! flushed to several interchangeable external representations.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Caller (a CLI, a test, any embedding)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store::Inventory)                                   │
//! │  - add / list / update_at / delete_at / find_by_name        │
//! │  - load_from / save_to orchestration, snapshot-or-empty     │
//! │    construction, export/import convenience wrappers         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Codecs (codec::Codec)                                      │
//! │  - SnapshotFile (bincode), CsvFile, JsonFile, MedicineDb    │
//! │  - each carries its own destination; the store stays        │
//! │    backend-agnostic                                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: One Writer, One Sequence
//!
//! Everything is single-threaded and synchronous. The inventory owns the
//! only mutable sequence; read accessors return clones, so no caller can
//! alias internal state. Loads are all-or-nothing: a decode either replaces
//! the whole sequence or leaves it exactly as it was.
//!
//! ## Field Semantics
//!
//! Expiry dates parse and format through the fixed `YYYY-MM-DD` pattern in
//! every textual backend. Quantities are plain integers; negative values are
//! accepted and passed through. A malformed date or quantity aborts the
//! decode that saw it, with the offending field named in the error.
//!
//! ## Module Overview
//!
//! - [`store`]: the `Inventory` and its operations
//! - [`codec`]: the codec trait and its four implementations
//! - [`model`]: the `Medicine` record and the shared parse/format helpers
//! - [`config`]: snapshot and database paths, passed in at construction
//! - [`error`]: error types

pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
