use super::Codec;
use crate::error::Result;
use crate::model::Medicine;
use rusqlite::{params, Connection};
use std::path::Path;

const INSERT_SQL: &str =
    "INSERT INTO medicines (name, dosage, expiryDate, quantity) VALUES (?1, ?2, ?3, ?4)";

/// The relational backend: a `medicines` table keyed by name.
///
/// Unlike the file codecs, the unit of persistence here is one row, and name
/// uniqueness is enforced by the primary key rather than by the in-memory
/// inventory. Dates are stored as `YYYY-MM-DD` text, the same contract as the
/// textual codecs.
pub struct MedicineDb {
    conn: Connection,
}

impl MedicineDb {
    /// Open (or create) a database at the given path and ensure the
    /// `medicines` table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Open an in-memory database. Useful for testing.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS medicines (
                name TEXT PRIMARY KEY,
                dosage TEXT NOT NULL,
                expiryDate TEXT NOT NULL,
                quantity INTEGER NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    /// Insert one record. A second record with the same name fails with a
    /// primary-key conflict.
    pub fn insert(&self, medicine: &Medicine) -> Result<()> {
        self.conn.execute(
            INSERT_SQL,
            params![
                medicine.name,
                medicine.dosage,
                medicine.format_expiry(),
                medicine.quantity
            ],
        )?;
        Ok(())
    }

    /// Update dosage, expiry date and quantity for the named record.
    /// Returns the number of rows touched (0 when the name is absent).
    pub fn update(&self, medicine: &Medicine) -> Result<usize> {
        let touched = self.conn.execute(
            "UPDATE medicines SET dosage = ?1, expiryDate = ?2, quantity = ?3 WHERE name = ?4",
            params![
                medicine.dosage,
                medicine.format_expiry(),
                medicine.quantity,
                medicine.name
            ],
        )?;
        Ok(touched)
    }

    /// Delete the named record. Returns the number of rows touched.
    pub fn delete(&self, name: &str) -> Result<usize> {
        let touched = self
            .conn
            .execute("DELETE FROM medicines WHERE name = ?1", params![name])?;
        Ok(touched)
    }

    /// Read back every row, in insertion order.
    ///
    /// Dates are parsed outside the row mapper so one non-conforming stored
    /// value fails the whole query with the offending field named, rather
    /// than dropping the row.
    pub fn select_all(&self) -> Result<Vec<Medicine>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, dosage, expiryDate, quantity FROM medicines")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i32>(3)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (name, dosage, expiry_text, quantity) = row?;
            let expiry = Medicine::parse_expiry(&expiry_text)?;
            records.push(Medicine::new(name, dosage, expiry, quantity));
        }
        Ok(records)
    }
}

impl Codec for MedicineDb {
    /// Full-table replace: delete every row, then insert the sequence, in
    /// one transaction. Either the table ends up mirroring the collection or
    /// it is left as it was.
    fn encode(&mut self, records: &[Medicine]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM medicines", [])?;
        {
            let mut stmt = tx.prepare(INSERT_SQL)?;
            for medicine in records {
                stmt.execute(params![
                    medicine.name,
                    medicine.dosage,
                    medicine.format_expiry(),
                    medicine.quantity
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn decode(&self) -> Result<Vec<Medicine>> {
        self.select_all()
    }
}
