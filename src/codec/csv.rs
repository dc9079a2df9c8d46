use super::Codec;
use crate::error::{PillboxError, Result};
use crate::model::Medicine;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// CSV export/import: one row per record, no header row.
///
/// Columns are positional and fixed: `name,dosage,expiryDate,quantity`, with
/// the date in `YYYY-MM-DD` form. Quoting follows the csv crate defaults.
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn column<'r>(row: &'r csv::StringRecord, index: usize) -> Result<&'r str> {
    row.get(index).ok_or_else(|| PillboxError::Parse {
        field: "CSV row",
        value: format!("expected 4 columns, got {}", row.len()),
    })
}

impl Codec for CsvFile {
    fn encode(&mut self, records: &[Medicine]) -> Result<()> {
        let file = File::create(&self.path).map_err(PillboxError::Io)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(file));

        for medicine in records {
            writer.write_record(&[
                medicine.name.clone(),
                medicine.dosage.clone(),
                medicine.format_expiry(),
                medicine.quantity.to_string(),
            ])?;
        }

        writer.flush().map_err(PillboxError::Io)?;
        Ok(())
    }

    fn decode(&self) -> Result<Vec<Medicine>> {
        let file = File::open(&self.path).map_err(PillboxError::Io)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(BufReader::new(file));

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let medicine = Medicine::new(
                column(&row, 0)?,
                column(&row, 1)?,
                Medicine::parse_expiry(column(&row, 2)?)?,
                Medicine::parse_quantity(column(&row, 3)?)?,
            );
            records.push(medicine);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PillboxError;
    use std::fs;

    fn sample() -> Vec<Medicine> {
        vec![
            Medicine::new(
                "Amoxicillin",
                "500mg",
                Medicine::parse_expiry("2025-01-01").unwrap(),
                30,
            ),
            Medicine::new(
                "Paracetamol, extended release",
                "1g",
                Medicine::parse_expiry("2024-09-15").unwrap(),
                -2,
            ),
        ]
    }

    #[test]
    fn roundtrip_preserves_every_field() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut codec = CsvFile::new(temp_dir.path().join("export.csv"));

        let records = sample();
        codec.encode(&records).unwrap();

        assert_eq!(codec.decode().unwrap(), records);
    }

    #[test]
    fn writes_headerless_fixed_order_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("export.csv");
        let mut codec = CsvFile::new(&path);

        codec.encode(&sample()[..1]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Amoxicillin,500mg,2025-01-01,30\n");
    }

    #[test]
    fn unparseable_date_fails_the_import() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("import.csv");
        fs::write(&path, "Aspirin,100mg,2024/13/40,10\n").unwrap();

        let err = CsvFile::new(&path).decode().unwrap_err();
        assert!(matches!(
            err,
            PillboxError::Parse {
                field: "expiry date",
                ..
            }
        ));
    }

    #[test]
    fn unparseable_quantity_fails_the_import() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("import.csv");
        fs::write(&path, "Aspirin,100mg,2024-12-31,plenty\n").unwrap();

        let err = CsvFile::new(&path).decode().unwrap_err();
        assert!(matches!(
            err,
            PillboxError::Parse {
                field: "quantity",
                ..
            }
        ));
    }

    #[test]
    fn short_row_fails_the_import() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("import.csv");
        fs::write(&path, "Aspirin,100mg\n").unwrap();

        assert!(CsvFile::new(&path).decode().is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let codec = CsvFile::new(temp_dir.path().join("absent.csv"));

        assert!(matches!(
            codec.decode().unwrap_err(),
            PillboxError::Io(_)
        ));
    }
}
