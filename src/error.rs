use thiserror::Error;

#[derive(Error, Debug)]
pub enum PillboxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid {field}: {value:?}")]
    Parse { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, PillboxError>;
