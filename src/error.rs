use thiserror::Error;

#[derive(Debug, Error)]
pub enum DinnerError {
    #[error("Parse error in '{table}' row {row}: {message}")]
    Parse {
        table: String,
        row: usize,
        message: String,
    },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DinnerError {
    /// Build a parse error for a sheet row (1-based, header is row 1).
    pub fn parse(table: &str, row: usize, message: impl Into<String>) -> Self {
        DinnerError::Parse {
            table: table.to_string(),
            row,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DinnerError>;
