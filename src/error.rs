use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid {field} value in coordinate: '{value}'")]
    NumericFormat { field: &'static str, value: String },

    #[error("Line {line} cannot be decoded as {encoding}")]
    Encoding { line: usize, encoding: &'static str },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}
