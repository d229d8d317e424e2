use thiserror::Error;

pub type Result<T> = std::result::Result<T, BankError>;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("operation not supported: {0}")]
    UnsupportedOperation(&'static str),
    #[error("invalid account type: {0}")]
    InvalidAccountType(String),
    #[error("invalid command: {0}")]
    InvalidCommand(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
