pub mod config;
pub use config::Config;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreqLensError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("empty input: {0}")]
    EmptyInput(String),
    #[error("non-finite value: {0}")]
    NonFinite(String),
    #[error("no numeric data: {0}")]
    NoNumericData(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FreqLensError>;
