use polars::prelude::PolarsError;
use rust_xlsxwriter::XlsxError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("File processing error: {0}")]
    FileProcessingError(String),
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),
    #[error("DataFrame error: {0}")]
    DataFrameError(#[from] PolarsError),
    #[error("Workbook write error: {0}")]
    WorkbookError(#[from] XlsxError),
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl From<calamine::Error> for AppError {
    fn from(err: calamine::Error) -> Self {
        AppError::FileProcessingError(err.to_string())
    }
}
