//! Spreadsheet import, cleaning and report generation.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{AppError, Result};
pub use models::{ColumnKind, ImportMetadata};
