pub mod analyzer;
pub mod importer;
pub mod types;
pub mod utils;

pub use analyzer::ExcelAnalyzer;
pub use importer::{clean, describe, import_from_excel, load};
pub use types::{ImportOptions, SheetSelector, SummaryStatistics};
