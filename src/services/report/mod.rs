pub mod generator;
pub mod summary;
pub mod workbook;

pub use generator::{generate, ReportGenerator, ReportOptions, ReportPaths};
pub use summary::build_text_summary;
pub use workbook::build_workbook;
