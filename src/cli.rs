//! Command-line arguments of `sheet-report`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};

use crate::services::excel::SheetSelector;

#[derive(Debug, Parser)]
#[command(
    name = "sheet-report",
    version,
    about = "Import a spreadsheet, clean it and write a workbook report plus a text summary"
)]
pub struct Cli {
    /// Workbook to import. When omitted, the files in --input-dir are listed for selection.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Directory scanned for workbooks when no FILE is given.
    #[arg(long = "input-dir", value_name = "DIR", default_value = "data/input")]
    pub input_dir: PathBuf,

    /// Directory the reports are written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "data/output")]
    pub output_dir: PathBuf,

    /// Sheet to read, by 0-based position or by name.
    #[arg(long, value_name = "NAME|INDEX", default_value = "0")]
    pub sheet: SheetSelector,

    /// 0-based row holding the column names.
    #[arg(long = "header-row", value_name = "N", default_value_t = 0)]
    pub header_row: usize,

    /// Skip the cleaning step.
    #[arg(long = "no-clean")]
    pub no_clean: bool,

    /// Never replace reports from the same minute; add a numeric suffix instead.
    #[arg(long = "no-overwrite")]
    pub no_overwrite: bool,

    /// Print the import metadata as JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
