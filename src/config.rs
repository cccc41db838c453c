use std::path::PathBuf;

use crate::cli::Cli;
use crate::services::excel::ImportOptions;
use crate::services::report::ReportOptions;

#[derive(Debug, Clone)]
pub struct Config {
    pub file: Option<PathBuf>,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub import: ImportOptions,
    pub report: ReportOptions,
    pub print_json: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Config {
            file: cli.file.clone(),
            input_dir: cli.input_dir.clone(),
            output_dir: cli.output_dir.clone(),
            import: ImportOptions {
                sheet: cli.sheet.clone(),
                header_row: cli.header_row,
                clean: !cli.no_clean,
            },
            report: ReportOptions {
                no_overwrite: cli.no_overwrite,
            },
            print_json: cli.json,
        }
    }

    /// Creates the input and output directories when missing.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.input_dir)?;
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }
}
