use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use polars::prelude::DataFrame;
use tracing::{error, info, warn};

use super::summary::render_summary;
use super::workbook::write_workbook;
use crate::error::Result;
use crate::services::excel::ExcelAnalyzer;

const FILE_TIMESTAMP: &str = "%Y%m%d_%H%M";

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Pick `<stem>_<n>` instead of replacing a report from the same minute.
    pub no_overwrite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub workbook: PathBuf,
    pub summary: PathBuf,
}

pub struct ReportGenerator {
    options: ReportOptions,
}

impl ReportGenerator {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn generate(&self, df: &DataFrame, output_dir: &Path) -> Result<ReportPaths> {
        self.generate_at(df, output_dir, Local::now().naive_local())
    }

    /// Both artifacts share one timestamp. If the text summary cannot be
    /// written the workbook of this run is removed again.
    pub fn generate_at(&self, df: &DataFrame, output_dir: &Path, now: NaiveDateTime) -> Result<ReportPaths> {
        info!("Generating reports for {} records in {}", df.height(), output_dir.display());

        let stats = ExcelAnalyzer.summary_statistics(df)?;
        let profiles = ExcelAnalyzer.column_profiles(df)?;

        let stamp = now.format(FILE_TIMESTAMP).to_string();
        let workbook_path = self.target_path(output_dir, &format!("relatorio_{}", stamp), "xlsx");
        let summary_path = self.target_path(output_dir, &format!("sumario_{}", stamp), "txt");

        // A failed workbook write leaves earlier files alone; once the workbook
        // is written it belongs to this run, even when it replaced an older one
        let workbook_existed = workbook_path.exists();
        let summary_existed = summary_path.exists();

        if let Err(e) = write_workbook(df, &stats, &profiles, &workbook_path) {
            error!("Failed to write workbook {}: {}", workbook_path.display(), e);
            if !workbook_existed {
                remove_partial(&workbook_path);
            }
            return Err(e);
        }

        let summary = render_summary(df, &stats, now);
        if let Err(e) = write_text(&summary_path, &summary) {
            error!("Failed to write summary {}: {}", summary_path.display(), e);
            if !summary_existed {
                remove_partial(&summary_path);
            }
            remove_partial(&workbook_path);
            return Err(e);
        }
        info!("Text summary written to {}", summary_path.display());

        Ok(ReportPaths {
            workbook: workbook_path,
            summary: summary_path,
        })
    }

    fn target_path(&self, output_dir: &Path, stem: &str, extension: &str) -> PathBuf {
        let path = output_dir.join(format!("{}.{}", stem, extension));
        if !self.options.no_overwrite {
            return path;
        }

        let mut candidate = path;
        let mut counter = 1;
        while candidate.exists() {
            candidate = output_dir.join(format!("{}_{}.{}", stem, counter, extension));
            counter += 1;
        }
        candidate
    }
}

/// Writes the report bundle for `df` into `output_dir` with default options.
pub fn generate(df: &DataFrame, output_dir: &Path) -> Result<ReportPaths> {
    ReportGenerator::new(ReportOptions::default()).generate(df, output_dir)
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn remove_partial(path: &Path) {
    if path.exists() {
        if let Err(e) = fs::remove_file(path) {
            warn!("Could not remove partial report {}: {}", path.display(), e);
        }
    }
}
