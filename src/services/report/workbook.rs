use std::path::Path;

use polars::prelude::*;
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::{AppError, Result};
use crate::models::{ColumnInfo, ColumnKind};
use crate::services::excel::types::{SummaryStatistics, DESCRIBE_LABELS};
use crate::services::excel::ExcelAnalyzer;

pub const DATA_SHEET: &str = "Dados_Originais";
pub const STATISTICS_SHEET: &str = "Estatisticas";
pub const COLUMNS_SHEET: &str = "Analise_Colunas";

const COLUMN_HEADERS: [&str; 4] = ["Coluna", "Tipo_Dado", "Valores_Unicos", "Valores_Nulos"];

/// Writes the three report sheets, in their fixed order, to `path`.
pub fn build_workbook(df: &DataFrame, path: &Path) -> Result<()> {
    let stats = ExcelAnalyzer.summary_statistics(df)?;
    let profiles = ExcelAnalyzer.column_profiles(df)?;
    write_workbook(df, &stats, &profiles, path)
}

pub(crate) fn write_workbook(
    df: &DataFrame,
    stats: &SummaryStatistics,
    profiles: &[ColumnInfo],
    path: &Path,
) -> Result<()> {
    let header = Format::new().set_bold();
    let mut workbook = Workbook::new();

    write_data_sheet(workbook.add_worksheet(), df, &header)?;
    write_statistics_sheet(workbook.add_worksheet(), stats, &header)?;
    write_columns_sheet(workbook.add_worksheet(), profiles, &header)?;

    workbook.save(path)?;
    tracing::info!("Workbook report written to {}", path.display());
    Ok(())
}

fn col_index(idx: usize) -> Result<u16> {
    u16::try_from(idx).map_err(|_| AppError::InvalidInput(format!("too many columns for a worksheet: {}", idx + 1)))
}

fn row_index(idx: usize) -> Result<u32> {
    u32::try_from(idx).map_err(|_| AppError::InvalidInput(format!("too many rows for a worksheet: {}", idx + 1)))
}

fn write_data_sheet(sheet: &mut Worksheet, df: &DataFrame, header: &Format) -> Result<()> {
    sheet.set_name(DATA_SHEET)?;

    for (idx, series) in df.get_columns().iter().enumerate() {
        let col = col_index(idx)?;
        sheet.write_string_with_format(0, col, series.name(), header)?;

        match (ColumnKind::of(series), series.dtype()) {
            (ColumnKind::Numeric, _) => {
                let as_float = series.cast(&DataType::Float64)?;
                for (row, value) in as_float.f64()?.into_iter().enumerate() {
                    if let Some(value) = value {
                        sheet.write_number(row_index(row + 1)?, col, value)?;
                    }
                }
            }
            (_, DataType::Boolean) => {
                for (row, value) in series.bool()?.into_iter().enumerate() {
                    if let Some(value) = value {
                        sheet.write_boolean(row_index(row + 1)?, col, value)?;
                    }
                }
            }
            _ => {
                let as_text = series.cast(&DataType::String)?;
                for (row, value) in as_text.str()?.into_iter().enumerate() {
                    if let Some(value) = value {
                        sheet.write_string(row_index(row + 1)?, col, value)?;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Column names across the first row, statistic labels down the first column.
fn write_statistics_sheet(sheet: &mut Worksheet, stats: &SummaryStatistics, header: &Format) -> Result<()> {
    sheet.set_name(STATISTICS_SHEET)?;

    for (row, label) in DESCRIBE_LABELS.iter().enumerate() {
        sheet.write_string_with_format(row_index(row + 1)?, 0, *label, header)?;
    }

    for (idx, (name, description)) in stats.numeric.iter().enumerate() {
        let col = col_index(idx + 1)?;
        sheet.write_string_with_format(0, col, name, header)?;
        for (row, value) in description.values().iter().enumerate() {
            if let Some(value) = value {
                sheet.write_number(row_index(row + 1)?, col, *value)?;
            }
        }
    }

    Ok(())
}

fn write_columns_sheet(sheet: &mut Worksheet, profiles: &[ColumnInfo], header: &Format) -> Result<()> {
    sheet.set_name(COLUMNS_SHEET)?;

    for (col, title) in COLUMN_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col_index(col)?, *title, header)?;
    }

    for (idx, profile) in profiles.iter().enumerate() {
        let row = row_index(idx + 1)?;
        sheet.write_string(row, 0, &profile.name)?;
        sheet.write_string(row, 1, profile.kind.as_str())?;
        sheet.write_number(row, 2, profile.unique_count as f64)?;
        sheet.write_number(row, 3, profile.null_count as f64)?;
    }

    Ok(())
}
