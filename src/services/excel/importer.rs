use std::collections::HashSet;
use std::path::Path;

use calamine::{open_workbook_auto, Data, DataType as _, Range, Reader};
use indexmap::IndexMap;
use polars::prelude::*;
use tracing::{debug, error, info, warn};

use super::types::{ImportOptions, SheetSelector};
use super::utils::{detect_column_type, header_name, is_missing, CellColumnType};
use crate::error::{AppError, Result};
use crate::models::{ColumnKind, ImportMetadata};

/// Reads one sheet into a `DataFrame`, taking column names from `header_row`.
pub fn load(path: &Path, sheet: &SheetSelector, header_row: usize) -> Result<DataFrame> {
    let start = std::time::Instant::now();
    info!("Loading {} (sheet {}, header row {})", path.display(), sheet, header_row);

    let mut workbook = open_workbook_auto(path).map_err(|e| {
        error!("Failed to open workbook {}: {}", path.display(), e);
        AppError::FileProcessingError(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let sheet_names = workbook.sheet_names().to_vec();
    debug!("Found {} sheets: {:?}", sheet_names.len(), sheet_names);

    let range: Range<Data> = match sheet {
        SheetSelector::Index(idx) => match workbook.worksheet_range_at(*idx) {
            Some(range) => range?,
            // Past the last sheet: the number may be a sheet name
            None if sheet_names.iter().any(|n| *n == idx.to_string()) => workbook.worksheet_range(&idx.to_string())?,
            None => {
                return Err(AppError::SheetNotFound(format!(
                    "index {} ({} sheets)",
                    idx,
                    sheet_names.len()
                )))
            }
        },
        SheetSelector::Name(name) => {
            if !sheet_names.iter().any(|n| n == name) {
                return Err(AppError::SheetNotFound(name.clone()));
            }
            workbook.worksheet_range(name)?
        }
    };

    let rows: Vec<Vec<Data>> = range.rows().map(|row| row.to_vec()).collect();
    if rows.is_empty() {
        warn!("Sheet {} is empty", sheet);
        return Ok(DataFrame::empty());
    }
    if header_row >= rows.len() {
        return Err(AppError::InvalidInput(format!(
            "header row {} is outside the sheet ({} rows)",
            header_row,
            rows.len()
        )));
    }

    let df = create_dataframe(&rows[header_row..], range.width())?;
    info!(
        "Loaded {} records x {} columns in {:?}",
        df.height(),
        df.width(),
        start.elapsed()
    );
    Ok(df)
}

/// `rows[0]` is the header row.
fn create_dataframe(rows: &[Vec<Data>], width: usize) -> Result<DataFrame> {
    let mut existing_names = HashSet::new();
    let mut columns = Vec::with_capacity(width);

    for col_idx in 0..width {
        let header = rows[0].get(col_idx).unwrap_or(&Data::Empty);
        let name = header_name(header, col_idx, &mut existing_names);

        let values: Vec<Data> = rows
            .iter()
            .skip(1)
            .map(|row| row.get(col_idx).cloned().unwrap_or(Data::Empty))
            .collect();
        let column_type = detect_column_type(&values);
        debug!("Column '{}' stored as {:?}", name, column_type);

        let series = match column_type {
            CellColumnType::Numeric => {
                let nums: Vec<Option<f64>> = values
                    .iter()
                    .map(|v| match v {
                        Data::Float(f) => Some(*f),
                        Data::Int(i) => Some(*i as f64),
                        _ => None,
                    })
                    .collect();
                Series::new(&name, nums)
            }
            CellColumnType::Boolean => {
                let flags: Vec<Option<bool>> = values
                    .iter()
                    .map(|v| match v {
                        Data::Bool(b) => Some(*b),
                        _ => None,
                    })
                    .collect();
                Series::new(&name, flags)
            }
            CellColumnType::DateTime => {
                let millis: Vec<Option<i64>> = values
                    .iter()
                    .map(|v| v.as_datetime().map(|dt| dt.and_utc().timestamp_millis()))
                    .collect();
                Series::new(&name, millis).cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
            }
            CellColumnType::Text | CellColumnType::Empty => {
                let strings: Vec<Option<String>> = values
                    .iter()
                    .map(|v| if is_missing(v) { None } else { Some(v.to_string()) })
                    .collect();
                Series::new(&name, strings)
            }
        };

        columns.push(series);
    }

    Ok(DataFrame::new(columns)?)
}

/// Prunes empty columns, then empty rows, then fills numeric gaps with 0 and
/// trims text. Running it again changes nothing.
pub fn clean(df: &mut DataFrame) -> Result<()> {
    let keep: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|series| series.null_count() < series.len())
        .map(|series| series.name().to_string())
        .collect();
    let dropped_columns = df.width() - keep.len();
    if dropped_columns > 0 {
        warn!("Dropping {} empty columns", dropped_columns);
        *df = df.select(&keep)?;
    }

    if df.width() > 0 {
        let mut mask = BooleanChunked::full("non_empty", false, df.height());
        for series in df.get_columns() {
            mask = &mask | &series.is_not_null();
        }
        let before = df.height();
        *df = df.filter(&mask)?;
        if df.height() < before {
            warn!("Dropping {} empty rows", before - df.height());
        }
    }

    let kinds: Vec<(String, ColumnKind)> = df
        .get_columns()
        .iter()
        .map(|series| (series.name().to_string(), ColumnKind::of(series)))
        .collect();

    for (name, kind) in kinds {
        match kind {
            ColumnKind::Numeric => {
                let series = df.column(&name)?;
                if series.null_count() == 0 {
                    continue;
                }
                debug!("Filling {} missing values in '{}' with 0", series.null_count(), name);
                let as_float = series.cast(&DataType::Float64)?;
                let filled: Vec<f64> = as_float.f64()?.into_iter().map(|v| v.unwrap_or(0.0)).collect();
                df.replace(&name, Series::new(&name, filled))?;
            }
            ColumnKind::Text => {
                let trimmed: Vec<Option<String>> = df
                    .column(&name)?
                    .str()?
                    .into_iter()
                    .map(|v| v.map(|s| s.trim().to_string()))
                    .collect();
                df.replace(&name, Series::new(&name, trimmed))?;
            }
            ColumnKind::Other => {}
        }
    }

    info!("Data cleaned: {} records x {} columns", df.height(), df.width());
    Ok(())
}

pub fn describe(df: &DataFrame) -> ImportMetadata {
    let columns: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    let column_types: IndexMap<String, ColumnKind> = df
        .get_columns()
        .iter()
        .map(|series| (series.name().to_string(), ColumnKind::of(series)))
        .collect();
    let missing_counts: IndexMap<String, usize> = df
        .get_columns()
        .iter()
        .map(|series| (series.name().to_string(), series.null_count()))
        .collect();

    ImportMetadata {
        row_count: df.height(),
        column_count: df.width(),
        columns,
        column_types,
        missing_counts,
    }
}

/// Load, clean and describe in one step. Failures are logged and reported as
/// `None` so the caller can offer another file.
pub fn import_from_excel(path: &Path, options: &ImportOptions) -> Option<(DataFrame, ImportMetadata)> {
    let result = load(path, &options.sheet, options.header_row).and_then(|mut df| {
        if options.clean {
            clean(&mut df)?;
        }
        Ok(df)
    });

    match result {
        Ok(df) => {
            let info = describe(&df);
            info!("Import finished: {} records", info.row_count);
            Some((df, info))
        }
        Err(e) => {
            error!("Failed to import {}: {}", path.display(), e);
            None
        }
    }
}
