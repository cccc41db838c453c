use indexmap::IndexMap;
use polars::prelude::*;
use polars_ops::chunked_array::cov::pearson_corr;

use super::types::{ColumnDescription, CorrelationMatrix, SummaryStatistics};
use crate::error::Result;
use crate::models::{ColumnInfo, ColumnKind};

pub struct ExcelAnalyzer;

impl ExcelAnalyzer {
    pub fn summary_statistics(&self, df: &DataFrame) -> Result<SummaryStatistics> {
        let start = std::time::Instant::now();
        let mut numeric_columns: Vec<(String, Float64Chunked)> = Vec::new();
        let mut category_counts = IndexMap::new();

        for series in df.get_columns() {
            match ColumnKind::of(series) {
                ColumnKind::Numeric => {
                    numeric_columns.push((series.name().to_string(), numeric_values(series)?));
                }
                ColumnKind::Text => {
                    category_counts.insert(series.name().to_string(), value_counts(series)?);
                }
                ColumnKind::Other => {}
            }
        }

        let mut numeric = IndexMap::new();
        for (name, values) in &numeric_columns {
            numeric.insert(name.clone(), describe_values(values)?);
        }

        let mut matrix = Vec::with_capacity(numeric_columns.len());
        for (_, a) in &numeric_columns {
            let mut row = Vec::with_capacity(numeric_columns.len());
            for (_, b) in &numeric_columns {
                row.push(correlation(a, b)?);
            }
            matrix.push(row);
        }
        let correlations = CorrelationMatrix {
            columns: numeric_columns.iter().map(|(name, _)| name.clone()).collect(),
            values: matrix,
        };

        tracing::debug!(
            "Statistics for {} numeric and {} text columns in {:?}",
            correlations.columns.len(),
            category_counts.len(),
            start.elapsed()
        );

        Ok(SummaryStatistics {
            numeric,
            category_counts,
            correlations,
        })
    }

    pub fn column_profiles(&self, df: &DataFrame) -> Result<Vec<ColumnInfo>> {
        df.get_columns()
            .iter()
            .map(|series| {
                Ok(ColumnInfo {
                    name: series.name().to_string(),
                    kind: ColumnKind::of(series),
                    unique_count: series.drop_nulls().n_unique()?,
                    null_count: series.null_count(),
                })
            })
            .collect()
    }
}

fn numeric_values(series: &Series) -> Result<Float64Chunked> {
    let as_float = series.cast(&DataType::Float64)?;
    Ok(as_float.f64()?.clone())
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Frequencies of the non-missing values, highest count first, ties by value.
fn value_counts(series: &Series) -> Result<Vec<(String, usize)>> {
    let present = series.drop_nulls();
    if present.is_empty() {
        return Ok(Vec::new());
    }

    // First column holds the values, second the counts
    let frame = present.value_counts(false, false)?;
    let columns = frame.get_columns();
    let totals = columns[1].cast(&DataType::UInt64)?;

    let mut counts: Vec<(String, usize)> = columns[0]
        .str()?
        .into_iter()
        .zip(totals.u64()?.into_iter())
        .filter_map(|(value, total)| Some((value?.to_string(), total? as usize)))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(counts)
}

pub fn describe_values(values: &Float64Chunked) -> Result<ColumnDescription> {
    let count = values.len() - values.null_count();
    if count == 0 {
        return Ok(ColumnDescription {
            count,
            mean: None,
            std: None,
            min: None,
            q25: None,
            q50: None,
            q75: None,
            max: None,
        });
    }

    Ok(ColumnDescription {
        count,
        mean: finite(values.mean()),
        std: if count > 1 { finite(values.std(1)) } else { None },
        min: values.min(),
        q25: values.quantile(0.25, QuantileInterpolOptions::Linear)?,
        q50: values.quantile(0.5, QuantileInterpolOptions::Linear)?,
        q75: values.quantile(0.75, QuantileInterpolOptions::Linear)?,
        max: values.max(),
    })
}

/// Pearson correlation over rows where both sides are present; `None` when
/// fewer than two pairs remain or either side is constant.
pub fn correlation(a: &Float64Chunked, b: &Float64Chunked) -> Result<Option<f64>> {
    let both = &a.is_not_null() & &b.is_not_null();
    let a = a.filter(&both)?;
    let b = b.filter(&both)?;
    if a.len() < 2 {
        return Ok(None);
    }
    Ok(finite(pearson_corr(&a, &b, 1)).map(|r| r.clamp(-1.0, 1.0)))
}
