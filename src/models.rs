use std::fmt;

use indexmap::IndexMap;
use polars::prelude::{DataType, Series};
use serde::Serialize;

/// Coarse type of a column, derived from its dtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Text,
    Other,
}

impl ColumnKind {
    pub fn of(series: &Series) -> Self {
        match series.dtype() {
            DataType::String => ColumnKind::Text,
            DataType::Boolean => ColumnKind::Other,
            dtype if dtype.is_numeric() => ColumnKind::Numeric,
            _ => ColumnKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Text => "text",
            ColumnKind::Other => "other",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportMetadata {
    #[serde(rename = "total_registros")]
    pub row_count: usize,
    #[serde(rename = "total_colunas")]
    pub column_count: usize,
    #[serde(rename = "colunas")]
    pub columns: Vec<String>,
    #[serde(rename = "tipos_dados")]
    pub column_types: IndexMap<String, ColumnKind>,
    #[serde(rename = "registros_faltantes")]
    pub missing_counts: IndexMap<String, usize>,
}

impl ImportMetadata {
    /// Missing cells across the whole table.
    pub fn total_missing(&self) -> usize {
        self.missing_counts.values().sum()
    }
}

/// One row of the `Analise_Colunas` sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub kind: ColumnKind,
    pub unique_count: usize,
    pub null_count: usize,
}
