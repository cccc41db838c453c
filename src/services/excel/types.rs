use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

/// Workbook extensions the importer accepts.
pub const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Labels of the descriptive statistics, in report order.
pub const DESCRIBE_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    Index(usize),
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSelector::Index(idx) => write!(f, "#{}", idx),
            SheetSelector::Name(name) => write!(f, "'{}'", name),
        }
    }
}

impl FromStr for SheetSelector {
    type Err = std::convert::Infallible;

    /// Plain integers select by position, anything else by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<usize>() {
            Ok(idx) => SheetSelector::Index(idx),
            Err(_) => SheetSelector::Name(s.to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub sheet: SheetSelector,
    /// 0-based, relative to the first used row of the sheet.
    pub header_row: usize,
    pub clean: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            sheet: SheetSelector::default(),
            header_row: 0,
            clean: true,
        }
    }
}

/// `describe()`-style statistics of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescription {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub q25: Option<f64>,
    #[serde(rename = "50%")]
    pub q50: Option<f64>,
    #[serde(rename = "75%")]
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnDescription {
    /// Values in `DESCRIBE_LABELS` order.
    pub fn values(&self) -> [Option<f64>; 8] {
        [
            Some(self.count as f64),
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.q50,
            self.q75,
            self.max,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryStatistics {
    #[serde(rename = "descricao_numericas")]
    pub numeric: IndexMap<String, ColumnDescription>,
    /// Value frequencies per text column, most frequent first.
    #[serde(rename = "contagem_categorias")]
    pub category_counts: IndexMap<String, Vec<(String, usize)>>,
    #[serde(rename = "correlacoes")]
    pub correlations: CorrelationMatrix,
}
