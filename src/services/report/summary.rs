use chrono::{Local, NaiveDateTime};
use polars::prelude::DataFrame;

use crate::error::Result;
use crate::models::ColumnKind;
use crate::services::excel::types::{SummaryStatistics, DESCRIBE_LABELS};
use crate::services::excel::utils::format_thousands;
use crate::services::excel::ExcelAnalyzer;

pub const TITLE: &str = "RELATÓRIO DE ANÁLISE DE DADOS";
const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";
const NO_NUMERIC_COLUMNS: &str = "(nenhuma coluna numérica)";

pub fn build_text_summary(df: &DataFrame) -> Result<String> {
    let stats = ExcelAnalyzer.summary_statistics(df)?;
    Ok(render_summary(df, &stats, Local::now().naive_local()))
}

/// Fixed-layout text report; `generated_at` fills the `Data:` line.
pub fn render_summary(df: &DataFrame, stats: &SummaryStatistics, generated_at: NaiveDateTime) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", TITLE));
    out.push_str(&format!("{}\n", "=".repeat(TITLE.chars().count())));
    out.push_str(&format!("Data: {}\n", generated_at.format(DATE_FORMAT)));
    out.push_str(&format!("Total de Registros: {}\n", format_thousands(df.height())));
    out.push_str(&format!("Total de Colunas: {}\n", df.width()));
    out.push('\n');

    out.push_str("COLUNAS E TIPOS:\n");
    let name_width = df.get_column_names().iter().map(|n| n.chars().count()).max().unwrap_or(0);
    for series in df.get_columns() {
        out.push_str(&format!(
            "{:<width$}    {}\n",
            series.name(),
            ColumnKind::of(series),
            width = name_width
        ));
    }
    out.push('\n');

    out.push_str("ESTATÍSTICAS BÁSICAS:\n");
    out.push_str(&describe_table(stats));

    out
}

/// Right-aligned grid of `describe()` values, six decimals.
fn describe_table(stats: &SummaryStatistics) -> String {
    if stats.numeric.is_empty() {
        return format!("{}\n", NO_NUMERIC_COLUMNS);
    }

    let label_width = DESCRIBE_LABELS.iter().map(|l| l.len()).max().unwrap_or(0);
    let columns: Vec<(&str, Vec<String>)> = stats
        .numeric
        .iter()
        .map(|(name, description)| {
            let cells = description
                .values()
                .iter()
                .map(|value| match value {
                    Some(v) => format!("{:.6}", v),
                    None => "NaN".to_string(),
                })
                .collect();
            (name.as_str(), cells)
        })
        .collect();
    let widths: Vec<usize> = columns
        .iter()
        .map(|(name, cells)| {
            cells
                .iter()
                .map(|c| c.chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut table = String::new();
    table.push_str(&" ".repeat(label_width));
    for ((name, _), width) in columns.iter().zip(&widths) {
        table.push_str(&format!("  {:>width$}", name, width = width));
    }
    table.push('\n');

    for (row, label) in DESCRIBE_LABELS.iter().enumerate() {
        table.push_str(&format!("{:<width$}", label, width = label_width));
        for ((_, cells), width) in columns.iter().zip(&widths) {
            table.push_str(&format!("  {:>width$}", cells[row], width = width));
        }
        table.push('\n');
    }

    table
}
