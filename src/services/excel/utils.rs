use std::collections::HashSet;
use std::path::Path;

use calamine::Data;

use super::types::WORKBOOK_EXTENSIONS;

/// Storage chosen for a column while building the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellColumnType {
    Numeric,
    Boolean,
    DateTime,
    Text,
    Empty,
}

pub fn header_name(cell: &Data, idx: usize, existing_names: &mut HashSet<String>) -> String {
    let trimmed = cell.to_string().trim().to_string();
    let base_name = if trimmed.is_empty() {
        format!("Unnamed: {}", idx)
    } else {
        trimmed
    };

    // Repeated headers get a numeric suffix
    let mut cleaned = base_name.clone();
    let mut counter = 1;
    while !existing_names.insert(cleaned.clone()) {
        cleaned = format!("{}.{}", base_name, counter);
        counter += 1;
    }

    cleaned
}

pub fn is_missing(cell: &Data) -> bool {
    match cell {
        Data::Empty | Data::Error(_) => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}

pub fn detect_column_type(values: &[Data]) -> CellColumnType {
    let mut numeric_count = 0;
    let mut bool_count = 0;
    let mut date_count = 0;
    let mut total_count = 0;

    for value in values.iter().filter(|v| !is_missing(v)) {
        total_count += 1;
        match value {
            Data::Float(_) | Data::Int(_) => numeric_count += 1,
            Data::Bool(_) => bool_count += 1,
            Data::DateTime(_) | Data::DateTimeIso(_) => date_count += 1,
            _ => {}
        }
    }

    if total_count == 0 {
        CellColumnType::Empty
    } else if numeric_count == total_count {
        CellColumnType::Numeric
    } else if bool_count == total_count {
        CellColumnType::Boolean
    } else if date_count == total_count {
        CellColumnType::DateTime
    } else {
        CellColumnType::Text
    }
}

pub fn is_workbook_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| WORKBOOK_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// `12345` -> `"12,345"`.
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_are_trimmed_and_deduplicated() {
        let mut seen = HashSet::new();
        let names: Vec<String> = [
            Data::String(" idade ".to_string()),
            Data::String("idade".to_string()),
            Data::Empty,
            Data::String("idade".to_string()),
        ]
        .iter()
        .enumerate()
        .map(|(idx, cell)| header_name(cell, idx, &mut seen))
        .collect();

        assert_eq!(names, vec!["idade", "idade.1", "Unnamed: 2", "idade.2"]);
    }

    #[test]
    fn detects_column_storage() {
        assert_eq!(
            detect_column_type(&[Data::Int(1), Data::Empty, Data::Float(2.5)]),
            CellColumnType::Numeric
        );
        assert_eq!(
            detect_column_type(&[Data::Int(1), Data::String("a".to_string())]),
            CellColumnType::Text
        );
        assert_eq!(
            detect_column_type(&[Data::Bool(true), Data::Empty]),
            CellColumnType::Boolean
        );
        assert_eq!(
            detect_column_type(&[Data::Empty, Data::String(String::new())]),
            CellColumnType::Empty
        );
    }

    #[test]
    fn recognizes_workbook_extensions() {
        assert!(is_workbook_path(Path::new("vendas.xlsx")));
        assert!(is_workbook_path(Path::new("VENDAS.XLS")));
        assert!(!is_workbook_path(Path::new("vendas.csv")));
        assert!(!is_workbook_path(Path::new("vendas")));
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_thousands(9), "9");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
