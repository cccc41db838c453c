use polars::prelude::*;
use proptest::prelude::*;

use sheet_report::services::excel::{clean, describe};
use sheet_report::ColumnKind;

#[derive(Debug, Clone)]
enum Column {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

fn column(rows: usize) -> impl Strategy<Value = Column> {
    prop_oneof![
        prop::collection::vec(prop::option::of(-1000.0..1000.0f64), rows).prop_map(Column::Numeric),
        prop::collection::vec(prop::option::of("[ a-c]{0,3}"), rows).prop_map(Column::Text),
    ]
}

fn table() -> impl Strategy<Value = DataFrame> {
    (1..5usize, 0..10usize)
        .prop_flat_map(|(width, rows)| prop::collection::vec(column(rows), width))
        .prop_map(|columns| {
            let series = columns
                .into_iter()
                .enumerate()
                .map(|(idx, column)| {
                    let name = format!("col_{}", idx);
                    match column {
                        Column::Numeric(values) => Series::new(&name, values),
                        Column::Text(values) => Series::new(&name, values),
                    }
                })
                .collect();
            DataFrame::new(series).unwrap()
        })
}

fn null_cells(df: &DataFrame) -> usize {
    df.get_columns()
        .iter()
        .map(|s| s.is_null().into_iter().filter(|v| *v == Some(true)).count())
        .sum()
}

proptest! {
    #[test]
    fn clean_is_idempotent(mut df in table()) {
        clean(&mut df).unwrap();
        let once = df.clone();
        clean(&mut df).unwrap();
        prop_assert!(once.equals_missing(&df));
    }

    #[test]
    fn cleaned_table_invariants(mut df in table()) {
        clean(&mut df).unwrap();

        for series in df.get_columns() {
            prop_assert!(series.null_count() < series.len());
            match ColumnKind::of(series) {
                ColumnKind::Numeric => prop_assert_eq!(series.null_count(), 0),
                ColumnKind::Text => {
                    for value in series.str().unwrap().into_iter().flatten() {
                        prop_assert_eq!(value, value.trim());
                    }
                }
                ColumnKind::Other => {}
            }
        }

        for row in 0..df.height() {
            let any_present = df.get_columns().iter().any(|s| !s.is_null().get(row).unwrap_or(true));
            prop_assert!(any_present);
        }
    }

    #[test]
    fn metadata_matches_table(mut df in table()) {
        clean(&mut df).unwrap();
        let info = describe(&df);

        prop_assert_eq!(info.row_count, df.height());
        prop_assert_eq!(info.column_count, df.width());
        prop_assert_eq!(info.columns.len(), info.column_count);
        prop_assert_eq!(info.total_missing(), null_cells(&df));
    }

    #[test]
    fn metadata_matches_uncleaned_table(df in table()) {
        let info = describe(&df);
        prop_assert_eq!(info.total_missing(), null_cells(&df));
    }
}
