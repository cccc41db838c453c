#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

#[derive(Debug, Clone, Copy)]
pub enum Cell<'a> {
    Num(f64),
    Text(&'a str),
    Bool(bool),
    Empty,
}

/// Writes `header` and `rows` to the first sheet of a new workbook at `dir/name`.
pub fn write_fixture(dir: &Path, name: &str, sheet: &str, header: &[&str], rows: &[Vec<Cell<'_>>]) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();

    for (col, title) in header.iter().enumerate() {
        worksheet.write_string(0, col as u16, *title).unwrap();
    }
    for (row, cells) in rows.iter().enumerate() {
        let row = row as u32 + 1;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Num(n) => {
                    worksheet.write_number(row, col, *n).unwrap();
                }
                Cell::Text(s) => {
                    worksheet.write_string(row, col, *s).unwrap();
                }
                Cell::Bool(b) => {
                    worksheet.write_boolean(row, col, *b).unwrap();
                }
                Cell::Empty => {}
            }
        }
    }

    workbook.save(&path).unwrap();
    path
}

/// Ten records of `idade`, `salario`, `nome`: record 5 is blank and the
/// `salario` of record 3 is missing.
pub fn employees_fixture(dir: &Path) -> PathBuf {
    use Cell::{Empty, Num, Text};

    let rows = vec![
        vec![Num(25.0), Num(3000.0), Text("Ana")],
        vec![Num(31.0), Num(4200.0), Text(" Bruno ")],
        vec![Num(42.0), Empty, Text("Carla")],
        vec![Num(28.0), Num(3900.0), Text("Ana")],
        vec![Empty, Empty, Empty],
        vec![Num(35.0), Num(5100.0), Text("Diego  ")],
        vec![Num(39.0), Num(4700.0), Text("Elisa")],
        vec![Num(23.0), Num(2500.0), Text("  Ana")],
        vec![Num(50.0), Num(8000.0), Text("Fábio")],
        vec![Num(45.0), Num(6100.0), Text("Gabi")],
    ];
    write_fixture(dir, "funcionarios.xlsx", "Plan1", &["idade", "salario", "nome"], &rows)
}
