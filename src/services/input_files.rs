use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::services::excel::utils::is_workbook_path;

/// Workbook files directly inside `dir`, sorted by file name.
pub fn list_workbook_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AppError::InvalidInput(format!("directory not found: {}", dir.display())));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_workbook_path(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!("Found {} workbook files in {}", files.len(), dir.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_only_workbooks_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["vendas.xlsx", "antigo.XLS", "notas.txt", "dados.csv"] {
            std::fs::write(dir.path().join(name), "x").unwrap();
        }
        std::fs::create_dir(dir.path().join("pasta.xlsx")).unwrap();

        let files = list_workbook_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["antigo.XLS", "vendas.xlsx"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = list_workbook_files(&dir.path().join("nope"));
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
