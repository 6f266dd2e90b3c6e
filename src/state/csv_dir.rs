use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{DinnerError, Result};
use crate::state::store::TableStore;
use crate::state::table::{Cell, Table};

/// A directory holding one `<table>.csv` file per table.
///
/// Cells are read back as text; numeric interpretation happens at the
/// loading boundary. Table names match file stems case-insensitively.
#[derive(Debug, Clone)]
pub struct CsvDirectory {
    root: PathBuf,
}

impl CsvDirectory {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn table_path(&self, name: &str) -> PathBuf {
        self.existing_table_path(name)
            .unwrap_or_else(|| self.root.join(format!("{}.csv", name.trim())))
    }

    /// An existing `<table>.csv` whose stem matches `name` case-insensitively.
    fn existing_table_path(&self, name: &str) -> Option<PathBuf> {
        let wanted = format!("{}.csv", name.trim());
        fs::read_dir(&self.root)
            .ok()?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .find(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.eq_ignore_ascii_case(&wanted))
            })
    }

    fn unreadable(&self, path: &Path, e: impl fmt::Display) -> DinnerError {
        DinnerError::Storage(format!("cannot read {}: {}", path.display(), e))
    }
}

impl TableStore for CsvDirectory {
    fn read_table(&self, name: &str) -> Result<Option<Table>> {
        let path = self.table_path(name);
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No CSV table at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.unreadable(&path, e)),
        };

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut grid = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(|e| self.unreadable(&path, e))?;
            grid.push(
                record
                    .iter()
                    .map(|field| {
                        if field.is_empty() {
                            Cell::Empty
                        } else {
                            Cell::text(field)
                        }
                    })
                    .collect(),
            );
        }

        tracing::trace!("Read {} CSV rows from {}", grid.len(), path.display());
        Ok(Some(Table::from_grid(grid)))
    }

    fn write_table(&mut self, name: &str, table: &Table) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.table_path(name);
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&path)?;

        wtr.write_record(&table.header)?;
        for row in &table.rows {
            wtr.write_record(row.iter().map(|c| c.to_string()))?;
        }
        wtr.flush()?;

        tracing::debug!("Wrote {} rows to {}", table.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_table_is_none() {
        let dir = TempDir::new().unwrap();
        let store = CsvDirectory::new(dir.path());
        assert!(store.read_table("archive").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let mut store = CsvDirectory::new(dir.path());

        let mut table = Table::new(["ingredient", "cost"]);
        table.push_row(vec![Cell::text("flour"), Cell::Number(1.0)]);
        table.push_row(vec![Cell::text("cheese, aged"), Cell::Number(4.5)]);
        store.write_table("ingredients", &table).unwrap();

        let read = store.read_table("ingredients").unwrap().unwrap();
        assert_eq!(read.header, vec!["ingredient", "cost"]);
        assert_eq!(read.len(), 2);
        assert_eq!(read.cell(1, 0), &Cell::text("cheese, aged"));
        assert_eq!(read.cell(1, 1).as_f64(), Some(4.5));
    }

    #[test]
    fn test_table_names_match_case_insensitively() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Dislikes.csv"), "ingredient\nmushroom\n").unwrap();

        let store = CsvDirectory::new(dir.path());
        let table = store.read_table("dislikes").unwrap().unwrap();
        assert_eq!(table.cell(0, 0), &Cell::text("mushroom"));
    }

    #[test]
    fn test_unreadable_table_is_storage_error() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be cannot be read as CSV.
        fs::create_dir(dir.path().join("archive.csv")).unwrap();

        let store = CsvDirectory::new(dir.path());
        let err = store.read_table("archive").unwrap_err();
        assert!(matches!(err, DinnerError::Storage(_)));
    }

    #[test]
    fn test_empty_fields_read_as_empty_cells() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("recipes.csv"), "name,ingredients,time\nToast,,5\n").unwrap();

        let store = CsvDirectory::new(dir.path());
        let table = store.read_table("recipes").unwrap().unwrap();
        assert_eq!(table.cell(0, 1), &Cell::Empty);
        assert_eq!(table.cell(0, 2).as_u32(), Some(5));
    }
}
