use std::path::Path;

use crate::error::Result;
use crate::state::csv_dir::CsvDirectory;
use crate::state::table::Table;
use crate::state::workbook::XlsxWorkbook;

/// Named-table storage backing the dinner picker.
///
/// `read_table` returns `Ok(None)` when the table (or the whole store) does
/// not exist yet; every other failure is an error.
pub trait TableStore {
    fn read_table(&self, name: &str) -> Result<Option<Table>>;

    /// Replace the named table in full, keeping every other table intact.
    fn write_table(&mut self, name: &str, table: &Table) -> Result<()>;
}

/// Open a store for `path`: a directory of CSV files, or a spreadsheet file.
pub fn open_store<P: AsRef<Path>>(path: P) -> Box<dyn TableStore> {
    let path = path.as_ref();
    if path.is_dir() {
        tracing::debug!("Using CSV directory store at {}", path.display());
        Box::new(CsvDirectory::new(path))
    } else {
        tracing::debug!("Using workbook store at {}", path.display());
        Box::new(XlsxWorkbook::new(path))
    }
}

/// In-memory store, used by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Vec<(String, Table)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: &str, table: Table) -> Self {
        self.tables.push((name.to_string(), table));
        self
    }
}

impl TableStore for MemoryStore {
    fn read_table(&self, name: &str) -> Result<Option<Table>> {
        Ok(self
            .tables
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, t)| t.clone()))
    }

    fn write_table(&mut self, name: &str, table: &Table) -> Result<()> {
        match self.tables.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some((_, existing)) => *existing = table.clone(),
            None => self.tables.push((name.to_string(), table.clone())),
        }
        Ok(())
    }
}
