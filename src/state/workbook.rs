use std::fmt;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, DataType, Reader, Sheets};
use rust_xlsxwriter::Workbook;
use tempfile::NamedTempFile;

use crate::error::{DinnerError, Result};
use crate::models::DATE_FORMAT;
use crate::state::store::TableStore;
use crate::state::table::{Cell, Table};

/// A spreadsheet file.
///
/// Reading goes through calamine (xlsx, xlsm, xls, xlsb, ods). Writing is
/// xlsx only: the whole workbook is reloaded and saved again with the target
/// sheet replaced, so cell values survive but styling and formulas do not.
/// The new file is saved next to the old one and renamed over it, so a failed
/// save leaves the original untouched.
///
/// Sheet names match case-insensitively.
#[derive(Debug, Clone)]
pub struct XlsxWorkbook {
    path: PathBuf,
}

impl XlsxWorkbook {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn is_writable_format(&self) -> bool {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("xlsx"))
    }

    fn unreadable(&self, e: impl fmt::Display) -> DinnerError {
        DinnerError::Storage(format!("cannot read {}: {}", self.path.display(), e))
    }

    fn open(&self) -> Result<Sheets<std::io::BufReader<std::fs::File>>> {
        open_workbook_auto(&self.path).map_err(|e| self.unreadable(e))
    }

    fn read_sheet(
        &self,
        workbook: &mut Sheets<std::io::BufReader<std::fs::File>>,
        sheet: &str,
    ) -> Result<Table> {
        let range = workbook
            .worksheet_range(sheet)
            .map_err(|e| self.unreadable(e))?;
        let grid = range
            .rows()
            .map(|row| row.iter().map(to_cell).collect())
            .collect();
        Ok(Table::from_grid(grid))
    }

    /// Load every sheet in workbook order. A missing file yields no sheets.
    fn read_all(&self) -> Result<Vec<(String, Table)>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut workbook = self.open()?;
        let mut sheets = Vec::new();
        for name in workbook.sheet_names() {
            let table = self.read_sheet(&mut workbook, &name)?;
            sheets.push((name, table));
        }
        Ok(sheets)
    }

    /// Directory the temporary save goes into before replacing the workbook.
    fn save_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

fn same_sheet(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(_) => data
            .as_datetime()
            .map(|dt| Cell::Text(dt.format(DATE_FORMAT).to_string()))
            .unwrap_or(Cell::Empty),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}

fn column_index(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| DinnerError::Storage(format!("too many columns ({})", col)))
}

fn row_index(row: usize) -> Result<u32> {
    u32::try_from(row).map_err(|_| DinnerError::Storage(format!("too many rows ({})", row)))
}

impl TableStore for XlsxWorkbook {
    fn read_table(&self, name: &str) -> Result<Option<Table>> {
        if !self.path.exists() {
            tracing::debug!("Workbook {} does not exist", self.path.display());
            return Ok(None);
        }

        let mut workbook = self.open()?;
        let Some(sheet) = workbook
            .sheet_names()
            .into_iter()
            .find(|n| same_sheet(n, name))
        else {
            tracing::debug!("Sheet '{}' not found in {}", name, self.path.display());
            return Ok(None);
        };

        let table = self.read_sheet(&mut workbook, &sheet)?;
        tracing::trace!("Read {} rows from sheet '{}'", table.len(), sheet);
        Ok(Some(table))
    }

    fn write_table(&mut self, name: &str, table: &Table) -> Result<()> {
        if !self.is_writable_format() {
            return Err(DinnerError::Storage(format!(
                "cannot write to {}: only .xlsx workbooks are writable",
                self.path.display()
            )));
        }

        let mut sheets = self.read_all()?;
        match sheets.iter_mut().find(|(n, _)| same_sheet(n, name)) {
            Some((_, existing)) => *existing = table.clone(),
            None => sheets.push((name.to_string(), table.clone())),
        }

        let mut book = Workbook::new();
        for (sheet_name, sheet_table) in &sheets {
            let sheet = book.add_worksheet();
            sheet.set_name(sheet_name)?;

            for (c, heading) in sheet_table.header.iter().enumerate() {
                sheet.write_string(0, column_index(c)?, heading)?;
            }

            for (r, row) in sheet_table.rows.iter().enumerate() {
                let r = row_index(r + 1)?;
                for (c, cell) in row.iter().enumerate() {
                    let c = column_index(c)?;
                    match cell {
                        Cell::Text(s) => {
                            sheet.write_string(r, c, s)?;
                        }
                        Cell::Number(n) => {
                            sheet.write_number(r, c, *n)?;
                        }
                        Cell::Empty => {}
                    }
                }
            }
        }

        let staged = NamedTempFile::new_in(self.save_dir())?;
        book.save(staged.path())?;
        staged
            .persist(&self.path)
            .map_err(|e| DinnerError::Io(e.error))?;
        tracing::debug!(
            "Rewrote sheet '{}' ({} rows) in {}",
            name,
            table.len(),
            self.path.display()
        );
        Ok(())
    }
}
