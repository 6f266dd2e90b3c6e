use crate::error::Result;
use crate::models::HistoryEntry;
use crate::state::store::TableStore;
use crate::state::table::{Cell, Table};

/// Columns of the archive sheet, in the order a fresh sheet gets them.
pub const ARCHIVE_COLUMNS: [&str; 3] = ["date", "recipe", "location"];

/// Append `entry` after every existing row of `history`.
///
/// With no history a fresh single-row table is built. Existing rows are never
/// touched; if the old header lacks an archive column it is added at the end
/// and older rows simply read as empty there.
pub fn append_entry(history: Option<Table>, entry: &HistoryEntry) -> Table {
    let mut table = history.unwrap_or_else(|| Table::new(ARCHIVE_COLUMNS));

    let mut positions = [0usize; 3];
    for (slot, column) in positions.iter_mut().zip(ARCHIVE_COLUMNS) {
        *slot = match table.column(column) {
            Some(idx) => idx,
            None => {
                table.header.push(column.to_string());
                table.header.len() - 1
            }
        };
    }

    let mut row = vec![Cell::Empty; table.header.len()];
    let values = [&entry.date, &entry.recipe, &entry.location];
    for (idx, value) in positions.into_iter().zip(values) {
        row[idx] = Cell::text(value.as_str());
    }

    table.push_row(row);
    table
}

/// Read archive rows back as entries, oldest first.
///
/// Rows are taken as-is: columns missing from an older sheet read as empty.
pub fn history_entries(table: &Table) -> Vec<HistoryEntry> {
    let [date, recipe, location] = ARCHIVE_COLUMNS.map(|c| table.column(c));
    let text = |i: usize, col: Option<usize>| {
        col.map(|c| table.cell(i, c).to_string()).unwrap_or_default()
    };

    (0..table.len())
        .map(|i| HistoryEntry::new(text(i, date), text(i, recipe), text(i, location)))
        .collect()
}

/// The dinner archive inside a table store.
pub struct ArchiveLog<'a> {
    store: &'a mut dyn TableStore,
    sheet: String,
}

impl<'a> ArchiveLog<'a> {
    pub fn new(store: &'a mut dyn TableStore, sheet: impl Into<String>) -> Self {
        Self {
            store,
            sheet: sheet.into(),
        }
    }

    /// All recorded entries. A missing archive is an empty history.
    pub fn entries(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self
            .store
            .read_table(&self.sheet)?
            .map(|t| history_entries(&t))
            .unwrap_or_default())
    }

    /// Append one entry and rewrite the archive sheet.
    ///
    /// This is a read-modify-write of the whole sheet; two processes recording
    /// at once can lose one of the entries.
    pub fn record(&mut self, entry: &HistoryEntry) -> Result<usize> {
        let history = self.store.read_table(&self.sheet)?;
        if history.is_none() {
            tracing::info!("Creating archive sheet '{}'", self.sheet);
        }

        let updated = append_entry(history, entry);
        self.store.write_table(&self.sheet, &updated)?;

        tracing::info!(
            "Recorded '{}' at '{}' ({} entries)",
            entry.recipe,
            entry.location,
            updated.len()
        );
        Ok(updated.len())
    }
}
