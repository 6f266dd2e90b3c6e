mod archive;
mod csv_dir;
mod store;
mod table;
mod workbook;

pub use archive::{append_entry, history_entries, ArchiveLog, ARCHIVE_COLUMNS};
pub use csv_dir::CsvDirectory;
pub use store::{open_store, MemoryStore, TableStore};
pub use table::{Cell, Table};
pub use workbook::XlsxWorkbook;
