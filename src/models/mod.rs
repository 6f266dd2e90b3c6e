pub mod history;
pub mod recipe;

pub use history::{HistoryEntry, DATE_FORMAT};
pub use recipe::{CostTable, DislikedSet, Recipe};
