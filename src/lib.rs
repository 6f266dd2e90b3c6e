pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{DinnerError, Result};
pub use models::{HistoryEntry, Recipe};
