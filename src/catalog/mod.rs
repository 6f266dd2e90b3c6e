//! Loading typed records from raw tables.
//!
//! Every loader validates at the boundary: a missing column or malformed
//! cell is a parse error naming the sheet and row, never a silent coercion.

pub mod costs;
pub mod dislikes;
pub mod recipes;

pub use costs::load_cost_table;
pub use dislikes::load_disliked;
pub use recipes::{load_catalog, split_ingredients, INGREDIENT_SEPARATOR};

use crate::error::{DinnerError, Result};
use crate::models::{CostTable, DislikedSet, Recipe};
use crate::state::{Table, TableStore};

/// Index of a required column, or a parse error naming the table.
pub(crate) fn required_column(table: &Table, table_name: &str, column: &str) -> Result<usize> {
    table
        .column(column)
        .ok_or_else(|| DinnerError::parse(table_name, 1, format!("missing column '{}'", column)))
}

/// Sheet row number (1-based, header on row 1) for a data row index.
pub(crate) fn sheet_row(index: usize) -> usize {
    index + 2
}

/// Read a table that must exist.
pub fn read_required(store: &dyn TableStore, name: &str) -> Result<Table> {
    store.read_table(name)?.ok_or_else(|| {
        DinnerError::Storage(format!(
            "sheet '{}' not found (sheet names can be set with --dislikes-sheet, \
             --ingredients-sheet, --recipes-sheet and --archive-sheet)",
            name
        ))
    })
}

/// Sheet names inside the backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetNames {
    pub dislikes: String,
    pub ingredients: String,
    pub recipes: String,
    pub archive: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            dislikes: "dislikes".to_string(),
            ingredients: "ingredients".to_string(),
            recipes: "recipes".to_string(),
            archive: "archive".to_string(),
        }
    }
}

/// Everything loaded from the store for one run.
#[derive(Debug, Clone)]
pub struct MealData {
    pub costs: CostTable,
    pub recipes: Vec<Recipe>,
    pub disliked: DislikedSet,
}

/// Load costs, then the catalog priced against them, then the dislikes.
pub fn load_meal_data(store: &dyn TableStore, sheets: &SheetNames) -> Result<MealData> {
    let costs = load_cost_table(&read_required(store, &sheets.ingredients)?, &sheets.ingredients)?;
    let recipes = load_catalog(&read_required(store, &sheets.recipes)?, &sheets.recipes, &costs)?;
    let disliked = load_disliked(&read_required(store, &sheets.dislikes)?, &sheets.dislikes)?;

    tracing::info!(
        "Loaded {} recipes, {} ingredient costs, {} dislikes",
        recipes.len(),
        costs.len(),
        disliked.len()
    );

    Ok(MealData {
        costs,
        recipes,
        disliked,
    })
}
