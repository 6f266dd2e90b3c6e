use crate::catalog::required_column;
use crate::error::Result;
use crate::models::DislikedSet;
use crate::state::Table;

/// Collect the `ingredient` column into a disliked set. Blank cells are ignored.
pub fn load_disliked(table: &Table, table_name: &str) -> Result<DislikedSet> {
    let col = required_column(table, table_name, "ingredient")?;

    let disliked: DislikedSet = (0..table.len())
        .map(|i| table.cell(i, col))
        .filter(|c| !c.is_empty())
        .map(|c| c.to_string().trim().to_string())
        .collect();

    tracing::debug!("Loaded {} disliked ingredients", disliked.len());
    Ok(disliked)
}
