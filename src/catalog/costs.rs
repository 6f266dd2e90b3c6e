use crate::catalog::{required_column, sheet_row};
use crate::error::{DinnerError, Result};
use crate::models::CostTable;
use crate::state::Table;

/// Build the ingredient cost table from an `ingredient`/`cost` table.
///
/// Duplicate names are not an error: the last row wins and a warning is logged.
pub fn load_cost_table(table: &Table, table_name: &str) -> Result<CostTable> {
    let name_col = required_column(table, table_name, "ingredient")?;
    let cost_col = required_column(table, table_name, "cost")?;

    let mut costs = CostTable::new();
    for i in 0..table.len() {
        let name_cell = table.cell(i, name_col);
        if name_cell.is_empty() {
            tracing::warn!("Skipping row {} of '{}': no ingredient name", sheet_row(i), table_name);
            continue;
        }
        let name = name_cell.to_string().trim().to_string();

        let cost_cell = table.cell(i, cost_col);
        let cost = cost_cell
            .as_f64()
            .filter(|c| c.is_finite() && *c >= 0.0)
            .ok_or_else(|| {
                DinnerError::parse(
                    table_name,
                    sheet_row(i),
                    format!("invalid cost '{}' for '{}'", cost_cell, name),
                )
            })?;

        if let Some(previous) = costs.insert(name.clone(), cost) {
            tracing::warn!(
                "Duplicate ingredient '{}' in '{}': cost {} replaces {}",
                name,
                table_name,
                cost,
                previous
            );
        }
    }

    tracing::debug!("Loaded {} ingredient costs", costs.len());
    Ok(costs)
}
