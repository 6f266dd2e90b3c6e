use strsim::jaro_winkler;

use crate::catalog::{required_column, sheet_row};
use crate::error::{DinnerError, Result};
use crate::models::{CostTable, Recipe};
use crate::state::Table;

/// Separator between ingredient names in a recipe's ingredient cell.
pub const INGREDIENT_SEPARATOR: &str = ", ";

/// Minimum similarity for a "did you mean" hint on unknown ingredients.
const SUGGESTION_THRESHOLD: f64 = 0.85;

/// Split an ingredient cell on the literal `", "` separator.
///
/// Each piece is trimmed after splitting; empty pieces (from a trailing
/// separator, say) are dropped.
pub fn split_ingredients(cell: &str) -> Vec<&str> {
    cell.split(INGREDIENT_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Closest known ingredient to an unknown name, if any is close enough.
fn closest_known<'a>(costs: &'a CostTable, unknown: &str) -> Option<&'a str> {
    let unknown = unknown.to_lowercase();
    costs
        .names()
        .map(|n| (n, jaro_winkler(&n.to_lowercase(), &unknown)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(n, _)| n)
}

/// Build the recipe catalog from a `name`/`ingredients`/`time` table.
///
/// Output order follows row order. Rows without a name are skipped.
pub fn load_catalog(table: &Table, table_name: &str, costs: &CostTable) -> Result<Vec<Recipe>> {
    let name_col = required_column(table, table_name, "name")?;
    let ingredients_col = required_column(table, table_name, "ingredients")?;
    let time_col = required_column(table, table_name, "time")?;

    let mut recipes = Vec::with_capacity(table.len());
    for i in 0..table.len() {
        let row = sheet_row(i);
        let name_cell = table.cell(i, name_col);
        if name_cell.is_empty() {
            tracing::warn!("Skipping row {} of '{}': no recipe name", row, table_name);
            continue;
        }
        let name = name_cell.to_string().trim().to_string();

        let ingredients_cell = table.cell(i, ingredients_col).to_string();
        let ingredients = split_ingredients(&ingredients_cell);
        if ingredients.is_empty() {
            return Err(DinnerError::parse(
                table_name,
                row,
                format!("recipe '{}' has no ingredients", name),
            ));
        }

        let time_cell = table.cell(i, time_col);
        let time = time_cell.as_u32().ok_or_else(|| {
            DinnerError::parse(
                table_name,
                row,
                format!("invalid time '{}' for recipe '{}'", time_cell, name),
            )
        })?;

        for ingredient in &ingredients {
            if costs.contains(ingredient) {
                continue;
            }
            match closest_known(costs, ingredient) {
                Some(hint) => tracing::warn!(
                    "Recipe '{}' uses unknown ingredient '{}' (did you mean '{}'?); costing it at 0",
                    name,
                    ingredient,
                    hint
                ),
                None => tracing::warn!(
                    "Recipe '{}' uses unknown ingredient '{}'; costing it at 0",
                    name,
                    ingredient
                ),
            }
        }

        recipes.push(Recipe::new(name, ingredients, time, costs));
    }

    tracing::debug!("Loaded {} recipes", recipes.len());
    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DislikedSet;
    use crate::planner::filter_recipes;
    use crate::state::Cell;

    fn costs() -> CostTable {
        [("flour", 1.0), ("cheese", 4.0)].into_iter().collect()
    }

    fn recipes_table(rows: Vec<[Cell; 3]>) -> Table {
        let mut t = Table::new(["name", "ingredients", "time"]);
        for row in rows {
            t.push_row(row.to_vec());
        }
        t
    }

    #[test]
    fn test_split_ingredients() {
        assert_eq!(split_ingredients("flour, cheese"), vec!["flour", "cheese"]);
        assert_eq!(split_ingredients("flour, "), vec!["flour"]);
        assert_eq!(split_ingredients("flour, mushroom, "), vec!["flour", "mushroom"]);
        assert_eq!(split_ingredients(" flour ,  cheese "), vec!["flour", "cheese"]);
        // Only the comma-space separator splits.
        assert_eq!(split_ingredients("flour,cheese"), vec!["flour,cheese"]);
    }

    #[test]
    fn test_load_catalog_preserves_order_and_costs() {
        let t = recipes_table(vec![
            [Cell::text("Pizza"), Cell::text("flour, mushroom"), Cell::Number(30.0)],
            [Cell::text("Salad"), Cell::text("flour, cheese, cheese"), Cell::text("10")],
        ]);
        let recipes = load_catalog(&t, "recipes", &costs()).unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].name(), "Pizza");
        assert_eq!(recipes[0].cost(), 1.0);
        assert_eq!(recipes[0].time(), 30);
        assert_eq!(recipes[1].name(), "Salad");
        assert_eq!(recipes[1].ingredients().len(), 2);
        assert_eq!(recipes[1].cost(), 5.0);
        assert_eq!(recipes[1].time(), 10);
    }

    #[test]
    fn test_trailing_separator_keeps_disliked_ingredient() {
        let mut costs = costs();
        costs.insert("mushroom", 3.0);
        let t = recipes_table(vec![
            [Cell::text("Pizza"), Cell::text("flour, mushroom, "), Cell::Number(30.0)],
            [Cell::text("Salad"), Cell::text("flour, cheese"), Cell::Number(10.0)],
        ]);
        let recipes = load_catalog(&t, "recipes", &costs).unwrap();

        assert!(recipes[0].ingredients().contains("mushroom"));
        assert_eq!(recipes[0].cost(), 4.0);

        let disliked: DislikedSet = ["mushroom".to_string()].into_iter().collect();
        let kept = filter_recipes(&recipes, &disliked, None);
        let names: Vec<&str> = kept.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Salad"]);
    }

    #[test]
    fn test_bad_time_is_parse_error() {
        let t = recipes_table(vec![
            [Cell::text("Soup"), Cell::text("cheese"), Cell::Number(5.0)],
            [Cell::text("Stew"), Cell::text("flour"), Cell::text("a while")],
        ]);
        let err = load_catalog(&t, "recipes", &costs()).unwrap_err();
        match err {
            DinnerError::Parse { table, row, message } => {
                assert_eq!(table, "recipes");
                assert_eq!(row, 3);
                assert!(message.contains("Stew"));
                assert!(message.contains("a while"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_ingredients_is_parse_error() {
        let t = recipes_table(vec![[Cell::text("Air"), Cell::Empty, Cell::Number(1.0)]]);
        let err = load_catalog(&t, "recipes", &costs()).unwrap_err();
        assert!(matches!(err, DinnerError::Parse { row: 2, .. }));
    }

    #[test]
    fn test_closest_known_hint() {
        let costs = costs();
        assert_eq!(closest_known(&costs, "flor"), Some("flour"));
        assert_eq!(closest_known(&costs, "Cheese"), Some("cheese"));
        assert_eq!(closest_known(&costs, "anchovy"), None);
    }
}
