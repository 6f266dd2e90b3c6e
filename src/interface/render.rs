use crate::error::Result;
use crate::models::{HistoryEntry, Recipe};
use crate::planner::Suggestion;

/// Print the suggestion line.
pub fn display_suggestion(suggestion: &Suggestion) {
    println!("Suggested dinner: {}", suggestion.label());
}

/// Format recipes as an aligned table of name, time, cost and ingredients.
pub fn format_recipe_table(recipes: &[&Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes match.".to_string();
    }

    let name_width = recipes
        .iter()
        .map(|r| r.name().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut out = format!(
        "{:<width$}  {:>5}  {:>7}  ingredients\n",
        "name",
        "time",
        "cost",
        width = name_width
    );

    for recipe in recipes {
        let ingredients: Vec<&str> = recipe.ingredients().iter().map(String::as_str).collect();
        out.push_str(&format!(
            "{:<width$}  {:>5}  {:>7.2}  {}\n",
            recipe.name(),
            recipe.time(),
            recipe.cost(),
            ingredients.join(", "),
            width = name_width
        ));
    }

    out.push_str(&format!("\n{} recipe(s)", recipes.len()));
    out
}

/// Print the recipe table.
pub fn display_recipes(recipes: &[&Recipe]) {
    println!("{}", format_recipe_table(recipes));
}

/// Print history entries, oldest first.
pub fn display_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("No dinners recorded yet.");
        return;
    }

    let recipe_width = entries
        .iter()
        .map(|e| e.recipe.chars().count())
        .max()
        .unwrap_or(6);

    for entry in entries {
        println!(
            "{}  {:<width$}  {}",
            entry.date,
            entry.recipe,
            entry.location,
            width = recipe_width
        );
    }
}

/// Print history entries as a JSON array.
pub fn display_history_json(entries: &[HistoryEntry]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(entries)?);
    Ok(())
}
