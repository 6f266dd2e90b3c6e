pub mod prompts;
pub mod render;

pub use prompts::{normalize_location, prompt_location};
pub use render::{
    display_history, display_history_json, display_recipes, display_suggestion,
    format_recipe_table,
};
