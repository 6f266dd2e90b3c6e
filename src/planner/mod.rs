pub mod filter;
pub mod selector;

pub use filter::filter_recipes;
pub use selector::{
    suggest_dinner, Chooser, FixedChooser, RandomChooser, Suggestion, NO_SUITABLE_RECIPE,
};
