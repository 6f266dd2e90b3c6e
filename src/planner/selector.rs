use rand::Rng;

use crate::models::{DislikedSet, Recipe};
use crate::planner::filter::filter_recipes;

/// Message shown (and logged) when nothing qualifies.
pub const NO_SUITABLE_RECIPE: &str = "No suitable recipes found. Consider ordering takeout!";

/// Picks one index out of `len` candidates.
///
/// Callers guarantee `len > 0`; implementations must return a value in `0..len`.
pub trait Chooser {
    fn choose(&mut self, len: usize) -> usize;
}

/// Uniform random choice backed by any `rand` generator.
pub struct RandomChooser<R> {
    rng: R,
}

impl<R: Rng> RandomChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Chooser for RandomChooser<R> {
    fn choose(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same index, clamped to the candidate range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChooser(pub usize);

impl Chooser for FixedChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Outcome of a dinner suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    Recipe(String),
    NoneAvailable,
}

impl Suggestion {
    /// Text shown to the user and written to the archive.
    pub fn label(&self) -> &str {
        match self {
            Suggestion::Recipe(name) => name,
            Suggestion::NoneAvailable => NO_SUITABLE_RECIPE,
        }
    }

    pub fn is_none_available(&self) -> bool {
        matches!(self, Suggestion::NoneAvailable)
    }
}

/// Filter the catalog and pick one survivor with `chooser`.
pub fn suggest_dinner(
    recipes: &[Recipe],
    disliked: &DislikedSet,
    time_limit: Option<u32>,
    chooser: &mut dyn Chooser,
) -> Suggestion {
    let candidates = filter_recipes(recipes, disliked, time_limit);
    tracing::debug!(
        "{} of {} recipes qualify (time limit: {:?})",
        candidates.len(),
        recipes.len(),
        time_limit
    );

    if candidates.is_empty() {
        return Suggestion::NoneAvailable;
    }

    let index = chooser.choose(candidates.len()).min(candidates.len() - 1);
    Suggestion::Recipe(candidates[index].name().to_string())
}
