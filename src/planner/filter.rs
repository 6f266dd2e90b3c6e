use crate::models::{DislikedSet, Recipe};

/// Recipes that avoid every disliked ingredient and fit the time limit.
///
/// Pure and order-preserving. With no time limit only the dislikes apply.
pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    disliked: &DislikedSet,
    time_limit: Option<u32>,
) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|r| r.avoids(disliked) && r.fits_time(time_limit))
        .collect()
}
