use std::collections::{BTreeSet, HashMap, HashSet};

/// Ingredient name to unit cost. Unknown ingredients cost nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostTable {
    costs: HashMap<String, f64>,
}

impl CostTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cost, returning the previous value if the name was already present.
    pub fn insert(&mut self, name: impl Into<String>, cost: f64) -> Option<f64> {
        self.costs.insert(name.into(), cost)
    }

    /// Cost of one ingredient, 0 when unknown.
    pub fn cost_of(&self, name: &str) -> f64 {
        self.costs.get(name).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.costs.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.costs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CostTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut table = CostTable::new();
        for (name, cost) in iter {
            table.insert(name, cost);
        }
        table
    }
}

/// Ingredient names to exclude from suggestions.
pub type DislikedSet = HashSet<String>;

/// A recipe as loaded from the catalog.
///
/// Ingredients are a set: an ingredient listed twice counts once. The cost is
/// fixed at construction from the cost table in effect at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    name: String,
    ingredients: BTreeSet<String>,
    cost: f64,
    time: u32,
}

impl Recipe {
    pub fn new<I, S>(name: impl Into<String>, ingredients: I, time: u32, costs: &CostTable) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ingredients: BTreeSet<String> = ingredients.into_iter().map(Into::into).collect();
        let cost = ingredients.iter().map(|i| costs.cost_of(i)).sum();
        Self {
            name: name.into(),
            ingredients,
            cost,
            time,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &BTreeSet<String> {
        &self.ingredients
    }

    /// Aggregate cost of the distinct ingredients.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Preparation time in minutes.
    pub fn time(&self) -> u32 {
        self.time
    }

    /// True when none of the recipe's ingredients are disliked.
    pub fn avoids(&self, disliked: &DislikedSet) -> bool {
        self.ingredients.iter().all(|i| !disliked.contains(i))
    }

    pub fn fits_time(&self, time_limit: Option<u32>) -> bool {
        time_limit.is_none_or(|limit| self.time <= limit)
    }
}
