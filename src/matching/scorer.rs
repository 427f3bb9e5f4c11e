use serde::Serialize;
use std::fmt;

use super::{PantrySet, RecipeIngredientSet};

/// Share of a recipe's ingredients covered by the pantry, in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct MatchScore(f64);

impl MatchScore {
    pub const ZERO: MatchScore = MatchScore(0.0);

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Score rounded to two decimals, as shown on recipe cards.
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}% match", self.0)
    }
}

/// Percentage of `recipe_ingredients` present in `pantry`.
///
/// The denominator is the recipe's ingredient count. An empty pantry or an
/// empty recipe scores zero.
pub fn score(recipe_ingredients: &RecipeIngredientSet, pantry: &PantrySet) -> MatchScore {
    if pantry.is_empty() || recipe_ingredients.is_empty() {
        return MatchScore::ZERO;
    }

    let matched = pantry
        .iter()
        .filter(|item| recipe_ingredients.contains(item))
        .count();

    MatchScore(matched as f64 / recipe_ingredients.len() as f64 * 100.0)
}
