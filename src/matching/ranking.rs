use log::debug;
use serde::Serialize;

use super::{score, FilterConfig, MatchScore, PantrySet};
use crate::model::Recipe;

/// A recipe in browse order together with its match score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedRecipe<'a> {
    pub recipe: &'a Recipe,
    /// Zero whenever pantry matching was not applied
    pub score: MatchScore,
}

/// Numbers for the "showing X of Y recipes" line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankSummary {
    pub shown: usize,
    pub total: usize,
    pub sorted_by_match: bool,
}

/// Order and filter `recipes` for browsing.
///
/// With matching enabled and a non-empty pantry, recipes are scored, zero
/// scores dropped and the rest stably sorted by descending score. Otherwise
/// the incoming order is kept. The filters then remove recipes without
/// reordering. The result is always recomputed from scratch.
pub fn rank<'a>(
    recipes: &'a [Recipe],
    filter: &FilterConfig,
    pantry: &PantrySet,
) -> Vec<RankedRecipe<'a>> {
    let matching = is_matching(filter, pantry);

    let mut ranked: Vec<RankedRecipe<'a>> = if matching {
        recipes
            .iter()
            .map(|recipe| RankedRecipe {
                recipe,
                score: score(&recipe.ingredient_set(), pantry),
            })
            .filter(|entry| !entry.score.is_zero())
            .collect()
    } else {
        recipes
            .iter()
            .map(|recipe| RankedRecipe {
                recipe,
                score: MatchScore::ZERO,
            })
            .collect()
    };

    if matching {
        // sort_by is stable, ties keep their incoming order
        ranked.sort_by(|a, b| b.score.value().total_cmp(&a.score.value()));
    }

    ranked.retain(|entry| filter.matches(entry.recipe));

    debug!(
        "Ranked {} recipes down to {} (matching: {})",
        recipes.len(),
        ranked.len(),
        matching
    );
    ranked
}

/// Summarize a ranking for display.
pub fn summarize(
    ranked: &[RankedRecipe<'_>],
    total: usize,
    filter: &FilterConfig,
    pantry: &PantrySet,
) -> RankSummary {
    RankSummary {
        shown: ranked.len(),
        total,
        sorted_by_match: is_matching(filter, pantry),
    }
}

fn is_matching(filter: &FilterConfig, pantry: &PantrySet) -> bool {
    filter.use_matching && !pantry.is_empty()
}
