//! Recipe step and matching engine.
//!
//! Splits free-text instructions into timed steps, ranks recipe collections
//! against the ingredients a user has on hand, and drives the cooking-mode
//! walkthrough of a single recipe. Fetching, persistence and rendering are
//! left to the surrounding application.

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod model;
pub mod segmenter;
pub mod session;
pub mod suggestions;
pub mod uniffi_bindings;

use log::debug;

// Re-export main types
pub use builder::FilterConfigBuilder;
pub use config::EngineConfig;
pub use error::EngineError;
pub use matching::{
    rank, score, summarize, FilterConfig, MatchScore, PantrySet, RankSummary, RankedRecipe,
    RecipeIngredientSet, TimePreset,
};
pub use model::{Difficulty, IngredientLine, Recipe, Step};
pub use segmenter::{segment, Segmenter};
pub use session::{format_clock, CookingSession, SessionSnapshot, StepStatus, TimerState};
pub use suggestions::{suggest, SuggestedRecipe, Suggestions};

// Re-export UniFFI bindings
pub use uniffi_bindings::*;

/// Match score of a single recipe against the pantry.
pub fn recipe_match_score(recipe: &Recipe, pantry: &PantrySet) -> MatchScore {
    score(&recipe.ingredient_set(), pantry)
}

/// Enter cooking mode for `recipe` using the configured segmenter.
///
/// Fails with [`EngineError::NoInstructions`] when the instructions contain
/// no usable step.
pub fn start_cooking(recipe: &Recipe, config: &EngineConfig) -> Result<CookingSession, EngineError> {
    let steps = Segmenter::new(&config.segmenter).segment(&recipe.instructions);
    debug!("Recipe {} has {} steps", recipe.id, steps.len());
    CookingSession::start(steps)
}

/// Parse a catalog response using the configured record defaults.
///
/// The caller owns the recipes and re-runs [`rank`] over them whenever the
/// filter or pantry changes.
pub fn load_catalog(json: &str, config: &EngineConfig) -> Result<Vec<Recipe>, EngineError> {
    catalog::parse_meals(json, &config.catalog)
}
