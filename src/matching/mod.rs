//! Pantry match scoring, filtering and ranking of recipe collections.

mod filters;
mod pantry;
mod ranking;
mod scorer;

pub use filters::{FilterConfig, TimePreset};
pub use pantry::{PantrySet, RecipeIngredientSet};
pub use ranking::{rank, summarize, RankSummary, RankedRecipe};
pub use scorer::{score, MatchScore};
