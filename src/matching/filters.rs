use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::builder::FilterConfigBuilder;
use crate::model::{Difficulty, Recipe};

/// Cooking-time choices offered by the filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePreset {
    /// Quick meals, 30 minutes or less
    Quick,
    /// Under one hour
    UnderOneHour,
    /// No time limit
    Any,
}

impl TimePreset {
    pub fn max_minutes(&self) -> Option<u32> {
        match self {
            TimePreset::Quick => Some(30),
            TimePreset::UnderOneHour => Some(60),
            TimePreset::Any => None,
        }
    }
}

/// User-selected browse filters.
///
/// Treated as a value: every toggle returns a new configuration instead of
/// changing the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub difficulty: BTreeSet<Difficulty>,
    #[serde(default)]
    pub max_time_minutes: Option<u32>,
    /// Cuisine tags, compared without regard to case
    #[serde(default)]
    pub cuisines: BTreeSet<String>,
    #[serde(default)]
    pub use_matching: bool,
}

impl FilterConfig {
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::default()
    }

    pub fn toggle_difficulty(&self, difficulty: Difficulty) -> Self {
        let mut next = self.clone();
        if !next.difficulty.remove(&difficulty) {
            next.difficulty.insert(difficulty);
        }
        next
    }

    pub fn toggle_cuisine(&self, cuisine: &str) -> Self {
        let mut next = self.clone();
        let tag = normalize_tag(cuisine);
        if tag.is_empty() {
            return next;
        }

        let before = next.cuisines.len();
        next.cuisines.retain(|c| normalize_tag(c) != tag);
        if next.cuisines.len() == before {
            next.cuisines.insert(tag);
        }
        next
    }

    /// Select a time limit; selecting the active limit again clears it.
    pub fn toggle_max_time(&self, preset: TimePreset) -> Self {
        let mut next = self.clone();
        let minutes = preset.max_minutes();
        next.max_time_minutes = if next.max_time_minutes == minutes {
            None
        } else {
            minutes
        };
        next
    }

    pub fn with_matching(&self, use_matching: bool) -> Self {
        FilterConfig {
            use_matching,
            ..self.clone()
        }
    }

    /// Drop difficulty, time and cuisine filters, keeping the matching switch.
    pub fn cleared(&self) -> Self {
        FilterConfig {
            use_matching: self.use_matching,
            ..FilterConfig::default()
        }
    }

    pub fn active_filter_count(&self) -> usize {
        self.difficulty.len() + self.cuisines.len() + usize::from(self.max_time_minutes.is_some())
    }

    /// Whether `recipe` passes every active filter.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let within_time = self
            .max_time_minutes
            .map_or(true, |max| recipe.cook_time_minutes <= max);
        let difficulty_ok =
            self.difficulty.is_empty() || self.difficulty.contains(&recipe.difficulty);
        let cuisine = normalize_tag(&recipe.cuisine);
        let cuisine_ok =
            self.cuisines.is_empty() || self.cuisines.iter().any(|c| normalize_tag(c) == cuisine);

        within_time && difficulty_ok && cuisine_ok
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}
