use crate::matching::{FilterConfig, TimePreset};
use crate::model::Difficulty;

/// Builder for assembling a [`FilterConfig`] in one go
///
/// Useful when restoring a filter panel from saved selections; the toggle
/// methods on `FilterConfig` cover interactive changes.
#[derive(Debug, Default)]
pub struct FilterConfigBuilder {
    filter: FilterConfig,
}

impl FilterConfigBuilder {
    /// Only keep recipes with this difficulty (can be called repeatedly)
    ///
    /// # Example
    /// ```
    /// use recipe_radar::{Difficulty, FilterConfig};
    ///
    /// let filter = FilterConfig::builder()
    ///     .difficulty(Difficulty::Easy)
    ///     .difficulty(Difficulty::Medium)
    ///     .build();
    /// assert_eq!(filter.difficulty.len(), 2);
    /// ```
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.filter.difficulty.insert(difficulty);
        self
    }

    /// Only keep recipes of this cuisine (case-insensitive, can be called repeatedly)
    ///
    /// # Example
    /// ```
    /// use recipe_radar::FilterConfig;
    ///
    /// let filter = FilterConfig::builder().cuisine("Thai").build();
    /// assert!(filter.cuisines.contains("thai"));
    /// ```
    pub fn cuisine(mut self, cuisine: impl AsRef<str>) -> Self {
        let tag = cuisine.as_ref().trim().to_lowercase();
        if !tag.is_empty() {
            self.filter.cuisines.insert(tag);
        }
        self
    }

    /// Set an explicit cook time limit in minutes
    pub fn max_time_minutes(mut self, minutes: u32) -> Self {
        self.filter.max_time_minutes = Some(minutes);
        self
    }

    /// Set the cook time limit from one of the panel presets
    ///
    /// # Example
    /// ```
    /// use recipe_radar::{FilterConfig, TimePreset};
    ///
    /// let filter = FilterConfig::builder().time_preset(TimePreset::Quick).build();
    /// assert_eq!(filter.max_time_minutes, Some(30));
    /// ```
    pub fn time_preset(mut self, preset: TimePreset) -> Self {
        self.filter.max_time_minutes = preset.max_minutes();
        self
    }

    /// Rank by pantry coverage and hide recipes without any match
    pub fn use_matching(mut self, enabled: bool) -> Self {
        self.filter.use_matching = enabled;
        self
    }

    pub fn build(self) -> FilterConfig {
        self.filter
    }
}
