use config::{Config, ConfigError, Environment, File};
use log::info;
use serde::Deserialize;

use crate::model::Difficulty;

/// Main engine configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EngineConfig {
    /// Instruction segmentation settings
    #[serde(default)]
    pub segmenter: SegmenterConfig,
    /// Pantry-driven suggestion limits
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    /// Fallbacks applied to incomplete catalog records
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Configuration for the instruction segmenter
///
/// Only the bullet glyph set is tunable. The step timer heuristic is fixed.
#[derive(Debug, Deserialize, Clone)]
pub struct SegmenterConfig {
    /// Glyphs recognised as bullet markers at the start of a line
    #[serde(default = "default_bullet_glyphs")]
    pub bullet_glyphs: Vec<char>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            bullet_glyphs: default_bullet_glyphs(),
        }
    }
}

/// Limits for ingredient suggestions
#[derive(Debug, Deserialize, Clone)]
pub struct SuggestionsConfig {
    /// Maximum number of suggested recipes
    #[serde(default = "default_max_recipes")]
    pub max_recipes: usize,
    /// Maximum number of complementary ingredients
    #[serde(default = "default_max_pairings")]
    pub max_pairings: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            max_recipes: default_max_recipes(),
            max_pairings: default_max_pairings(),
        }
    }
}

/// Defaults for catalog records that omit optional metadata
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Cook time assumed when a record carries none
    #[serde(default = "default_cook_time_minutes")]
    pub default_cook_time_minutes: u32,
    /// Difficulty assumed when a record carries none
    #[serde(default = "default_difficulty")]
    pub default_difficulty: Difficulty,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_cook_time_minutes: default_cook_time_minutes(),
            default_difficulty: default_difficulty(),
        }
    }
}

// Default value functions
fn default_bullet_glyphs() -> Vec<char> {
    vec![
        '-', '*', '~', '\u{2022}', '\u{25E6}', '\u{25A0}', '\u{25A1}', '\u{25CB}', '\u{25CF}',
    ]
}

fn default_max_recipes() -> usize {
    3
}

fn default_max_pairings() -> usize {
    5
}

fn default_cook_time_minutes() -> u32 {
    30
}

fn default_difficulty() -> Difficulty {
    Difficulty::Medium
}

impl EngineConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_RADAR__ prefix
    /// 2. recipe_radar.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_RADAR__SUGGESTIONS__MAX_PAIRINGS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`EngineConfig::load`] for the source priority.
pub fn load_config() -> Result<EngineConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe_radar").required(false))
        // Use double underscore for nested: RECIPE_RADAR__CATALOG__DEFAULT_DIFFICULTY
        .add_source(
            Environment::with_prefix("RECIPE_RADAR")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: EngineConfig = settings.try_deserialize()?;
    info!(
        "Loaded engine configuration ({} bullet glyphs)",
        config.segmenter.bullet_glyphs.len()
    );
    Ok(config)
}
