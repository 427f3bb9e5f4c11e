use thiserror::Error;

/// Errors surfaced by the recipe engine
///
/// Tolerated input problems (blank instructions, missing ingredient slots,
/// empty recipe collections) never show up here; they resolve to empty results.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A cooking session was requested for a recipe without any steps
    #[error("No cooking instructions available")]
    NoInstructions,

    /// A step index outside the session's step list was requested
    #[error("Step {index} is out of range for a recipe with {len} steps")]
    StepOutOfRange { index: usize, len: usize },

    /// A difficulty tag other than easy, medium or hard
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// A catalog record could not be turned into a recipe
    #[error("Invalid catalog record: {0}")]
    CatalogError(String),

    /// Catalog payload was not valid JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
