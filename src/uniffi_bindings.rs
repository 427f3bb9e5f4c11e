//! UniFFI bindings for recipe-radar-engine
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! Everything here is synchronous; the cooking session is exposed as an object
//! guarded by a mutex so the host UI can call it from its own threads.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    CookingSession, Difficulty, EngineConfig, EngineError, FilterConfig, IngredientLine,
    PantrySet, RankedRecipe, Recipe, SessionSnapshot, Step, TimerState,
};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible step
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiStep {
    pub text: String,
    pub timer_seconds: u32,
}

impl From<Step> for FfiStep {
    fn from(step: Step) -> Self {
        FfiStep {
            text: step.text,
            timer_seconds: step.timer_seconds,
        }
    }
}

impl From<FfiStep> for Step {
    fn from(ffi: FfiStep) -> Self {
        Step::new(ffi.text, ffi.timer_seconds)
    }
}

/// FFI-compatible difficulty enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiDifficulty {
    Easy,
    Medium,
    Hard,
}

impl From<FfiDifficulty> for Difficulty {
    fn from(difficulty: FfiDifficulty) -> Self {
        match difficulty {
            FfiDifficulty::Easy => Difficulty::Easy,
            FfiDifficulty::Medium => Difficulty::Medium,
            FfiDifficulty::Hard => Difficulty::Hard,
        }
    }
}

impl From<Difficulty> for FfiDifficulty {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => FfiDifficulty::Easy,
            Difficulty::Medium => FfiDifficulty::Medium,
            Difficulty::Hard => FfiDifficulty::Hard,
        }
    }
}

/// Ingredient/measure pair (measure is an empty string when absent)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub name: String,
    pub measure: String,
}

/// FFI-compatible recipe structure
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub ingredients: Vec<FfiIngredient>,
    pub cook_time_minutes: u32,
    pub difficulty: FfiDifficulty,
    pub cuisine: String,
    /// Category (empty string if none)
    pub category: String,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            id: recipe.id,
            name: recipe.name,
            instructions: recipe.instructions,
            ingredients: recipe
                .ingredients
                .into_iter()
                .map(|line| FfiIngredient {
                    name: line.name,
                    measure: line.measure.unwrap_or_default(),
                })
                .collect(),
            cook_time_minutes: recipe.cook_time_minutes,
            difficulty: recipe.difficulty.into(),
            cuisine: recipe.cuisine,
            category: recipe.category.unwrap_or_default(),
        }
    }
}

impl From<FfiRecipe> for Recipe {
    fn from(ffi: FfiRecipe) -> Self {
        Recipe {
            id: ffi.id,
            name: ffi.name,
            instructions: ffi.instructions,
            ingredients: ffi
                .ingredients
                .into_iter()
                .map(|ing| IngredientLine {
                    name: ing.name,
                    measure: if ing.measure.is_empty() {
                        None
                    } else {
                        Some(ing.measure)
                    },
                })
                .collect(),
            cook_time_minutes: ffi.cook_time_minutes,
            difficulty: ffi.difficulty.into(),
            cuisine: ffi.cuisine,
            category: if ffi.category.is_empty() {
                None
            } else {
                Some(ffi.category)
            },
        }
    }
}

/// FFI-compatible filter configuration
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiFilterConfig {
    pub difficulty: Vec<FfiDifficulty>,
    pub max_time_minutes: Option<u32>,
    pub cuisines: Vec<String>,
    pub use_matching: bool,
}

impl From<FfiFilterConfig> for FilterConfig {
    fn from(ffi: FfiFilterConfig) -> Self {
        let mut builder = FilterConfig::builder().use_matching(ffi.use_matching);
        for difficulty in ffi.difficulty {
            builder = builder.difficulty(difficulty.into());
        }
        for cuisine in ffi.cuisines {
            builder = builder.cuisine(cuisine);
        }
        if let Some(minutes) = ffi.max_time_minutes {
            builder = builder.max_time_minutes(minutes);
        }
        builder.build()
    }
}

/// Ranked recipe with its match score
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRankedRecipe {
    pub recipe: FfiRecipe,
    pub score: f64,
}

impl From<RankedRecipe<'_>> for FfiRankedRecipe {
    fn from(ranked: RankedRecipe<'_>) -> Self {
        FfiRankedRecipe {
            recipe: ranked.recipe.clone().into(),
            score: ranked.score.value(),
        }
    }
}

/// FFI-compatible timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiTimerState {
    Idle,
    Running,
    Paused,
    Expired,
}

impl From<TimerState> for FfiTimerState {
    fn from(state: TimerState) -> Self {
        match state {
            TimerState::Idle => FfiTimerState::Idle,
            TimerState::Running => FfiTimerState::Running,
            TimerState::Paused => FfiTimerState::Paused,
            TimerState::Expired => FfiTimerState::Expired,
        }
    }
}

/// Session state after an operation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiSessionSnapshot {
    pub steps: Vec<FfiStep>,
    pub current_index: u32,
    pub completed: Vec<u32>,
    pub timer_remaining_seconds: u32,
    pub timer_running: bool,
    pub timer_state: FfiTimerState,
    pub progress_percent: f64,
}

impl From<SessionSnapshot> for FfiSessionSnapshot {
    fn from(snapshot: SessionSnapshot) -> Self {
        FfiSessionSnapshot {
            steps: snapshot.steps.into_iter().map(FfiStep::from).collect(),
            current_index: snapshot.current_index as u32,
            completed: snapshot.completed.into_iter().map(|i| i as u32).collect(),
            timer_remaining_seconds: snapshot.timer_remaining_seconds,
            timer_running: snapshot.timer_running,
            timer_state: snapshot.timer_state.into(),
            progress_percent: snapshot.progress_percent,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiEngineError {
    /// The recipe has no usable instructions
    NoInstructions { message: String },
    /// A step index outside the recipe was requested
    InvalidStep { message: String },
    /// Catalog payload could not be read
    CatalogError { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Session lock was poisoned by a panic on another thread
    SessionError { message: String },
}

impl fmt::Display for FfiEngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiEngineError::NoInstructions { message } => {
                write!(f, "No instructions: {}", message)
            }
            FfiEngineError::InvalidStep { message } => write!(f, "Invalid step: {}", message),
            FfiEngineError::CatalogError { message } => write!(f, "Catalog error: {}", message),
            FfiEngineError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiEngineError::SessionError { message } => write!(f, "Session error: {}", message),
        }
    }
}

impl std::error::Error for FfiEngineError {}

impl From<EngineError> for FfiEngineError {
    fn from(err: EngineError) -> Self {
        let message = err.to_string();
        match err {
            EngineError::NoInstructions => FfiEngineError::NoInstructions { message },
            EngineError::StepOutOfRange { .. } => FfiEngineError::InvalidStep { message },
            EngineError::UnknownDifficulty(_)
            | EngineError::CatalogError(_)
            | EngineError::JsonError(_) => FfiEngineError::CatalogError { message },
            EngineError::ConfigError(_) => FfiEngineError::ConfigError { message },
        }
    }
}

/// Split raw instruction text into steps
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn segment_instructions(text: String) -> Vec<FfiStep> {
    crate::segment(&text).into_iter().map(FfiStep::from).collect()
}

/// Match score of a recipe against the pantry entries, in percent
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn match_score(recipe: FfiRecipe, pantry: Vec<String>) -> f64 {
    let recipe: Recipe = recipe.into();
    crate::recipe_match_score(&recipe, &PantrySet::from_items(pantry)).value()
}

/// Rank and filter recipes against the pantry
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn rank_recipes(
    recipes: Vec<FfiRecipe>,
    filter: FfiFilterConfig,
    pantry: Vec<String>,
) -> Vec<FfiRankedRecipe> {
    let recipes: Vec<Recipe> = recipes.into_iter().map(Recipe::from).collect();
    let filter: FilterConfig = filter.into();
    let pantry = PantrySet::from_items(pantry);

    crate::rank(&recipes, &filter, &pantry)
        .into_iter()
        .map(FfiRankedRecipe::from)
        .collect()
}

/// Parse a catalog response body into recipes using the default configuration
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_catalog_meals(json: String) -> Result<Vec<FfiRecipe>, FfiEngineError> {
    let recipes = crate::load_catalog(&json, &EngineConfig::default())?;
    Ok(recipes.into_iter().map(FfiRecipe::from).collect())
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Cooking session handle for host applications
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct FfiCookingSession {
    inner: Mutex<CookingSession>,
}

impl FfiCookingSession {
    fn lock(&self) -> Result<MutexGuard<'_, CookingSession>, FfiEngineError> {
        self.inner.lock().map_err(|e| FfiEngineError::SessionError {
            message: e.to_string(),
        })
    }
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl FfiCookingSession {
    /// Start a session; fails when there are no steps
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn new(steps: Vec<FfiStep>) -> Result<Arc<Self>, FfiEngineError> {
        let session = CookingSession::start(steps.into_iter().map(Step::from).collect())?;
        Ok(Arc::new(FfiCookingSession {
            inner: Mutex::new(session),
        }))
    }

    pub fn snapshot(&self) -> Result<FfiSessionSnapshot, FfiEngineError> {
        Ok(self.lock()?.snapshot().into())
    }

    pub fn go_to_step(&self, index: u32) -> Result<FfiSessionSnapshot, FfiEngineError> {
        let mut session = self.lock()?;
        session.go_to_step(index as usize)?;
        Ok(session.snapshot().into())
    }

    pub fn next_step(&self) -> Result<FfiSessionSnapshot, FfiEngineError> {
        let mut session = self.lock()?;
        session.next_step();
        Ok(session.snapshot().into())
    }

    pub fn previous_step(&self) -> Result<FfiSessionSnapshot, FfiEngineError> {
        let mut session = self.lock()?;
        session.previous_step();
        Ok(session.snapshot().into())
    }

    pub fn toggle_timer(&self) -> Result<FfiSessionSnapshot, FfiEngineError> {
        let mut session = self.lock()?;
        session.toggle_timer();
        Ok(session.snapshot().into())
    }

    pub fn reset_timer(&self) -> Result<FfiSessionSnapshot, FfiEngineError> {
        let mut session = self.lock()?;
        session.reset_timer();
        Ok(session.snapshot().into())
    }

    pub fn tick(&self) -> Result<FfiSessionSnapshot, FfiEngineError> {
        let mut session = self.lock()?;
        session.tick();
        Ok(session.snapshot().into())
    }

    pub fn toggle_step_completion(&self, index: u32) -> Result<FfiSessionSnapshot, FfiEngineError> {
        let mut session = self.lock()?;
        session.toggle_step_completion(index as usize)?;
        Ok(session.snapshot().into())
    }
}
