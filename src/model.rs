use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;
use crate::matching::RecipeIngredientSet;

/// One discrete instruction with its heuristic timer estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Instruction text, trimmed and without its leading marker
    pub text: String,
    /// Estimated duration of the step in seconds
    pub timer_seconds: u32,
}

impl Step {
    pub fn new(text: impl Into<String>, timer_seconds: u32) -> Self {
        Step {
            text: text.into(),
            timer_seconds,
        }
    }
}

/// Difficulty tag attached to a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// A single ingredient slot from a catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    pub measure: Option<String>,
}

/// Recipe record as handed over by the catalog layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    /// Raw, unsegmented instruction text
    pub instructions: String,
    pub ingredients: Vec<IngredientLine>,
    pub cook_time_minutes: u32,
    pub difficulty: Difficulty,
    /// Cuisine tag, e.g. "italian"
    pub cuisine: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Recipe {
    /// Lower-cased, de-duplicated ingredient names used for match scoring.
    pub fn ingredient_set(&self) -> RecipeIngredientSet {
        self.ingredients
            .iter()
            .map(|line| line.name.as_str())
            .collect()
    }

    /// Splits the raw instructions into cooking steps with the default markers.
    pub fn steps(&self) -> Vec<Step> {
        crate::segmenter::segment(&self.instructions)
    }
}
