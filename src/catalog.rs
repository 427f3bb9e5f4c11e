//! Adapter for recipe records coming from the meal catalog.
//!
//! The catalog returns flat records with up to twenty numbered ingredient and
//! measure slots. Slots are sparsely populated; blank ones are skipped.

use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::config::CatalogConfig;
use crate::error::EngineError;
use crate::model::{Difficulty, IngredientLine, Recipe};

/// Number of ingredient/measure slot pairs in a catalog record
pub const INGREDIENT_SLOTS: usize = 20;

#[derive(Debug, Deserialize)]
struct MealEnvelope {
    #[serde(default)]
    meals: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MealRecord {
    #[serde(default)]
    id_meal: Option<IdValue>,
    #[serde(default)]
    str_meal: Option<String>,
    #[serde(default)]
    str_instructions: Option<String>,
    #[serde(default)]
    str_area: Option<String>,
    #[serde(default)]
    str_category: Option<String>,
    #[serde(default)]
    cook_time: Option<CookTime>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(flatten)]
    slots: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdValue {
    String(String),
    Number(u64),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CookTime {
    Minutes(u32),
    Fractional(f64),
    String(String),
    Other(Value),
}

impl CookTime {
    /// Whole minutes, or `None` when the value is unusable.
    fn minutes(&self) -> Option<u32> {
        match self {
            CookTime::Minutes(m) => Some(*m),
            CookTime::Fractional(m) => whole_minutes(*m),
            CookTime::String(s) => s.trim().parse::<f64>().ok().and_then(whole_minutes),
            CookTime::Other(value) => {
                debug!("Ignoring unusable cookTime {}", value);
                None
            }
        }
    }
}

fn whole_minutes(minutes: f64) -> Option<u32> {
    if minutes.is_finite() && minutes >= 0.0 && minutes <= f64::from(u32::MAX) {
        Some(minutes.round() as u32)
    } else {
        None
    }
}

/// Parse a catalog response envelope (`{"meals": [...]}`) into recipes.
///
/// A `null` or missing `meals` field means the catalog found nothing and
/// yields an empty list.
pub fn parse_meals(json: &str, defaults: &CatalogConfig) -> Result<Vec<Recipe>, EngineError> {
    let envelope: MealEnvelope = serde_json::from_str(json)?;
    let meals = envelope.meals.unwrap_or_default();
    debug!("Catalog response carries {} meals", meals.len());

    meals.iter().map(|meal| parse_meal(meal, defaults)).collect()
}

/// Convert a single catalog record into a [`Recipe`].
pub fn parse_meal(value: &Value, defaults: &CatalogConfig) -> Result<Recipe, EngineError> {
    let record = MealRecord::deserialize(value)?;

    let id = match record.id_meal {
        Some(IdValue::String(id)) if !id.trim().is_empty() => id.trim().to_string(),
        Some(IdValue::Number(id)) => id.to_string(),
        _ => {
            return Err(EngineError::CatalogError(
                "record has no idMeal".to_string(),
            ))
        }
    };

    let ingredients = collect_ingredients(&record.slots);

    let cook_time_minutes = record
        .cook_time
        .as_ref()
        .and_then(CookTime::minutes)
        .unwrap_or(defaults.default_cook_time_minutes);

    let difficulty = match record.difficulty.as_deref() {
        Some(tag) if !tag.trim().is_empty() => tag.parse::<Difficulty>()?,
        _ => defaults.default_difficulty,
    };

    Ok(Recipe {
        id,
        name: record.str_meal.unwrap_or_default().trim().to_string(),
        instructions: record.str_instructions.unwrap_or_default(),
        ingredients,
        cook_time_minutes,
        difficulty,
        cuisine: record
            .str_area
            .unwrap_or_default()
            .trim()
            .to_lowercase(),
        category: record
            .str_category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty()),
    })
}

fn collect_ingredients(slots: &HashMap<String, Value>) -> Vec<IngredientLine> {
    let mut lines = Vec::new();

    for slot in 1..=INGREDIENT_SLOTS {
        let name = match slot_text(slots, &format!("strIngredient{slot}")) {
            Some(name) => name,
            None => {
                debug!("Skipping empty ingredient slot {}", slot);
                continue;
            }
        };
        let measure = slot_text(slots, &format!("strMeasure{slot}"));
        lines.push(IngredientLine { name, measure });
    }

    lines
}

fn slot_text(slots: &HashMap<String, Value>, key: &str) -> Option<String> {
    slots
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
