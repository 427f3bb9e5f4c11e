//! Pantry-driven suggestions: recipe ideas and complementary ingredients.

use serde::Serialize;

use crate::config::SuggestionsConfig;
use crate::matching::PantrySet;
use crate::model::Difficulty;

/// A recipe idea tied to a pantry ingredient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestedRecipe {
    pub name: &'static str,
    pub time_minutes: u32,
    pub difficulty: Difficulty,
    pub cuisine: &'static str,
    /// Typical coverage in percent
    pub match_percent: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Suggestions {
    pub recipes: Vec<SuggestedRecipe>,
    /// Ingredients that pair well with the pantry but are not in it
    pub pairings: Vec<&'static str>,
}

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty() && self.pairings.is_empty()
    }
}

const fn idea(
    name: &'static str,
    time_minutes: u32,
    difficulty: Difficulty,
    cuisine: &'static str,
    match_percent: u8,
) -> SuggestedRecipe {
    SuggestedRecipe {
        name,
        time_minutes,
        difficulty,
        cuisine,
        match_percent,
    }
}

const RECIPE_IDEAS: &[(&str, &[SuggestedRecipe])] = &[
    (
        "chicken",
        &[
            idea("Chicken Curry", 45, Difficulty::Medium, "Indian", 85),
            idea("Chicken Stir Fry", 25, Difficulty::Easy, "Chinese", 90),
            idea("Chicken Parmesan", 40, Difficulty::Medium, "Italian", 75),
        ],
    ),
    (
        "beef",
        &[
            idea("Beef Tacos", 30, Difficulty::Easy, "Mexican", 80),
            idea("Beef Stir Fry", 25, Difficulty::Easy, "Chinese", 85),
            idea("Beef Stew", 120, Difficulty::Medium, "American", 75),
        ],
    ),
    (
        "rice",
        &[
            idea("Fried Rice", 20, Difficulty::Easy, "Chinese", 95),
            idea("Chicken Biryani", 60, Difficulty::Hard, "Indian", 80),
            idea("Vegetable Pulao", 35, Difficulty::Medium, "Indian", 90),
        ],
    ),
];

const PAIRINGS: &[(&str, &[&str])] = &[
    (
        "chicken",
        &["garlic", "onion", "lemon", "thyme", "rosemary", "paprika", "potatoes", "carrots"],
    ),
    (
        "beef",
        &["garlic", "onion", "thyme", "mushrooms", "potatoes", "carrots", "red wine", "tomatoes"],
    ),
    (
        "fish",
        &["lemon", "dill", "garlic", "butter", "white wine", "asparagus", "potatoes"],
    ),
    (
        "pasta",
        &["tomato", "garlic", "basil", "cheese", "olive oil", "mushrooms", "spinach"],
    ),
];

fn lookup<T: ?Sized>(table: &[(&str, &'static T)], key: &str) -> Option<&'static T> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

/// Suggest recipe ideas and complementary ingredients for `pantry`.
pub fn suggest(pantry: &PantrySet, config: &SuggestionsConfig) -> Suggestions {
    let mut suggestions = Suggestions::default();

    for item in pantry.iter() {
        for recipe in lookup(RECIPE_IDEAS, item).unwrap_or_default() {
            if !suggestions.recipes.iter().any(|r| r.name == recipe.name) {
                suggestions.recipes.push(recipe.clone());
            }
        }
    }

    for item in pantry.iter() {
        for &pairing in lookup(PAIRINGS, item).unwrap_or_default() {
            if !pantry.contains(pairing) && !suggestions.pairings.contains(&pairing) {
                suggestions.pairings.push(pairing);
            }
        }
    }

    suggestions.recipes.truncate(config.max_recipes);
    suggestions.pairings.truncate(config.max_pairings);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pantry_has_no_suggestions() {
        let suggestions = suggest(&PantrySet::new(), &SuggestionsConfig::default());
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_recipes_are_deduplicated_and_limited() {
        let pantry = PantrySet::from_items(["Rice", "chicken"]);
        let suggestions = suggest(&pantry, &SuggestionsConfig::default());

        let names: Vec<&str> = suggestions.recipes.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Fried Rice", "Chicken Biryani", "Vegetable Pulao"]);
    }

    #[test]
    fn test_pairings_skip_pantry_items() {
        let pantry = PantrySet::from_items(["chicken", "Garlic", "beef"]);
        let suggestions = suggest(&pantry, &SuggestionsConfig::default());

        assert_eq!(
            suggestions.pairings,
            vec!["onion", "lemon", "thyme", "rosemary", "paprika"]
        );
    }

    #[test]
    fn test_limits_come_from_config() {
        let pantry = PantrySet::from_items(["fish", "pasta"]);
        let config = SuggestionsConfig {
            max_recipes: 3,
            max_pairings: 10,
        };
        let suggestions = suggest(&pantry, &config);

        assert!(suggestions.recipes.is_empty());
        assert_eq!(suggestions.pairings.len(), 10);
        assert_eq!(suggestions.pairings.iter().filter(|p| **p == "garlic").count(), 1);
    }
}
