use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn normalize(item: &str) -> Option<String> {
    let trimmed = item.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Ingredients the user currently has on hand.
///
/// Entries are trimmed and lower-cased; duplicates collapse and the first
/// insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PantrySet {
    items: Vec<String>,
}

impl PantrySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pantry from free-text entries, e.g. the pantry store's list.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pantry = PantrySet::new();
        for item in items {
            pantry.insert(item.as_ref());
        }
        pantry
    }

    /// Add an ingredient. Returns false for blank or already present entries.
    pub fn insert(&mut self, item: &str) -> bool {
        match normalize(item) {
            Some(name) if !self.items.contains(&name) => {
                self.items.push(name);
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, item: &str) -> bool {
        let Some(name) = normalize(item) else {
            return false;
        };
        let before = self.items.len();
        self.items.retain(|existing| *existing != name);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, item: &str) -> bool {
        normalize(item).is_some_and(|name| self.items.contains(&name))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for PantrySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        PantrySet::from_items(iter)
    }
}

impl From<Vec<String>> for PantrySet {
    fn from(items: Vec<String>) -> Self {
        PantrySet::from_items(items)
    }
}

impl From<PantrySet> for Vec<String> {
    fn from(pantry: PantrySet) -> Self {
        pantry.items
    }
}

/// Lower-cased ingredient names of a single recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeIngredientSet {
    names: HashSet<String>,
}

impl RecipeIngredientSet {
    pub fn contains(&self, name: &str) -> bool {
        normalize(name).is_some_and(|name| self.names.contains(&name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for RecipeIngredientSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        RecipeIngredientSet {
            names: iter
                .into_iter()
                .filter_map(|name| normalize(name.as_ref()))
                .collect(),
        }
    }
}
