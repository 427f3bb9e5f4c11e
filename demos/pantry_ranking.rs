//! Rank a catalog response against a pantry and print suggestions

use recipe_radar::{
    load_catalog, rank, suggest, summarize, Difficulty, EngineConfig, FilterConfig, PantrySet,
    TimePreset,
};

const CATALOG: &str = r#"{
    "meals": [
        {"idMeal": "1", "strMeal": "Garlic Chicken", "strArea": "American",
         "strIngredient1": "Chicken", "strIngredient2": "Garlic", "strIngredient3": "Butter",
         "cookTime": 35, "difficulty": "easy"},
        {"idMeal": "2", "strMeal": "Fried Rice", "strArea": "Chinese",
         "strIngredient1": "Rice", "strIngredient2": "Eggs", "strIngredient3": "Garlic",
         "cookTime": 20, "difficulty": "easy"},
        {"idMeal": "3", "strMeal": "Beef Wellington", "strArea": "British",
         "strIngredient1": "Beef", "strIngredient2": "Mushrooms", "strIngredient3": "Puff Pastry",
         "cookTime": 90, "difficulty": "hard"}
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = EngineConfig::load()?;
    let recipes = load_catalog(CATALOG, &config)?;
    let pantry = PantrySet::from_items(["chicken", "Garlic", "rice"]);

    let filter = FilterConfig::builder()
        .use_matching(true)
        .time_preset(TimePreset::UnderOneHour)
        .difficulty(Difficulty::Easy)
        .build();

    let ranked = rank(&recipes, &filter, &pantry);
    let summary = summarize(&ranked, recipes.len(), &filter, &pantry);
    println!("Showing {} of {} recipes", summary.shown, summary.total);
    for entry in &ranked {
        println!("  {} ({})", entry.recipe.name, entry.score);
    }

    let suggestions = suggest(&pantry, &config.suggestions);
    for idea in &suggestions.recipes {
        println!("Try: {} ({} min, {})", idea.name, idea.time_minutes, idea.difficulty);
    }
    println!("Pairs well with: {}", suggestions.pairings.join(", "));

    Ok(())
}
