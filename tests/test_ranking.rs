use recipe_radar::{
    rank, recipe_match_score, score, summarize, Difficulty, FilterConfig, IngredientLine,
    PantrySet, Recipe, RecipeIngredientSet, TimePreset,
};

fn recipe(id: &str, ingredients: &[&str], minutes: u32, difficulty: Difficulty, cuisine: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: format!("Recipe {id}"),
        instructions: String::new(),
        ingredients: ingredients
            .iter()
            .map(|name| IngredientLine {
                name: name.to_string(),
                measure: None,
            })
            .collect(),
        cook_time_minutes: minutes,
        difficulty,
        cuisine: cuisine.to_string(),
        category: None,
    }
}

fn collection() -> Vec<Recipe> {
    vec![
        recipe("curry", &["chicken", "rice", "garlic", "onion"], 45, Difficulty::Medium, "indian"),
        recipe("salad", &["tomato", "onion"], 10, Difficulty::Easy, "mediterranean"),
        recipe("fried-rice", &["rice", "eggs", "garlic"], 20, Difficulty::Easy, "chinese"),
        recipe("stew", &["beef", "potatoes", "carrots"], 120, Difficulty::Medium, "american"),
        recipe("tacos", &["beef", "onion", "tomato", "lime"], 30, Difficulty::Easy, "mexican"),
    ]
}

fn ids(recipes: &[recipe_radar::RankedRecipe<'_>]) -> Vec<String> {
    recipes.iter().map(|r| r.recipe.id.clone()).collect()
}

#[test]
fn test_score_of_half_covered_recipe() {
    let ingredients: RecipeIngredientSet = ["tomato", "onion"].into_iter().collect();
    let pantry = PantrySet::from_items(["tomato"]);
    assert_eq!(score(&ingredients, &pantry).value(), 50.0);
}

#[test]
fn test_empty_pantry_never_scores() {
    for recipe in collection() {
        assert!(recipe_match_score(&recipe, &PantrySet::new()).is_zero());
    }
}

#[test]
fn test_scenario_time_limit_beats_matching() {
    let a = recipe("a", &["chicken", "rice", "garlic"], 45, Difficulty::Medium, "indian");
    let pantry = PantrySet::from_items(["Chicken", "garlic"]);

    let s = recipe_match_score(&a, &pantry);
    assert!((s.value() - 66.666_666).abs() < 0.001);
    assert_eq!(s.rounded(), 66.67);

    let recipes = vec![a];
    let limited = FilterConfig::builder().max_time_minutes(30);

    let with_matching = limited.use_matching(true).build();
    assert!(rank(&recipes, &with_matching, &pantry).is_empty());

    let without_matching = with_matching.with_matching(false);
    assert!(rank(&recipes, &without_matching, &pantry).is_empty());
}

#[test]
fn test_matching_never_returns_zero_scores() {
    let recipes = collection();
    let pantry = PantrySet::from_items(["garlic", "rice"]);
    let filter = FilterConfig::default().with_matching(true);

    let ranked = rank(&recipes, &filter, &pantry);
    assert_eq!(ids(&ranked), vec!["fried-rice", "curry"]);
    assert!(ranked.iter().all(|r| !r.score.is_zero()));
}

#[test]
fn test_ties_keep_incoming_order() {
    let recipes = collection();
    let pantry = PantrySet::from_items(["onion"]);
    let filter = FilterConfig::default().with_matching(true);

    // salad 50%, then curry and tacos tie at 25%
    let ranked = rank(&recipes, &filter, &pantry);
    assert_eq!(ids(&ranked), vec!["salad", "curry", "tacos"]);
}

#[test]
fn test_filters_do_not_reorder() {
    let recipes = collection();
    let pantry = PantrySet::from_items(["onion", "tomato", "beef"]);
    let filter = FilterConfig::builder()
        .use_matching(true)
        .difficulty(Difficulty::Easy)
        .build();

    // salad 100%, tacos 75%, stew 33%, curry 25%; medium ones are filtered out
    let ranked = rank(&recipes, &filter, &pantry);
    assert_eq!(ids(&ranked), vec!["salad", "tacos"]);
}

#[test]
fn test_without_matching_incoming_order_is_kept() {
    let recipes = collection();
    let filter = FilterConfig::default()
        .toggle_max_time(TimePreset::Quick)
        .toggle_cuisine("Mexican")
        .toggle_cuisine("chinese");

    let ranked = rank(&recipes, &filter, &PantrySet::from_items(["beef"]));
    assert_eq!(ids(&ranked), vec!["fried-rice", "tacos"]);
    assert!(ranked.iter().all(|r| r.score.is_zero()));
}

#[test]
fn test_rank_is_idempotent() {
    let recipes = collection();
    let pantry = PantrySet::from_items(["onion", "garlic"]);
    let filter = FilterConfig::builder()
        .use_matching(true)
        .time_preset(TimePreset::UnderOneHour)
        .build();

    let first = rank(&recipes, &filter, &pantry);
    let reranked_input: Vec<Recipe> = first.iter().map(|r| r.recipe.clone()).collect();
    let second = rank(&reranked_input, &filter, &pantry);

    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn test_empty_collection_yields_empty_ranking() {
    let filter = FilterConfig::default().with_matching(true);
    let pantry = PantrySet::from_items(["salt"]);
    let ranked = rank(&[], &filter, &pantry);
    assert!(ranked.is_empty());

    let summary = summarize(&ranked, 0, &filter, &pantry);
    assert_eq!(summary.shown, 0);
    assert!(summary.sorted_by_match);
}

#[test]
fn test_ranked_output_serializes() {
    let recipes = collection();
    let pantry = PantrySet::from_items(["tomato"]);
    let filter = FilterConfig::default().with_matching(true);

    let ranked = rank(&recipes, &filter, &pantry);
    let json = serde_json::to_value(&ranked).unwrap();
    assert_eq!(json[0]["recipe"]["id"], "salad");
    assert_eq!(json[0]["score"], 50.0);
}

#[test]
fn test_deserialized_filter_matches_mixed_case_cuisine() {
    let recipes = vec![
        recipe("lasagne", &["pasta", "beef"], 50, Difficulty::Medium, "Italian"),
        recipe("pho", &["beef", "noodles"], 40, Difficulty::Medium, "Vietnamese"),
    ];
    let filter: FilterConfig = serde_json::from_str(r#"{"cuisines": ["Italian"]}"#).unwrap();

    let ranked = rank(&recipes, &filter, &PantrySet::new());
    assert_eq!(ids(&ranked), vec!["lasagne"]);
}
