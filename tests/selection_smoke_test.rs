use std::fs;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use dinner_picker::catalog::{load_meal_data, SheetNames};
use dinner_picker::planner::{
    filter_recipes, suggest_dinner, FixedChooser, RandomChooser, Suggestion,
};
use dinner_picker::state::{Cell, CsvDirectory, MemoryStore, Table, TableStore, XlsxWorkbook};
use dinner_picker::DinnerError;

fn sample_tables() -> (Table, Table, Table) {
    let mut ingredients = Table::new(["ingredient", "cost"]);
    ingredients.push_row(vec![Cell::text("flour"), Cell::Number(1.0)]);
    ingredients.push_row(vec![Cell::text("cheese"), Cell::Number(4.0)]);
    ingredients.push_row(vec![Cell::text("mushroom"), Cell::Number(3.0)]);

    let mut recipes = Table::new(["name", "ingredients", "time"]);
    recipes.push_row(vec![
        Cell::text("Pizza"),
        Cell::text("flour, mushroom"),
        Cell::Number(30.0),
    ]);
    recipes.push_row(vec![
        Cell::text("Salad"),
        Cell::text("flour, cheese"),
        Cell::Number(10.0),
    ]);

    let mut dislikes = Table::new(["ingredient"]);
    dislikes.push_row(vec![Cell::text("mushroom")]);

    (ingredients, recipes, dislikes)
}

fn sample_store() -> MemoryStore {
    let (ingredients, recipes, dislikes) = sample_tables();
    MemoryStore::new()
        .with_table("ingredients", ingredients)
        .with_table("recipes", recipes)
        .with_table("dislikes", dislikes)
}

#[test]
fn test_pizza_salad_scenario() {
    let store = sample_store();
    let data = load_meal_data(&store, &SheetNames::default()).unwrap();

    let filtered = filter_recipes(&data.recipes, &data.disliked, Some(20));
    let names: Vec<&str> = filtered.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Salad"]);
    assert_eq!(filtered[0].cost(), 5.0);

    let mut chooser = RandomChooser::new(StdRng::seed_from_u64(42));
    let outcome = suggest_dinner(&data.recipes, &data.disliked, Some(20), &mut chooser);
    assert_eq!(outcome, Suggestion::Recipe("Salad".to_string()));
}

#[test]
fn test_no_time_limit_still_excludes_dislikes() {
    let store = sample_store();
    let data = load_meal_data(&store, &SheetNames::default()).unwrap();

    for seed in 0..10 {
        let mut chooser = RandomChooser::new(StdRng::seed_from_u64(seed));
        let outcome = suggest_dinner(&data.recipes, &data.disliked, None, &mut chooser);
        assert_eq!(outcome.label(), "Salad");
    }
}

#[test]
fn test_tight_budget_gives_no_suitable_recipe() {
    let store = sample_store();
    let data = load_meal_data(&store, &SheetNames::default()).unwrap();

    let outcome = suggest_dinner(&data.recipes, &data.disliked, Some(5), &mut FixedChooser(0));
    assert!(outcome.is_none_available());
}

#[test]
fn test_missing_input_sheet_is_storage_error() {
    let (ingredients, recipes, _) = sample_tables();
    let store = MemoryStore::new()
        .with_table("ingredients", ingredients)
        .with_table("recipes", recipes);

    let err = load_meal_data(&store, &SheetNames::default()).unwrap_err();
    assert!(matches!(err, DinnerError::Storage(_)));
    let message = err.to_string();
    assert!(message.contains("sheet 'dislikes' not found"));
    assert!(message.contains("--dislikes-sheet"));
}

#[test]
fn test_csv_directory_pipeline() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("ingredients.csv"),
        "ingredient,cost\nflour,1\ncheese,4\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("recipes.csv"),
        "name,ingredients,time\nPizza,\"flour, mushroom\",30\nSalad,\"flour, cheese\",10\n",
    )
    .unwrap();
    fs::write(dir.path().join("dislikes.csv"), "ingredient\nmushroom\n").unwrap();

    let store = CsvDirectory::new(dir.path());
    let data = load_meal_data(&store, &SheetNames::default()).unwrap();
    assert_eq!(data.recipes.len(), 2);
    assert_eq!(data.recipes[0].cost(), 1.0);

    let outcome = suggest_dinner(&data.recipes, &data.disliked, Some(20), &mut FixedChooser(0));
    assert_eq!(outcome.label(), "Salad");
}

#[test]
fn test_xlsx_workbook_pipeline() {
    let dir = TempDir::new().unwrap();
    let mut book = XlsxWorkbook::new(dir.path().join("recipes_data.xlsx"));

    let (ingredients, recipes, dislikes) = sample_tables();
    book.write_table("ingredients", &ingredients).unwrap();
    book.write_table("recipes", &recipes).unwrap();
    book.write_table("dislikes", &dislikes).unwrap();

    let data = load_meal_data(&book, &SheetNames::default()).unwrap();
    assert_eq!(data.recipes.len(), 2);
    assert_eq!(data.recipes[0].time(), 30);

    let outcome = suggest_dinner(&data.recipes, &data.disliked, Some(20), &mut FixedChooser(0));
    assert_eq!(outcome.label(), "Salad");
}

#[test]
fn test_malformed_time_aborts_loading() {
    let (ingredients, _, dislikes) = sample_tables();
    let mut recipes = Table::new(["name", "ingredients", "time"]);
    recipes.push_row(vec![
        Cell::text("Stew"),
        Cell::text("flour"),
        Cell::text("an hour"),
    ]);
    let store = MemoryStore::new()
        .with_table("ingredients", ingredients)
        .with_table("recipes", recipes)
        .with_table("dislikes", dislikes);

    let err = load_meal_data(&store, &SheetNames::default()).unwrap_err();
    assert!(matches!(err, DinnerError::Parse { .. }));
}
