use anyhow::{bail, Result};
use std::path::Path;

use smart_recipe::api_connection::connection::{RecipeApi, API_URL_ENV_VAR};
use smart_recipe::cli::{parse_args, Command};
use smart_recipe::display;
use smart_recipe::filters::{Difficulty, RecipeFilters};
use smart_recipe::ingredients::{load_ingredient_image, parse_ingredient_list};
use smart_recipe::session::SessionStore;
use smart_recipe::views::detail::DetailView;
use smart_recipe::views::results::ResultsView;
use smart_recipe::views::saved::SavedView;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    match parse_args().command {
        Command::Ingredients { text, image } => run_ingredients(text, image).await,
        Command::Find {
            ingredients,
            difficulty,
            max_time,
            tags,
            generate_if_empty,
        } => {
            run_find(
                &ingredients,
                build_filters(difficulty, max_time, &tags),
                generate_if_empty,
            )
            .await
        }
        Command::Generate {
            ingredients,
            difficulty,
            tags,
        } => run_generate(&ingredients, build_filters(difficulty, None, &tags)).await,
        Command::Show { recipe_id } => run_show(&recipe_id).await,
        Command::Save { recipe_id, rating } => run_save(&recipe_id, rating).await,
        Command::Saved => run_saved().await,
        Command::Remove { recipe_id } => run_remove(&recipe_id).await,
    }
}

fn build_filters(
    difficulty: Option<Difficulty>,
    max_time: Option<u32>,
    tags: &[String],
) -> RecipeFilters {
    let mut filters = RecipeFilters::new();
    filters.difficulty = difficulty;
    filters.max_cooking_time = max_time;
    // Repeating a tag on the command line toggles it back off, same as
    // clicking a tag chip twice.
    for tag in tags {
        filters.toggle_dietary_tag(tag);
    }
    filters
}

/// Intake flow: comma-separated text is parsed locally; an image goes to
/// the recognition endpoint. Both validations run before any network call.
async fn run_ingredients(text: Option<String>, image: Option<std::path::PathBuf>) -> Result<()> {
    if let Some(path) = image {
        return recognize_from_image(&path).await;
    }

    let Some(text) = text else {
        bail!("Provide ingredients with --text or an image with --image");
    };
    let ingredients = parse_ingredient_list(&text);
    if ingredients.is_empty() {
        bail!("Please enter some ingredients");
    }

    println!("Added {} ingredients", ingredients.len());
    for ingredient in &ingredients {
        println!("  - {}", ingredient);
    }
    println!("\nFind matching recipes with: smart_recipe find --ingredients \"{}\"", text.trim());
    Ok(())
}

async fn recognize_from_image(path: &Path) -> Result<()> {
    let (format, image_base64) = load_ingredient_image(path).await?;
    println!("Analyzing {} image '{}'...", format, path.display());

    let api = RecipeApi::from_env(API_URL_ENV_VAR)?;
    match api.recognize_ingredients(image_base64).await {
        Ok(response) if response.success => {
            println!("Recognized {} ingredients!", response.ingredients.len());
            for ingredient in &response.ingredients {
                println!("  - {}", ingredient);
            }
        }
        // Envelope without a success flag: no-op, not an error.
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error recognizing ingredients: {}", err);
            bail!("Failed to recognize ingredients. Please try again.");
        }
    }
    Ok(())
}

/// Results flow: search with filters, report an empty result set as
/// informational, and optionally generate a recipe into the head of the
/// list when nothing matched.
async fn run_find(ingredients_text: &str, filters: RecipeFilters, generate_if_empty: bool) -> Result<()> {
    let Some(mut view) = ResultsView::new(parse_ingredient_list(ingredients_text)) else {
        bail!("Please add some ingredients first");
    };

    let api = RecipeApi::from_env(API_URL_ENV_VAR)?;
    let token = view.begin_search();
    let request = filters.find_request(view.ingredients().to_vec());

    match api.find_recipes(&request).await {
        Ok(response) if response.success => {
            view.apply_search(token, response.recipes);
        }
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error finding recipes: {}", err);
            bail!("Failed to find recipes");
        }
    }

    if view.is_empty() {
        println!("No matching recipes found. Try generating a new one!");
        if generate_if_empty {
            generate_into(&api, &filters, &mut view).await?;
        }
    }

    println!("\n{} recipes found", view.recipes().len());
    display::print_recipe_list(view.recipes());
    Ok(())
}

async fn run_generate(ingredients_text: &str, filters: RecipeFilters) -> Result<()> {
    let Some(mut view) = ResultsView::new(parse_ingredient_list(ingredients_text)) else {
        bail!("Please add some ingredients first");
    };

    let api = RecipeApi::from_env(API_URL_ENV_VAR)?;
    println!("Generating a recipe from your ingredients...");
    generate_into(&api, &filters, &mut view).await?;
    display::print_recipe_list(view.recipes());
    Ok(())
}

async fn generate_into(
    api: &RecipeApi,
    filters: &RecipeFilters,
    view: &mut ResultsView,
) -> Result<()> {
    let request = filters.generate_request(view.ingredients().to_vec());
    match api.generate_recipe(&request).await {
        Ok(response) if response.success => {
            if let Some(recipe) = response.recipe {
                println!("New recipe generated!");
                view.insert_generated(recipe);
            }
        }
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error generating recipe: {}", err);
            bail!("Failed to generate recipe");
        }
    }
    Ok(())
}

/// Detail flow: fetch one recipe and render it in full.
async fn run_show(recipe_id: &str) -> Result<()> {
    let api = RecipeApi::from_env(API_URL_ENV_VAR)?;
    let view = fetch_detail(&api, recipe_id).await?;
    display::print_recipe_detail(view.recipe());
    println!("\nRate and save it with: smart_recipe save {} --rating <1-5>", recipe_id);
    Ok(())
}

async fn fetch_detail(api: &RecipeApi, recipe_id: &str) -> Result<DetailView> {
    match api.fetch_recipe(recipe_id).await {
        Ok(response) if response.success => match response.recipe {
            Some(recipe) => Ok(DetailView::new(recipe)),
            None => bail!("Failed to load recipe"),
        },
        Ok(_) => bail!("Failed to load recipe"),
        Err(err) => {
            eprintln!("Error fetching recipe: {}", err);
            bail!("Failed to load recipe");
        }
    }
}

/// Save flow: the rating gates everything, so an unrated attempt makes no
/// network call at all. A new session token is persisted before use.
async fn run_save(recipe_id: &str, rating: u8) -> Result<()> {
    if rating == 0 {
        bail!("Please rate the recipe before saving");
    }
    if rating > 5 {
        bail!("Rating must be between 1 and 5 stars");
    }

    let api = RecipeApi::from_env(API_URL_ENV_VAR)?;
    let mut view = fetch_detail(&api, recipe_id).await?;
    view.set_rating(rating);

    let session = SessionStore::from_env()?.get_or_create()?;
    let Some(request) = view.save_request(&session) else {
        bail!("Please rate the recipe before saving");
    };

    match api.save_recipe(&request).await {
        Ok(response) if response.success => {
            println!("Recipe saved to your collection!");
        }
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error saving recipe: {}", err);
            bail!("Failed to save recipe");
        }
    }
    Ok(())
}

/// Saved flow: with no session token on disk there is nothing to fetch,
/// so the empty state renders without a request.
async fn run_saved() -> Result<()> {
    let Some(session) = SessionStore::from_env()?.load()? else {
        print_no_saved_recipes();
        return Ok(());
    };

    let api = RecipeApi::from_env(API_URL_ENV_VAR)?;
    let view = fetch_saved(&api, &session).await?;
    if view.is_empty() {
        print_no_saved_recipes();
    } else {
        println!("Your Saved Recipes ({}):", view.len());
        display::print_recipe_list(view.recipes());
    }
    Ok(())
}

/// Delete flow: the local list drops the entry only after the server
/// confirms the delete.
async fn run_remove(recipe_id: &str) -> Result<()> {
    let Some(session) = SessionStore::from_env()?.load()? else {
        print_no_saved_recipes();
        return Ok(());
    };

    let api = RecipeApi::from_env(API_URL_ENV_VAR)?;
    let mut view = fetch_saved(&api, &session).await?;

    match api.delete_saved_recipe(&session, recipe_id).await {
        Ok(response) if response.success => {
            view.remove(recipe_id);
            println!("Recipe removed from favorites");
            println!("{} saved recipes remaining", view.len());
        }
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error deleting recipe: {}", err);
            bail!("Failed to remove recipe");
        }
    }
    Ok(())
}

async fn fetch_saved(api: &RecipeApi, session: &str) -> Result<SavedView> {
    match api.saved_recipes(session).await {
        Ok(response) if response.success => Ok(SavedView::new(response.recipes)),
        Ok(_) => Ok(SavedView::default()),
        Err(err) => {
            eprintln!("Error fetching saved recipes: {}", err);
            bail!("Failed to load saved recipes");
        }
    }
}

fn print_no_saved_recipes() {
    println!("No saved recipes yet. Start exploring and save your favorites!");
}
