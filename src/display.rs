use crate::api_connection::endpoints::{NutritionInfo, Recipe};

/// One-line summary used by the results and saved lists.
pub fn summary_line(recipe: &Recipe) -> String {
    let mut line = format!(
        "{} [{}] - {}, {} mins, serves {}",
        recipe.id, recipe.difficulty, recipe.cuisine, recipe.cooking_time, recipe.serving_size
    );
    if let Some(score) = recipe.match_score {
        line.push_str(&format!(", {}% match", score));
    }
    if !recipe.dietary_tags.is_empty() {
        line.push_str(&format!(" ({})", recipe.dietary_tags.join(", ")));
    }
    line
}

pub fn print_recipe_list(recipes: &[Recipe]) {
    for recipe in recipes {
        println!("  {}", recipe.name);
        println!("    {}", summary_line(recipe));
    }
}

pub fn print_recipe_detail(recipe: &Recipe) {
    println!("\n{}", recipe.name);
    println!("{}", summary_line(recipe));

    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }

    println!("\nInstructions:");
    for (idx, instruction) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", idx + 1, instruction);
    }

    print_nutrition(&recipe.nutrition);
}

/// Per-serving estimates, matching the nutrition panel of the web UI.
pub fn print_nutrition(nutrition: &NutritionInfo) {
    println!("\nNutrition (per serving):");
    println!("  Calories: {} kcal", nutrition.calories);
    println!("  Protein:  {} g", nutrition.protein);
    println!("  Carbs:    {} g", nutrition.carbs);
    println!("  Fat:      {} g", nutrition.fat);
    println!("  Fiber:    {} g", nutrition.fiber);
}
