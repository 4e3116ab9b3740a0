use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::filters::Difficulty;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal client for the Smart Recipe API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse typed ingredients or recognize them from a photo
    Ingredients {
        /// Comma-separated ingredient list, e.g. "chicken, tomatoes, garlic"
        #[arg(long, conflicts_with = "image")]
        text: Option<String>,
        /// Path to a JPEG, PNG, or WEBP photo of your ingredients
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Find recipes matching your ingredients
    Find {
        /// Comma-separated ingredient list
        #[arg(long)]
        ingredients: String,
        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,
        /// Maximum cooking time in minutes
        #[arg(long)]
        max_time: Option<u32>,
        /// Dietary tag filter; repeat to toggle several (toggling a tag
        /// twice removes it again)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Generate a new recipe when the search comes back empty
        #[arg(long)]
        generate_if_empty: bool,
    },
    /// Generate a brand-new AI recipe from your ingredients
    Generate {
        /// Comma-separated ingredient list
        #[arg(long)]
        ingredients: String,
        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,
        /// Dietary preference; repeat for several
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Show one recipe with ingredients, instructions, and nutrition
    Show { recipe_id: String },
    /// Rate a recipe (1-5 stars) and save it to your collection
    Save {
        recipe_id: String,
        /// Star rating, 1 through 5
        #[arg(long)]
        rating: u8,
    },
    /// List the recipes saved under this machine's session
    Saved,
    /// Remove a recipe from your saved collection
    Remove { recipe_id: String },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
