use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::api_connection::endpoints::{FindRecipesRequest, GenerateRecipeRequest};

/// Dietary tags offered by the filter UI. Free-form tags from the backend
/// are still accepted everywhere; this is just the suggested set.
pub const DIETARY_OPTIONS: &[&str] = &[
    "vegetarian",
    "vegan",
    "gluten-free",
    "dairy-free",
    "low-carb",
    "high-protein",
];

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Transient search filters. Only take effect when a search request is
/// built from them; there is no partial application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilters {
    pub difficulty: Option<Difficulty>,
    pub max_cooking_time: Option<u32>,
    pub dietary_tags: Vec<String>,
}

impl RecipeFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Symmetric toggle: present tags are removed, absent tags are added.
    /// The toggle logic is what keeps `dietary_tags` duplicate-free.
    pub fn toggle_dietary_tag(&mut self, tag: &str) {
        if let Some(pos) = self.dietary_tags.iter().position(|t| t == tag) {
            self.dietary_tags.remove(pos);
        } else {
            self.dietary_tags.push(tag.to_string());
        }
    }

    pub fn clear(&mut self) {
        *self = RecipeFilters::default();
    }

    pub fn is_empty(&self) -> bool {
        self.difficulty.is_none() && self.max_cooking_time.is_none() && self.dietary_tags.is_empty()
    }

    /// Builds the search body. Unset filters are omitted entirely, and an
    /// empty tag set is omitted rather than sent as `[]`.
    pub fn find_request(&self, ingredients: Vec<String>) -> FindRecipesRequest {
        FindRecipesRequest {
            ingredients,
            difficulty: self.difficulty,
            max_cooking_time: self.max_cooking_time,
            dietary_tags: if self.dietary_tags.is_empty() {
                None
            } else {
                Some(self.dietary_tags.clone())
            },
        }
    }

    /// Builds the generation body. Generation takes the tag set as
    /// preferences (always sent, empty or not) and ignores cooking time.
    pub fn generate_request(&self, ingredients: Vec<String>) -> GenerateRecipeRequest {
        GenerateRecipeRequest {
            ingredients,
            dietary_preferences: self.dietary_tags.clone(),
            difficulty: self.difficulty,
        }
    }
}
