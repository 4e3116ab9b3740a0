use serde::{Deserialize, Serialize};

use crate::filters::Difficulty;

/// Per-serving nutrition estimates as reported by the backend.
/// `fiber` is missing from some older recipes, so it defaults to 0.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct NutritionInfo {
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
    #[serde(default)]
    pub fiber: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cuisine: String,
    // Display text only; the backend is free to capitalize as it likes.
    pub difficulty: String,
    pub cooking_time: u32,
    pub serving_size: u32,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default)]
    pub nutrition: NutritionInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Server-computed percentage match against the submitted ingredients.
    /// Only present on search results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u32>,
}

#[derive(Debug, Serialize, Clone)]
pub struct RecognizeRequest {
    pub image_base64: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct FindRecipesRequest {
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cooking_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Clone)]
pub struct GenerateRecipeRequest {
    pub ingredients: Vec<String>,
    pub dietary_preferences: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Serialize, Clone)]
pub struct SaveRecipeRequest {
    pub user_session: String,
    pub recipe_id: String,
    pub rating: u8,
    pub notes: String,
}

// Every backend response is an envelope carrying a `success` flag. A
// missing flag deserializes as false, which callers treat as a no-op
// rather than an error.

#[derive(Debug, Deserialize, Clone)]
pub struct RecognizeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecipeListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecipeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub recipe: Option<Recipe>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_deserializes_with_optional_fields_absent() {
        let json = r#"{
            "id": "abc-123",
            "name": "Garlic Chicken",
            "ingredients": ["chicken", "garlic"],
            "instructions": ["Cook it."],
            "cuisine": "Italian",
            "difficulty": "easy",
            "cooking_time": 30,
            "serving_size": 4,
            "dietary_tags": ["high-protein"],
            "nutrition": {"calories": 420, "protein": 35, "carbs": 12, "fat": 20}
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, "abc-123");
        assert_eq!(recipe.nutrition.fiber, 0); // missing fiber defaults
        assert!(recipe.match_score.is_none());
        assert!(recipe.image_url.is_none());
    }

    #[test]
    fn test_envelope_missing_success_flag_defaults_to_false() {
        let resp: RecognizeResponse =
            serde_json::from_str(r#"{"ingredients": ["tomato"]}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.ingredients, vec!["tomato"]);

        let resp: StatusResponse = serde_json::from_str("{}").unwrap();
        assert!(!resp.success);
    }

    #[test]
    fn test_find_request_omits_unset_filters() {
        let request = FindRecipesRequest {
            ingredients: vec!["chicken".to_string()],
            difficulty: None,
            max_cooking_time: None,
            dietary_tags: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("ingredients"));
        assert!(!obj.contains_key("difficulty"));
        assert!(!obj.contains_key("max_cooking_time"));
        assert!(!obj.contains_key("dietary_tags"));
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let request = FindRecipesRequest {
            ingredients: vec!["rice".to_string()],
            difficulty: Some(Difficulty::Medium),
            max_cooking_time: Some(30),
            dietary_tags: Some(vec!["vegan".to_string()]),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["difficulty"], "medium");
        assert_eq!(value["max_cooking_time"], 30);
    }
}
