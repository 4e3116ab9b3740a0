use crate::api_connection::endpoints::Recipe;

/// Page state for the saved-recipes list. Entries are removed locally
/// only after the server has confirmed the delete.
#[derive(Debug, Default)]
pub struct SavedView {
    recipes: Vec<Recipe>,
}

impl SavedView {
    pub fn new(recipes: Vec<Recipe>) -> SavedView {
        SavedView { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Removes the entry with the given recipe id, returning it if it was
    /// present. At most one entry is removed.
    pub fn remove(&mut self, recipe_id: &str) -> Option<Recipe> {
        let pos = self.recipes.iter().position(|r| r.id == recipe_id)?;
        Some(self.recipes.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_connection::endpoints::NutritionInfo;

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: format!("Recipe {}", id),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            cuisine: "Test".to_string(),
            difficulty: "easy".to_string(),
            cooking_time: 5,
            serving_size: 1,
            dietary_tags: Vec::new(),
            nutrition: NutritionInfo::default(),
            image_url: None,
            match_score: None,
        }
    }

    #[test]
    fn test_remove_takes_exactly_one_matching_entry() {
        let mut view = SavedView::new(vec![recipe("a"), recipe("b"), recipe("c")]);
        let removed = view.remove("b").unwrap();
        assert_eq!(removed.id, "b");
        let remaining: Vec<&str> = view.recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(remaining, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_unknown_id_is_a_noop() {
        let mut view = SavedView::new(vec![recipe("a")]);
        assert!(view.remove("zzz").is_none());
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_empty_state() {
        let view = SavedView::default();
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
    }
}
