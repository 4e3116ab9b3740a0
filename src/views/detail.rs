use crate::api_connection::endpoints::{Recipe, SaveRecipeRequest};

/// Page state for a single recipe: the fetched recipe plus the star
/// rating the user has selected so far. Rating 0 means "not yet rated"
/// and blocks saving.
#[derive(Debug)]
pub struct DetailView {
    recipe: Recipe,
    rating: u8,
}

impl DetailView {
    pub fn new(recipe: Recipe) -> DetailView {
        DetailView { recipe, rating: 0 }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Selects a whole-star rating. Values outside 1..=5 are rejected and
    /// leave the current selection unchanged.
    pub fn set_rating(&mut self, stars: u8) -> bool {
        if (1..=5).contains(&stars) {
            self.rating = stars;
            true
        } else {
            false
        }
    }

    pub fn can_save(&self) -> bool {
        self.rating >= 1
    }

    /// Builds the save request, or None while the recipe is unrated. The
    /// rating survives a failed save; there is nothing to roll back.
    pub fn save_request(&self, user_session: &str) -> Option<SaveRecipeRequest> {
        if !self.can_save() {
            return None;
        }
        Some(SaveRecipeRequest {
            user_session: user_session.to_string(),
            recipe_id: self.recipe.id.clone(),
            rating: self.rating,
            notes: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_connection::endpoints::NutritionInfo;

    fn view() -> DetailView {
        DetailView::new(Recipe {
            id: "r1".to_string(),
            name: "Soup".to_string(),
            ingredients: vec!["water".to_string()],
            instructions: vec!["Boil.".to_string()],
            cuisine: "Test".to_string(),
            difficulty: "easy".to_string(),
            cooking_time: 15,
            serving_size: 2,
            dietary_tags: Vec::new(),
            nutrition: NutritionInfo::default(),
            image_url: None,
            match_score: None,
        })
    }

    #[test]
    fn test_save_blocked_until_rated() {
        let view = view();
        assert!(!view.can_save());
        assert!(view.save_request("user_1_abc").is_none());
    }

    #[test]
    fn test_every_star_value_enables_save() {
        for stars in 1..=5u8 {
            let mut view = view();
            assert!(view.set_rating(stars));
            assert!(view.can_save());
            let request = view.save_request("user_1_abc").unwrap();
            assert_eq!(request.rating, stars);
            assert_eq!(request.recipe_id, "r1");
            assert_eq!(request.user_session, "user_1_abc");
            assert_eq!(request.notes, "");
        }
    }

    #[test]
    fn test_out_of_range_ratings_rejected() {
        let mut view = view();
        assert!(!view.set_rating(0));
        assert!(!view.set_rating(6));
        assert_eq!(view.rating(), 0);

        view.set_rating(3);
        assert!(!view.set_rating(7)); // selection unchanged
        assert_eq!(view.rating(), 3);
    }
}
