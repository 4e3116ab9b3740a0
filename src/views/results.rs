use crate::api_connection::endpoints::Recipe;

/// Token identifying one search request. Only the most recently issued
/// token may apply its results, so a slow stale response can never
/// overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchToken(u64);

/// Page state for the recipe results list. Holds the ingredient list the
/// search was entered with, the current recipes, and the search
/// generation counter.
#[derive(Debug)]
pub struct ResultsView {
    ingredients: Vec<String>,
    recipes: Vec<Recipe>,
    latest_search: u64,
}

impl ResultsView {
    /// Returns None when the ingredient list is empty; the caller falls
    /// back to the intake flow, as the page redirects in that case.
    pub fn new(ingredients: Vec<String>) -> Option<ResultsView> {
        if ingredients.is_empty() {
            return None;
        }
        Some(ResultsView {
            ingredients,
            recipes: Vec::new(),
            latest_search: 0,
        })
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Starts a new search. Any token issued earlier becomes stale.
    pub fn begin_search(&mut self) -> SearchToken {
        self.latest_search += 1;
        SearchToken(self.latest_search)
    }

    /// Applies search results if the token is still current. Stale results
    /// are dropped and the list is left untouched; returns whether the
    /// results were applied.
    pub fn apply_search(&mut self, token: SearchToken, recipes: Vec<Recipe>) -> bool {
        if token.0 != self.latest_search {
            return false;
        }
        self.recipes = recipes;
        true
    }

    /// Inserts a freshly generated recipe at the head of the list. Existing
    /// entries keep their relative order; nothing is replaced or re-sorted.
    pub fn insert_generated(&mut self, recipe: Recipe) {
        self.recipes.insert(0, recipe);
    }
}
