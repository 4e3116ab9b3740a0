use dotenv::dotenv;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::error::Error;
use std::fmt;

use super::endpoints::{
    FindRecipesRequest, GenerateRecipeRequest, RecipeListResponse, RecipeResponse,
    RecognizeRequest, RecognizeResponse, SaveRecipeRequest, StatusResponse,
};

/// Environment variable holding the backend base URL, e.g.
/// `SMART_RECIPE_API_URL=http://localhost:8000`.
pub const API_URL_ENV_VAR: &str = "SMART_RECIPE_API_URL";

#[derive(Debug)]
pub enum ApiConnectionError {
    MissingBaseUrl(String),
    NetworkError(reqwest::Error),
    SerializationError(serde_json::Error),
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
}

impl fmt::Display for ApiConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiConnectionError::MissingBaseUrl(var_name) => {
                write!(f, "Backend URL not found in environment: {}", var_name)
            }
            ApiConnectionError::NetworkError(err) => write!(f, "Network error: {}", err),
            ApiConnectionError::SerializationError(err) => {
                write!(f, "Serialization error: {}", err)
            }
            ApiConnectionError::ApiError { status, error_body } => {
                write!(f, "API error {}: {}", status, error_body)
            }
        }
    }
}

impl Error for ApiConnectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiConnectionError::NetworkError(err) => Some(err),
            ApiConnectionError::SerializationError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiConnectionError {
    fn from(err: reqwest::Error) -> Self {
        ApiConnectionError::NetworkError(err)
    }
}

impl From<serde_json::Error> for ApiConnectionError {
    fn from(err: serde_json::Error) -> Self {
        ApiConnectionError::SerializationError(err)
    }
}

/// Thin client over the Smart Recipe backend. One request per user action;
/// no retries, timeouts, or auth beyond the bare session string carried in
/// request bodies and paths.
pub struct RecipeApi {
    base_url: String,
    client: Client,
}

impl RecipeApi {
    /// Reads the backend base URL from the named environment variable
    /// (loading `.env` first, as the rest of the configuration does).
    pub fn from_env(base_url_env_var_name: &str) -> Result<Self, ApiConnectionError> {
        dotenv().ok();
        let base_url = env::var(base_url_env_var_name)
            .map_err(|_| ApiConnectionError::MissingBaseUrl(base_url_env_var_name.to_string()))?;
        Ok(Self::new(base_url))
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        RecipeApi {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiConnectionError> {
        let response = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;
        Self::read_response(response).await
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiConnectionError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::read_response(response).await
    }

    async fn delete_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiConnectionError> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::read_response(response).await
    }

    async fn read_response<R: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<R, ApiConnectionError> {
        if response.status().is_success() {
            Ok(response.json::<R>().await?)
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            Err(ApiConnectionError::ApiError { status, error_body })
        }
    }

    /// POST /api/ingredients/recognize
    pub async fn recognize_ingredients(
        &self,
        image_base64: String,
    ) -> Result<RecognizeResponse, ApiConnectionError> {
        self.post_json("ingredients/recognize", &RecognizeRequest { image_base64 })
            .await
    }

    /// POST /api/recipes/find
    pub async fn find_recipes(
        &self,
        request: &FindRecipesRequest,
    ) -> Result<RecipeListResponse, ApiConnectionError> {
        self.post_json("recipes/find", request).await
    }

    /// POST /api/recipes/generate
    pub async fn generate_recipe(
        &self,
        request: &GenerateRecipeRequest,
    ) -> Result<RecipeResponse, ApiConnectionError> {
        self.post_json("recipes/generate", request).await
    }

    /// GET /api/recipes/{id}
    pub async fn fetch_recipe(&self, recipe_id: &str) -> Result<RecipeResponse, ApiConnectionError> {
        self.get_json(&format!("recipes/{}", recipe_id)).await
    }

    /// POST /api/user/saved-recipes
    pub async fn save_recipe(
        &self,
        request: &SaveRecipeRequest,
    ) -> Result<StatusResponse, ApiConnectionError> {
        self.post_json("user/saved-recipes", request).await
    }

    /// GET /api/user/saved-recipes/{session}
    pub async fn saved_recipes(
        &self,
        user_session: &str,
    ) -> Result<RecipeListResponse, ApiConnectionError> {
        self.get_json(&format!("user/saved-recipes/{}", user_session))
            .await
    }

    /// DELETE /api/user/saved-recipes/{session}/{recipe_id}
    pub async fn delete_saved_recipe(
        &self,
        user_session: &str,
        recipe_id: &str,
    ) -> Result<StatusResponse, ApiConnectionError> {
        self.delete_json(&format!("user/saved-recipes/{}/{}", user_session, recipe_id))
            .await
    }
}
