use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::types::{MealSummary, MealsEnvelope};

/// Anything that can hand out meals. The controller and the rotation loader
/// only see this trait, so tests can swap in a canned source.
#[async_trait]
pub trait MealSource: Send + Sync {
    /// Meals whose ingredient list contains `ingredient`.
    /// An empty match is `Ok(vec![])`, never an error.
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<MealSummary>, ApiError>;

    /// One random meal. Fails with `ApiError::EmptyResponse` if none came back.
    async fn random_meal(&self) -> Result<MealSummary, ApiError>;
}

/// HTTP client for TheMealDB.
pub struct MealDbClient {
    http: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// GET `{base}/{endpoint}` and decode the `meals` envelope.
    async fn get_meals(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<Vec<MealSummary>>, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(%url, ?query, "GET");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%url, "request failed: {e}");
                ApiError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "non-success status");
            return Err(ApiError::Server {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        let envelope: MealsEnvelope = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(%url, "malformed response body: {e}");
            ApiError::from(e)
        })?;
        Ok(envelope.meals)
    }
}

#[async_trait]
impl MealSource for MealDbClient {
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<MealSummary>, ApiError> {
        let meals = self
            .get_meals("filter.php", &[("i", ingredient)])
            .await?
            .unwrap_or_default();
        tracing::debug!(ingredient, count = meals.len(), "ingredient search finished");
        Ok(meals)
    }

    async fn random_meal(&self) -> Result<MealSummary, ApiError> {
        self.get_meals("random.php", &[])
            .await?
            .and_then(|meals| meals.into_iter().next())
            .ok_or(ApiError::EmptyResponse)
    }
}
