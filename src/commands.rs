use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;

use crate::api::{MealDbClient, MealSource};
use crate::classifier::classify;
use crate::config::ClientConfig;
use crate::rotation::load_daily_rotation;
use crate::types::{FilterMode, StatusMessage};
use crate::{SearchState, StateMutex};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter an ingredient.";
pub const NO_MATCHES_MESSAGE: &str = "No meals found with this filter.";

/// How a search attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty query; nothing was fetched.
    Rejected,
    /// This many meals survived classification.
    Found(usize),
    /// Fetch succeeded but nothing survived classification.
    NoMatches,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomOutcome {
    Found,
    Failed,
}

/// Mediates between user actions and the meal source.
///
/// The state lock is held only for bookkeeping and is released before every
/// network call, so a search and a random fetch can be outstanding together.
pub struct Controller {
    source: Arc<dyn MealSource>,
    state: Arc<StateMutex>,
    rotation_size: usize,
    rotation_started: AtomicBool,
}

impl Controller {
    pub fn new(source: Arc<dyn MealSource>, rotation_size: usize) -> Self {
        Self {
            source,
            state: Arc::new(StateMutex::new(SearchState::default())),
            rotation_size,
            rotation_started: AtomicBool::new(false),
        }
    }

    /// Controller backed by the real HTTP client.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = MealDbClient::new(config)?;
        Ok(Self::new(Arc::new(client), config.rotation_size))
    }

    /// Shared state handle, for renderers that poll while flows run.
    pub fn state(&self) -> Arc<StateMutex> {
        Arc::clone(&self.state)
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> SearchState {
        self.state.lock().await.clone()
    }

    pub async fn set_query(&self, query: impl Into<String>) {
        self.state.lock().await.query = query.into();
    }

    pub async fn set_filter_mode(&self, mode: FilterMode) {
        self.state.lock().await.filter_mode = mode;
    }

    /// Load the daily rotation. Runs once per controller; later calls return
    /// immediately. Failures are logged and leave the rotation empty without
    /// touching the message slot.
    pub async fn init(&self) {
        if self.rotation_started.swap(true, Ordering::SeqCst) {
            return;
        }

        match load_daily_rotation(self.source.as_ref(), self.rotation_size).await {
            Ok(meals) => {
                self.state.lock().await.daily_rotation = meals;
            }
            Err(e) => {
                tracing::error!("Error fetching recipes of the day: {e}");
            }
        }
    }

    /// Search by the current query, then apply the filter mode that was
    /// selected when the search was submitted.
    pub async fn search(&self) -> SearchOutcome {
        let (query, mode) = {
            let mut s = self.state.lock().await;
            let query = s.query.trim().to_string();
            if query.is_empty() {
                s.message = Some(StatusMessage::error(EMPTY_QUERY_MESSAGE));
                return SearchOutcome::Rejected;
            }
            s.message = None;
            s.results.clear();
            s.searches_in_flight += 1;
            (query, s.filter_mode)
        }; // lock released before the fetch

        let fetched = self.source.search_by_ingredient(&query).await;

        let mut s = self.state.lock().await;
        s.searches_in_flight = s.searches_in_flight.saturating_sub(1);
        match fetched {
            Ok(meals) => {
                let fetched_count = meals.len();
                let meals = classify(meals, mode);
                let kept = meals.len();
                tracing::debug!(%query, ?mode, fetched_count, kept, "search classified");
                s.results = meals;
                if kept == 0 {
                    s.message = Some(StatusMessage::advisory(NO_MATCHES_MESSAGE));
                    SearchOutcome::NoMatches
                } else {
                    SearchOutcome::Found(kept)
                }
            }
            Err(e) => {
                tracing::warn!(%query, "search failed: {e}");
                s.message = Some(StatusMessage::error(e.user_message()));
                SearchOutcome::Failed
            }
        }
    }

    /// Fetch a single random meal into its own slot. Search results are left alone.
    pub async fn random_meal(&self) -> RandomOutcome {
        {
            let mut s = self.state.lock().await;
            s.message = None;
            s.random_meal = None;
            s.randoms_in_flight += 1;
        }

        let fetched = self.source.random_meal().await;

        let mut s = self.state.lock().await;
        s.randoms_in_flight = s.randoms_in_flight.saturating_sub(1);
        match fetched {
            Ok(meal) => {
                tracing::debug!(id = %meal.id, name = %meal.name, "random meal");
                s.random_meal = Some(meal);
                RandomOutcome::Found
            }
            Err(e) => {
                tracing::warn!("random meal failed: {e}");
                s.message = Some(StatusMessage::error(e.user_message()));
                RandomOutcome::Failed
            }
        }
    }
}
