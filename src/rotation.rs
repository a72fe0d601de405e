use futures::future::try_join_all;

use crate::api::MealSource;
use crate::error::ApiError;
use crate::types::MealSummary;

pub use crate::config::DAILY_ROTATION_SIZE;

/// Fetch `count` random meals at once and wait for all of them.
///
/// All fetches are issued before any is awaited. Results keep issuance order,
/// not completion order. A single failure fails the whole batch; there is no
/// partial result.
pub async fn load_daily_rotation(
    source: &dyn MealSource,
    count: usize,
) -> Result<Vec<MealSummary>, ApiError> {
    let fetches = (0..count).map(move |_| source.random_meal());
    let meals = try_join_all(fetches).await?;
    tracing::debug!(count = meals.len(), "daily rotation loaded");
    Ok(meals)
}
