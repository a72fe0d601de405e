use crate::types::{FilterMode, MealSummary};

/// Category words that mark a meal as quick to cook.
pub const QUICK_KEYWORDS: &[&str] = &["Breakfast", "Side", "Snack"];

/// Category words that mark a meal as a long cook.
pub const LONG_KEYWORDS: &[&str] = &["Beef", "Chicken", "Dessert", "Pork", "Seafood"];

/// Keyword set for a filter mode. `FilterMode::None` has none.
pub fn keywords(mode: FilterMode) -> &'static [&'static str] {
    match mode {
        FilterMode::None => &[],
        FilterMode::Quick => QUICK_KEYWORDS,
        FilterMode::Long => LONG_KEYWORDS,
    }
}

/// Whether `name` passes the filter.
/// Plain case-insensitive substring test, so "Porkchop" counts as pork.
pub fn matches(name: &str, mode: FilterMode) -> bool {
    if mode == FilterMode::None {
        return true;
    }
    let name = name.to_lowercase();
    keywords(mode)
        .iter()
        .any(|kw| name.contains(&kw.to_lowercase()))
}

/// Keep the meals that match `mode`, in their original order.
pub fn classify(meals: Vec<MealSummary>, mode: FilterMode) -> Vec<MealSummary> {
    if mode == FilterMode::None {
        return meals;
    }
    meals.into_iter().filter(|m| matches(&m.name, mode)).collect()
}
