use std::fmt::Write;

use crate::types::{MealSummary, MessageKind};
use crate::SearchState;

pub const TITLE: &str = "Recipe Ideas";
pub const RANDOM_HEADING: &str = "Meal of the Day";
pub const ROTATION_HEADING: &str = "Try Out Some New Recipes";

/// Render a state snapshot as plain text. Empty sections are omitted.
pub fn render(state: &SearchState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    if !state.query.trim().is_empty() {
        let _ = writeln!(out, "Search: {} [{}]", state.query.trim(), state.filter_mode);
    }

    if state.is_loading() {
        let _ = writeln!(out, "Loading...");
    }
    if let Some(msg) = &state.message {
        let prefix = match msg.kind {
            MessageKind::Error => "!",
            MessageKind::Advisory => "-",
        };
        let _ = writeln!(out, "{prefix} {}", msg.text);
    }

    if !state.results.is_empty() {
        let _ = writeln!(out, "\nResults ({})", state.results.len());
        write_meals(&mut out, &state.results);
    }

    if let Some(meal) = &state.random_meal {
        let _ = writeln!(out, "\n{RANDOM_HEADING}");
        write_meals(&mut out, std::slice::from_ref(meal));
    }

    if !state.daily_rotation.is_empty() {
        let _ = writeln!(out, "\n{ROTATION_HEADING}");
        write_meals(&mut out, &state.daily_rotation);
    }

    out
}

fn write_meals(out: &mut String, meals: &[MealSummary]) {
    for meal in meals {
        let _ = writeln!(out, "  {:<40} {}", meal.name, meal.thumbnail_url);
    }
}
