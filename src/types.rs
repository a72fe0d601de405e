use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One meal as returned by the filter and random endpoints.
/// Only the id, name and thumbnail are kept; the API sends many more fields
/// on `random.php` and they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String, // opaque id assigned by TheMealDB
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail_url: String,
}

/// Envelope shared by every endpoint: `{ "meals": [...] | null }`.
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<MealSummary>>,
}

/// Simulated cooking-time filter selected by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    None,
    Quick,
    Long,
}

impl FilterMode {
    /// Label shown next to the filter selector.
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::None => "Got Time?",
            FilterMode::Quick => "Quick (15-30 min)",
            FilterMode::Long => "Long Meals",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    /// Accepts the selector values: "" or "none", "quick", "long".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(FilterMode::None),
            "quick" => Ok(FilterMode::Quick),
            "long" => Ok(FilterMode::Long),
            other => Err(format!("unknown filter mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// The flow failed (validation, transport, server, bad payload).
    Error,
    /// The flow completed but there is something to tell, e.g. no matches.
    Advisory,
}

/// Text shown in the view's single message slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn advisory(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Advisory,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_field_names_and_ignores_extras() {
        let raw = r#"{
            "meals": [{
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
                "strCategory": "Chicken",
                "strArea": "Japanese"
            }]
        }"#;
        let envelope: MealsEnvelope = serde_json::from_str(raw).unwrap();
        let meals = envelope.meals.unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].id, "52772");
        assert_eq!(meals[0].name, "Teriyaki Chicken Casserole");
        assert!(meals[0].thumbnail_url.ends_with(".jpg"));
    }

    #[test]
    fn null_and_missing_meals_are_none() {
        let null: MealsEnvelope = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(null.meals.is_none());
        let missing: MealsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(missing.meals.is_none());
    }

    #[test]
    fn filter_mode_parses_selector_values() {
        assert_eq!("".parse::<FilterMode>().unwrap(), FilterMode::None);
        assert_eq!("QUICK".parse::<FilterMode>().unwrap(), FilterMode::Quick);
        assert_eq!(" long ".parse::<FilterMode>().unwrap(), FilterMode::Long);
        assert!("medium".parse::<FilterMode>().is_err());
    }
}
