use clap::Parser;

use crate::types::FilterMode;

/// Find recipe ideas on TheMealDB by ingredient.
#[derive(Debug, Parser)]
#[command(name = "meal-finder", version)]
pub struct Cli {
    /// Ingredient to search for, e.g. "chicken"
    pub ingredient: Option<String>,

    /// Cooking time filter: none, quick or long
    #[arg(short, long, default_value = "none")]
    pub filter: FilterMode,

    /// Also fetch a single random "Meal of the Day"
    #[arg(short, long)]
    pub random: bool,

    /// Open the random meal's picture in the browser
    #[arg(long, requires = "random")]
    pub open: bool,

    /// Skip the daily rotation of suggestions
    #[arg(long)]
    pub no_rotation: bool,

    /// Override the API root (defaults to MEALDB_BASE_URL or the public API)
    #[arg(long)]
    pub base_url: Option<String>,
}
