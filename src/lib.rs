pub mod api;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod rotation;
pub mod types;
pub mod view;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::commands::Controller;
use crate::config::ClientConfig;
use crate::types::{FilterMode, MealSummary, StatusMessage};

/// Everything the view renders. Mutated only by [`Controller`].
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Raw text from the search box.
    pub query: String,
    pub filter_mode: FilterMode,
    /// Classified results of the latest search.
    pub results: Vec<MealSummary>,
    /// Result of the "Meal of the Day" button.
    pub random_meal: Option<MealSummary>,
    /// Random suggestions fetched once at startup.
    pub daily_rotation: Vec<MealSummary>,
    /// Searches currently outstanding.
    pub searches_in_flight: u32,
    /// Random-meal fetches currently outstanding.
    pub randoms_in_flight: u32,
    /// Shared message slot for both flows.
    pub message: Option<StatusMessage>,
}

impl SearchState {
    /// True while at least one search or random fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.searches_in_flight > 0 || self.randoms_in_flight > 0
    }

    /// Current message text, error or advisory.
    pub fn error_message(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.text.as_str())
    }

    pub fn has_error(&self) -> bool {
        self.message.as_ref().is_some_and(StatusMessage::is_error)
    }
}

/// Type alias for the state handle shared between controller flows.
pub type StateMutex = Mutex<SearchState>;

fn init_tracing() {
    // Logs go to stderr; stdout carries the rendered view.
    #[cfg(debug_assertions)]
    let default_directive = "meal_finder=debug";
    #[cfg(not(debug_assertions))]
    let default_directive = "warn";

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run_cli(cli)) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// One session: rotation, search and random meal run side by side, then the
/// final state is printed.
pub async fn run_cli(cli: Cli) -> Result<ExitCode> {
    let config = ClientConfig::load_with_base_url(cli.base_url.as_deref())
        .context("invalid client configuration")?;

    let controller = Controller::from_config(&config)?;
    controller.set_filter_mode(cli.filter).await;
    if let Some(ingredient) = &cli.ingredient {
        controller.set_query(ingredient.clone()).await;
    }

    let rotation = async {
        if !cli.no_rotation {
            controller.init().await;
        }
    };
    let search = async {
        if cli.ingredient.is_some() {
            Some(controller.search().await)
        } else {
            None
        }
    };
    let random = async {
        if cli.random {
            Some(controller.random_meal().await)
        } else {
            None
        }
    };
    let (_, searched, randomed) = tokio::join!(rotation, search, random);
    tracing::debug!(?searched, ?randomed, "session finished");

    let state = controller.snapshot().await;
    print!("{}", view::render(&state));

    if cli.open {
        match &state.random_meal {
            Some(meal) => {
                if let Err(e) = open::that_detached(&meal.thumbnail_url) {
                    tracing::warn!(url = %meal.thumbnail_url, "failed to open browser: {e}");
                }
            }
            None => tracing::warn!("--open given but there is no random meal to show"),
        }
    }

    Ok(if state.has_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
