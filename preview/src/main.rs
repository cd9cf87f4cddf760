//! Pizza Configurator - recipe preview
//!
//! Renders the recipe, shopping list and configuration summary for one pizza
//! configuration to stdout, the way the configurator page would show them.

use anyhow::Context;
use chrono::{Days, Local, NaiveDateTime};
use pizza_engine::{
    compute_recipe, compute_shopping_list, i18n, is_start_time_in_past, normalize,
    shopping_list_title, summarize_configuration, Configuration, Language, RawConfiguration,
    UnitSystem,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod render;

use crate::config::{Config, OutputFormat};
use crate::render::Preview;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pizza_engine=info,pizza_preview=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting pizza recipe preview");
    tracing::info!("Environment: {}", config.environment);

    let language = Language::from_code(&config.display.language);
    let units = UnitSystem::from_code(&config.display.unit_system);
    let pizza = load_configuration(&config, language)?;
    let now = match config.input.now.as_deref() {
        Some(now) => NaiveDateTime::parse_from_str(now, "%Y-%m-%dT%H:%M")
            .with_context(|| format!("Invalid input.now '{}'", now))?,
        None => Local::now().naive_local(),
    };

    let recipe = compute_recipe(&pizza, language, units);
    let shopping_list = compute_shopping_list(&pizza, language, units);
    let title = shopping_list_title(&pizza, language, units);
    let summary = summarize_configuration(&pizza, language, units);
    let in_past = is_start_time_in_past(&pizza, now);

    tracing::info!(
        pizzas = pizza.pizza_count,
        steps = recipe.step_count(),
        items = shopping_list.len(),
        "Recipe computed"
    );
    if in_past {
        tracing::warn!(%now, "first preparation step lies in the past");
    }

    match config.display.format {
        OutputFormat::Json => {
            let preview = Preview {
                summary: &summary,
                recipe: &recipe,
                shopping_list_title: &title,
                shopping_list: &shopping_list,
                start_time_in_past: in_past,
            };
            println!("{}", serde_json::to_string_pretty(&preview)?);
        }
        OutputFormat::Text => {
            if in_past {
                println!("{}\n", i18n::text(language, i18n::Text::PastStartTimeWarning));
            }
            println!("{}", render::render_summary(&summary));
            println!("{}", render::render_recipe(&recipe));
            print!("{}", render::render_shopping_list(&title, &shopping_list));
        }
    }

    Ok(())
}

/// Read the raw configuration file, or fall back to the default selection
fn load_configuration(config: &Config, language: Language) -> anyhow::Result<Configuration> {
    if let Some(path) = config.input.configuration_path.as_deref() {
        tracing::info!("Loading configuration from {}", path);
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path))?;
        let raw: RawConfiguration = serde_json::from_str(&json)
            .with_context(|| format!("Invalid configuration JSON in {}", path))?;
        return raw
            .normalize()
            .map_err(|e| anyhow::anyhow!(e.message(language)));
    }

    let date = match config.input.eating_date.as_deref() {
        Some(date) => normalize::parse_date(date).map_err(|e| anyhow::anyhow!(e.message(language)))?,
        None => Local::now()
            .date_naive()
            .checked_add_days(Days::new(1))
            .context("Date out of range")?,
    };
    tracing::info!("Using default configuration for {}", date);
    Ok(Configuration::default_on(date))
}
