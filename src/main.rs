#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;

use anyhow::Result;
use clap::Parser;
use citadel_core::logging::LoggingBuilder;
use citadel_core::{GalleryConfig, Language};
use dioxus::desktop::{Config, WindowBuilder};

/// Global configuration, set from command line
static CONFIG: OnceLock<GalleryConfig> = OnceLock::new();

/// Get the gallery configuration (set from command line or default)
pub fn get_config() -> GalleryConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Citadel - Rick and Morty character gallery
#[derive(Parser, Debug)]
#[command(name = "citadel-desktop")]
#[command(about = "Citadel - infinitely scrolling Rick and Morty character gallery")]
struct Args {
    /// GraphQL endpoint
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Initial language (en or de)
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Fraction of the list scrolled before the next page loads
    #[arg(long)]
    scroll_threshold: Option<f64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    LoggingBuilder::new().verbosity(args.verbose).init();

    let language: Language = args.lang.parse()?;
    let mut config = GalleryConfig::default().with_language(language);
    if let Some(endpoint) = args.endpoint {
        config = config.with_endpoint(endpoint)?;
    }
    if let Some(threshold) = args.scroll_threshold {
        config = config.with_scroll_threshold(threshold)?;
    }

    tracing::info!(endpoint = config.endpoint(), %language, "Starting gallery");

    // Store config globally
    let _ = CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Citadel")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
