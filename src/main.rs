//! Gomoku Duo GUI
//!
//! A graphical interface for two players sharing one board.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use gomoku::ui::GomokuApp;
use gomoku::AppConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gomoku", version, about = "Two-stone Gomoku for two players")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Board size override (cells per side)
    #[arg(short, long)]
    size: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_found = cli.config.exists();
    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(size) = cli.size {
        config.board.size = size;
        config.validate()?;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
        )
        .init();

    if !config_found {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    info!(board_size = config.board.size, "launching window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([480.0, 360.0])
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku Duo",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow!("window error: {e}"))
}
