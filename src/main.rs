use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use slidenav::{Config, deck};

mod app;
mod raylib_fullscreen;
mod texture_loader;

use crate::app::App;

/// Keyboard, mouse and touch driven slide presenter.
#[derive(Debug, Parser)]
#[command(name = "slidenav", version)]
struct Args {
    /// Directory holding the slide images
    deck_dir: PathBuf,

    /// Config file (defaults to slidenav.toml inside the deck directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial window width
    #[arg(long)]
    width: Option<i32>,

    /// Initial window height
    #[arg(long)]
    height: Option<i32>,

    /// Hide the fullscreen toggle button
    #[arg(long)]
    no_fullscreen_button: bool,

    /// Go fullscreen as soon as the window opens
    #[arg(long)]
    start_fullscreen: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if self.no_fullscreen_button {
            config.fullscreen.button = false;
        }
        if self.start_fullscreen {
            config.fullscreen.start = true;
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SLIDENAV_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}

/// File settings with command line overrides on top, validated once.
fn load_config(args: &Args) -> Result<Config> {
    let config_path = Config::resolve_path(args.config.as_deref(), &args.deck_dir);
    let mut config = Config::load(&config_path)?;
    args.apply(&mut config);
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(&args)?;

    let slides = deck::discover(&args.deck_dir, &config.slides)
        .with_context(|| format!("Cannot open deck {}", args.deck_dir.display()))?;

    App::new(&config, slides)?.run();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_config() {
        let args = Args::parse_from([
            "slidenav",
            "deck",
            "--width",
            "800",
            "--no-fullscreen-button",
            "--start-fullscreen",
        ]);
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, Config::default().window.height);
        assert!(!config.fullscreen.button);
        assert!(config.fullscreen.start);
    }

    #[test]
    fn cli_width_rescues_invalid_file_width() {
        let deck = tempfile::tempdir().unwrap();
        std::fs::write(deck.path().join("slidenav.toml"), "[window]\nwidth = 0\n").unwrap();
        let deck_dir = deck.path().to_str().unwrap();

        let args = Args::parse_from(["slidenav", deck_dir, "--width", "800"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.window.width, 800);

        let args = Args::parse_from(["slidenav", deck_dir]);
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn config_defaults_to_deck_directory() {
        let args = Args::parse_from(["slidenav", "talks/rust"]);
        let path = Config::resolve_path(args.config.as_deref(), &args.deck_dir);
        assert_eq!(path, PathBuf::from("talks/rust/slidenav.toml"));
    }
}
