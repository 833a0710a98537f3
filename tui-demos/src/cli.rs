use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use std::{path::PathBuf, sync::Arc};
use weather_core::{Config, ThemeVariant, WttrClient};

use crate::{
    logging,
    runtime::{self, Program},
    spinners::SpinnersApp,
    text::TextApp,
    theme::Theme,
    weather::WeatherApp,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "tui-demos", version, about = "Terminal UI demos")]
pub struct Cli {
    /// Write logs to this file (the terminal is taken by the UI).
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run all spinner animations.
    Spinners,

    /// Run the text input example.
    Text,

    /// Show the current weather for a location as a card.
    #[command(alias = "commands")]
    Weather {
        /// City name or "lat,lon"; defaults to the configured location.
        location: Option<String>,
    },

    /// Set the default location, theme and weather service.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        logging::init(self.log_file.as_deref(), config.log_level())?;

        let theme = Theme::new(config.theme);

        match self.command {
            Command::Spinners => run_program(SpinnersApp::new(theme)).await,
            Command::Text => run_program(TextApp::new(theme)).await,
            Command::Weather { location } => {
                let location = config.startup_location(location.as_deref());
                let client = WttrClient::new(config.base_url());
                run_program(WeatherApp::new(Arc::new(client), location, theme)).await
            }
            Command::Configure => configure(config),
        }
    }
}

async fn run_program<P: Program>(mut program: P) -> anyhow::Result<()> {
    runtime::run(&mut program).await
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let location = Text::new("Default location:")
        .with_default(&config.startup_location(None))
        .with_help_message("City name or \"lat,lon\"")
        .prompt()
        .context("Failed to read default location")?;

    let themes = ThemeVariant::all().to_vec();
    let start = themes.iter().position(|t| *t == config.theme).unwrap_or(0);
    let theme = Select::new("Theme:", themes)
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read theme")?;

    let base_url = Text::new("Weather service URL:")
        .with_default(config.base_url())
        .prompt()
        .context("Failed to read weather service URL")?;

    config.default_location = Some(location.trim().to_string()).filter(|s| !s.is_empty());
    config.theme = theme;
    config.base_url = Some(base_url.trim().to_string()).filter(|s| !s.is_empty());

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}
