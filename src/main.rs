mod app;
mod cli;
mod config;
mod error;
mod logic;
mod models;
mod session;
mod ui;

use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use session::{LinePrompt, TermPrompt};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;
use ui::screens::CropTableScreen;

fn main() {
    let cli = Cli::parse();

    // Config errors are reported after logging is up; the session still runs
    let (mut config, config_error) = match Config::load(cli.config.as_deref()) {
        Ok(c) => (c, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Initialize logging
    let default_filter = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    for notice in config.take_notices() {
        tracing::warn!("{}", notice);
    }

    if let Some(e) = config_error {
        tracing::warn!("Falling back to default configuration: {}", e);
        eprintln!("{}", e);
        eprintln!("Continuing with default settings");
    }

    match cli.command {
        Some(Commands::Crops) => {
            print!(
                "{}",
                CropTableScreen::new().with_decimals(config.display.decimals)
            );
        }
        Some(Commands::DefaultConfig) => match Config::default_yaml() {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => eprintln!("{}", e),
        },
        None => {
            let mut app = App::new(config);
            let mut stdout = io::stdout();
            // dialoguer needs a terminal; piped input is read line by line
            let result = if io::stdin().is_terminal() {
                session::run(&mut app, &mut TermPrompt, &mut stdout)
            } else {
                let mut prompt = LinePrompt::new(io::stdin().lock(), io::stdout());
                session::run(&mut app, &mut prompt, &mut stdout)
            };
            if let Err(e) = result {
                tracing::error!("Session ended unexpectedly: {}", e);
                eprintln!("Error: {}", e);
            }
        }
    }
}
