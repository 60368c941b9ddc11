//! Pokedex CLI - an interactive Pokedex for the terminal
//!
//! Proxies PokeAPI behind an expiring in-memory response cache and lets the
//! user browse the Pokemon world and build a Pokedex of caught Pokemon
//! across commands.

mod app;
mod cache;
mod cli;
mod commands;
mod data;
mod repl;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::{Cli, StartupConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so the prompt and command output stay clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let app = App::new(config);
    repl::run(app).await?;

    Ok(())
}
