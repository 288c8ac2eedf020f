mod cli;
mod config;
mod models;
mod motivation;
mod stats;
mod store;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use store::LogStore;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    let logs_path = AppConfig::logs_path()?;
    let mut store = LogStore::open(logs_path);

    match cli.command {
        Some(Commands::Mark {
            prayer,
            timing,
            date,
        }) => {
            handlers::handle_mark(&mut store, &prayer, &timing, &date)?;
        }
        Some(Commands::Dua { name, list, date }) => {
            handlers::handle_dua(&mut store, &name, list, &date)?;
        }
        Some(Commands::Show { date }) => {
            handlers::handle_show(&store, &date)?;
        }
        Some(Commands::Stats { month }) => {
            handlers::handle_stats(&store, month)?;
        }
        Some(Commands::Motivation) => {
            handlers::handle_motivation(&store, &config)?;
        }
        Some(Commands::Export) => {
            handlers::handle_export(&store)?;
        }
        Some(Commands::Clear { yes }) => {
            handlers::handle_clear(&mut store, yes)?;
        }

        // No subcommand → launch TUI
        None => {
            tui::app::run(store, config)?;
        }
    }

    Ok(())
}
