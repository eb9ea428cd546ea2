//! Neon command bar from the terminal
//!
//! The page UI calls `resolve` on submit and `suggest` on each keystroke;
//! this binary exposes the same calls for scripts and launchers.

mod render;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use neon_core::{Config, NewTab, NullProvider};

#[derive(Parser, Debug)]
#[command(name = "neon")]
#[command(about = "New tab command bar: resolve input and preview suggestions")]
#[command(version)]
struct Cli {
    /// Config file (defaults to <config dir>/neon/config.json)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve input to a destination URL
    #[command(after_help = "\
Examples:
  neon resolve example.com
  neon resolve yt lofi beats
  neon resolve gh/rust-lang/rust --json")]
    Resolve {
        /// Command bar input (words are joined with spaces)
        input: Vec<String>,

        /// Print the full classification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show suggestions for in-progress input
    Suggest {
        input: Vec<String>,

        /// Skip remote phrase completion
        #[arg(long)]
        offline: bool,

        /// Override the configured suggestion limit
        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Print the command grid grouped by category
    Grid {
        #[arg(long)]
        json: bool,
    },

    /// Validate the config and command registry
    Check,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Config::load_or_default().context("failed to load config"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    neon_core::init_logging();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;
    tracing::debug!(command = ?cli.command, "Dispatching");

    match cli.command {
        Command::Resolve { input, json } => {
            let tab = NewTab::with_provider(config, Arc::new(NullProvider))?;
            let parsed = tab.resolve_input(&input.join(" "));
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                println!("{}", parsed.url);
            }
        }
        Command::Suggest {
            input,
            offline,
            limit,
            json,
        } => {
            if let Some(limit) = limit {
                config.suggestion_limit = limit;
            }
            let tab = if offline {
                NewTab::with_provider(config, Arc::new(NullProvider))?
            } else {
                NewTab::new(config)?
            };

            let input = input.join(" ");
            let suggestions = tab.suggest(&input).await.unwrap_or_default();
            tracing::debug!(query = %input, count = suggestions.len(), "Suggestions ready");
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                for suggestion in &suggestions {
                    println!("{}", render::suggestion_line(suggestion, &input));
                }
            }
        }
        Command::Grid { json } => {
            let tab = NewTab::with_provider(config, Arc::new(NullProvider))?;
            let grid = tab.command_grid();
            if json {
                println!("{}", serde_json::to_string_pretty(&render::grid_json(&grid))?);
            } else {
                print!("{}", render::grid_text(&grid));
            }
        }
        Command::Check => {
            let tab = NewTab::with_provider(config, Arc::new(NullProvider))?;
            let registry = tab.registry();
            println!(
                "ok: {} commands, {} aliases, {} boards",
                registry.len(),
                registry.alias_index().len(),
                registry.boards().len()
            );
        }
    }

    Ok(())
}
