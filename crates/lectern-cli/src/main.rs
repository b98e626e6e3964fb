//! lectern CLI - outline, navigation and search for slide decks
//!
//! Entry point for the `lectern` command. Each subcommand lives in its own
//! module under `commands`.

use anyhow::Result;
use clap::Parser;

mod args;
mod cli;
mod commands;
mod output;
mod utils;

use cli::{Cli, Commands};
use commands::GenerateOptions;
use utils::logging::initialize_logging;
use utils::session::{load_config, load_deck, open_viewer};

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    match &cli.command {
        Commands::Outline {
            slide,
            expand_all,
            output,
        } => {
            let mut viewer = open_viewer(cli, &config)?;
            commands::outline(&mut viewer, *slide, *expand_all, output.resolve())
        },
        Commands::Locate { slide, output } => {
            let mut viewer = open_viewer(cli, &config)?;
            commands::locate(&mut viewer, *slide, output.resolve())
        },
        Commands::Search {
            query,
            limit,
            output,
        } => {
            let deck = load_deck(cli, &config)?;
            commands::search(deck, &config, &query.join(" "), *limit, output.resolve())
        },
        Commands::Index { output } => {
            let deck = load_deck(cli, &config)?;
            commands::index(&deck, output.resolve())
        },
        Commands::Generate {
            slides,
            sections,
            out,
            force,
        } => {
            let options = GenerateOptions {
                slides: *slides,
                sections: sections.clone(),
                out: out.clone().unwrap_or_else(|| cli.metadata.clone()),
                force: *force,
            };
            commands::generate(&options, &config)
        },
        Commands::Check { output } => commands::check(&cli.metadata, output.resolve()),
    }
}
