//! Dynaform CLI: the `dynaform` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Order {
            schema,
            ui_schema,
            at,
            json,
        } => commands::order::run(schema, ui_schema, at, json),

        Commands::Validate {
            schema,
            ui_schema,
            json,
        } => commands::validate::run(schema, ui_schema, json),

        Commands::Prune { input, sample } => commands::prune::run(input, sample),
    }
}
