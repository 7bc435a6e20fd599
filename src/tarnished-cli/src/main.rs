mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "tarnished=debug,tarnished_cli=debug"
    } else {
        "tarnished=warn,tarnished_cli=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Ar {
            weapon,
            attributes,
            catalog,
            breakdown,
            json,
        } => {
            commands::ar::handle(&weapon, &attributes, catalog.as_deref(), breakdown, json)?;
        }

        Commands::Weapons { catalog, command } => {
            commands::weapons::handle(command, catalog.as_deref())?;
        }

        Commands::Level { class, stats } => {
            commands::level::handle(class.as_deref(), &stats)?;
        }

        Commands::Guide { level, all } => {
            commands::guide::handle(level, all)?;
        }

        Commands::Classes => {
            commands::classes::handle()?;
        }

        Commands::Configure {
            catalog,
            stats,
            show,
        } => {
            commands::configure::handle(catalog, &stats, show)?;
        }
    }

    Ok(())
}
