// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { db_path }) => commands::cmd_init(&db_path),

        Some(Commands::Serve {
            config,
            bind,
            db_path,
        }) => commands::cmd_serve(config.as_deref(), bind.as_deref(), db_path.as_deref()),

        Some(Commands::Seed { count, db_path }) => commands::cmd_seed(count, &db_path),

        Some(Commands::List { page, db_path }) => commands::cmd_list(page, &db_path),

        None => {
            println!("Pantry ingredient catalogue");
            println!("Run 'pantry --help' for usage information");
            Ok(())
        }
    }
}
