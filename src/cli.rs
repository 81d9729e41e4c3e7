// src/cli.rs
//! CLI definitions for Pantry
//!
//! The command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pantry")]
#[command(author = "Pantry Contributors")]
#[command(version)]
#[command(about = "Ingredient catalogue with paginated listing and form validation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database and apply migrations
    Init {
        /// Path to the database file
        #[arg(short, long, default_value = "pantry.db")]
        db_path: String,
    },

    /// Run the HTTP server
    Serve {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<String>,

        /// Address to listen on (overrides the configuration file)
        #[arg(short, long)]
        bind: Option<String>,

        /// Path to the database file (overrides the configuration file)
        #[arg(short, long)]
        db_path: Option<String>,
    },

    /// Insert randomly generated demo ingredients
    Seed {
        /// Number of ingredients to insert
        #[arg(short = 'n', long, default_value_t = pantry::seed::DEFAULT_SEED_COUNT)]
        count: usize,

        /// Path to the database file
        #[arg(short, long, default_value = "pantry.db")]
        db_path: String,
    },

    /// Print one page of ingredients
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: i64,

        /// Path to the database file
        #[arg(short, long, default_value = "pantry.db")]
        db_path: String,
    },
}
