//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod config_cmd;
mod lookup;
mod score;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};

#[derive(Parser)]
#[command(name = "equipscout")]
#[command(about = "Find front photos and spec sheets for industrial equipment")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP lookup server
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT (default from config)
        bind: Option<String>,
    },

    /// Look up one piece of equipment and print the result as JSON
    Lookup {
        /// Equipment type, e.g. "EV Charger"
        #[arg(long)]
        equipment_type: String,
        /// Model number, e.g. "Terra 54"
        #[arg(long)]
        model_no: String,
        /// Manufacturer, e.g. "ABB"
        #[arg(long, default_value = "")]
        manufacturer: String,
        /// Voltage rating without unit, e.g. "480"
        #[arg(long, default_value = "")]
        voltage_rating: String,
        /// Identifier reported when no image is found
        #[arg(long)]
        id: Option<String>,
    },

    /// Rank local image files by frontality
    Score {
        /// Image files, in ranking order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective settings as JSON
    Show,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
    };
    let (settings, config) = load_settings_with_options(options).await?;

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.bind.clone());
            serve::cmd_serve(&settings, &bind).await
        }
        Commands::Lookup {
            equipment_type,
            model_no,
            manufacturer,
            voltage_rating,
            id,
        } => {
            let mut query =
                crate::models::EquipmentQuery::new(manufacturer, model_no, equipment_type, voltage_rating);
            query.id = id;
            lookup::cmd_lookup(&settings, query).await
        }
        Commands::Score { files } => score::cmd_score(&files).await,
        Commands::Config { command } => match command {
            ConfigCommands::Show => config_cmd::cmd_config_show(&settings, &config),
        },
    }
}
