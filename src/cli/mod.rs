pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "norfab")]
#[command(about = "Norfab CLI - back-office tooling for the site backend")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Load a YAML content pack into the database")]
    Seed {
        #[arg(long, help = "Path to the seed file")]
        file: PathBuf,
    },

    #[command(about = "Probe a running server's health endpoint")]
    Health {
        #[arg(long, default_value = "http://127.0.0.1:8080", help = "Server base URL")]
        url: String,
    },

    #[command(about = "Print the SHA-256 digest for ADMIN_PASSWORD_SHA256")]
    Password {
        #[arg(help = "Plaintext password to digest")]
        plaintext: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Seed { file } => commands::seed::handle(file, output_format).await,
        Commands::Health { url } => commands::health::handle(url, output_format).await,
        Commands::Password { plaintext } => commands::password::handle(&plaintext, output_format),
    }
}
