//! triviaquiz CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "triviaquiz",
    version,
    about = "Ten-question trivia quiz in your terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz (the default)
    Play {
        /// Question endpoint URL (overrides config)
        #[arg(long)]
        endpoint: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Fetch one question set and print it as JSON
    Fetch {
        /// Question endpoint URL (overrides config)
        #[arg(long)]
        endpoint: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

/// `RUST_LOG` plus warnings from the triviaquiz crates.
fn log_filter() -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match "triviaquiz=warn".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::play::execute(None, None).await,
        Some(Commands::Play { endpoint, config }) => {
            commands::play::execute(endpoint, config).await
        }
        Some(Commands::Fetch { endpoint, config }) => {
            commands::fetch::execute(endpoint, config).await
        }
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
