//! nihongo CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "nihongo", version, about = "Japanese verb vocabulary trainer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a quiz session (type 'q' to quit)
    Quiz {
        /// Path to the vocabulary JSON file
        #[arg(long)]
        vocab: Option<PathBuf>,

        /// Language tag: "de-DE" for German, anything else for English
        #[arg(long)]
        lang: Option<String>,

        /// Seed for reproducible entry/direction selection
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the vocabulary as an aligned table
    Table {
        /// Path to the vocabulary JSON file
        #[arg(long)]
        vocab: Option<PathBuf>,

        /// Language tag for the translation column
        #[arg(long)]
        lang: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a vocabulary file
    Validate {
        /// Path to the vocabulary JSON file
        #[arg(long)]
        vocab: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example vocabulary
    Init,
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nihongo_core=warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Quiz {
            vocab,
            lang,
            seed,
            config,
        } => commands::quiz::execute(vocab, lang, seed, config),
        Commands::Table {
            vocab,
            lang,
            config,
        } => commands::table::execute(vocab, lang, config),
        Commands::Validate { vocab, config } => commands::validate::execute(vocab, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
