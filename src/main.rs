use anyhow::Result;
use cartograph::commands;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "carto",
    version = cartograph::VERSION,
    about = "Repository mapping and change detection",
    long_about = "Tracks which files changed since the last checkpoint using content hashes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize mapping: create the baseline snapshot and codemap stubs
    Init {
        /// Repository root path
        #[arg(long)]
        root: PathBuf,

        /// Glob patterns for files to include (repeatable)
        #[arg(long = "include")]
        include: Vec<String>,

        /// Glob patterns for files to exclude (repeatable)
        #[arg(long = "exclude")]
        exclude: Vec<String>,

        /// Literal file paths to include despite exclusions (repeatable)
        #[arg(long = "exception")]
        exception: Vec<String>,
    },

    /// Show what changed since the last checkpoint (read-only)
    Changes {
        /// Repository root path
        #[arg(long)]
        root: PathBuf,
    },

    /// Recompute hashes and commit them as the new baseline
    Update {
        /// Repository root path
        #[arg(long)]
        root: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            root,
            include,
            exclude,
            exception,
        } => commands::init::execute(&root, include, exclude, exception),
        Commands::Changes { root } => commands::changes::execute(&root),
        Commands::Update { root } => commands::update::execute(&root),
    }
}
