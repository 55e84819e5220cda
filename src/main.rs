//! puzterm - CLI
//!
//! Terminal crossword solver with a TUI for playing and plain commands for
//! inspecting `.puz` files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use puzterm::{
    commands::{GridSource, grid_view, summarize},
    config::Config,
    interactive::{App, run_tui},
    logging,
    output::{print_grid, print_puzzle_info},
    puzzle::{self, Puzzle, loader::load_from_file},
};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Parser)]
#[command(
    name = "puzterm",
    about = "Solve Across Lite (.puz) crosswords in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. 'debug' or 'puzterm=trace' (RUST_LOG wins)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle interactively (default; plays a built-in sample without a file)
    Play {
        /// Path to a .puz file
        path: Option<PathBuf>,
    },

    /// Print a puzzle's metadata and clues
    Info {
        /// Path to a .puz file
        path: PathBuf,
    },

    /// Print a puzzle's grid
    Show {
        /// Path to a .puz file
        path: PathBuf,

        /// Show the solution instead of the saved progress
        #[arg(short, long)]
        solution: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(Config::default_config_path);
    let (config, config_error) = Config::load_or_default(&config_path);
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());

    // Logging is best effort; keep the guard alive until exit
    let _guard = match logging::init(&level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    if let Some(e) = config_error {
        warn!("{e}; using default configuration");
        eprintln!("Warning: {e}; using default configuration");
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { path: None });

    match command {
        Commands::Play { path } => run_play_command(path.as_deref(), config, config_path),
        Commands::Info { path } => run_info_command(&path),
        Commands::Show { path, solution } => run_show_command(&path, solution),
    }
}

fn load(path: &Path) -> Result<Puzzle> {
    load_from_file(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn run_play_command(path: Option<&Path>, config: Config, config_path: PathBuf) -> Result<()> {
    let puzzle = match path {
        Some(path) => load(path)?,
        None => puzzle::sample(),
    };
    let app = App::new(puzzle, config, config_path)?;
    run_tui(app)
}

fn run_info_command(path: &Path) -> Result<()> {
    let puzzle = load(path)?;
    let summary = summarize(&puzzle)?;
    print_puzzle_info(&summary);
    Ok(())
}

fn run_show_command(path: &Path, solution: bool) -> Result<()> {
    let puzzle = load(path)?;
    let source = if solution {
        GridSource::Solution
    } else {
        GridSource::State
    };
    print_grid(&grid_view(&puzzle, source)?);
    Ok(())
}
