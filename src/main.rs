//! Reversi engine CLI
//!
//! Runs the text demos: listing every action from a position, playing
//! first-legal moves to the end, engine self-play, and a single best-move
//! query.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use reversi::{demo, AIEngine, GameConfig, Pos};

#[derive(Parser)]
#[command(name = "reversi")]
#[command(version, about = "Reversi engine with minimax search", long_about = None)]
struct Cli {
    /// JSON config file; command-line flags take precedence
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log search details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Advance to a disk count, then show every legal action from there
    DisplayAllActions {
        /// Disks on the board before listing actions
        #[arg(long)]
        disks: Option<usize>,
    },

    /// Play first legal moves, printing the first few boards
    Methodical {
        /// Boards to print before finishing the game
        #[arg(long)]
        shown: Option<usize>,
    },

    /// Engine plays both sides to the end
    #[command(aliases = ["h", "H"])]
    Ai {
        /// Search depth in plies
        #[arg(long)]
        ahead: Option<u8>,
    },

    /// Replay moves and print the engine's choice
    BestMove {
        /// Moves as "row,col", separated by spaces
        #[arg(long, value_delimiter = ' ')]
        moves: Vec<Pos>,

        /// Search depth in plies
        #[arg(long)]
        depth: Option<u8>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::DisplayAllActions { disks } => {
            if let Some(disks) = disks {
                config.display_all_actions_disks = disks;
            }
            config.validate()?;
            demo::display_all_actions(&mut out, config.display_all_actions_disks)?;
        }
        Commands::Methodical { shown } => {
            if let Some(shown) = shown {
                config.methodical_shown_moves = shown;
            }
            config.validate()?;
            demo::methodical(&mut out, config.methodical_shown_moves)?;
        }
        Commands::Ai { ahead } => {
            if let Some(ahead) = ahead {
                config.search_depth = ahead;
            }
            config.validate()?;
            let mut engine = AIEngine::from_config(&config);
            demo::ai_game(&mut out, &mut engine)?;
        }
        Commands::BestMove { moves, depth } => {
            if let Some(depth) = depth {
                config.search_depth = depth;
            }
            config.validate()?;
            let mut engine = AIEngine::from_config(&config);
            demo::best_move(&mut out, &mut engine, &moves)?;
        }
    }

    out.flush().context("flushing output")?;
    Ok(())
}
