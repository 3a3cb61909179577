//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_engine::Position;
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML config file (defaults to ./noughts.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Name for X (skips the name form when both names are given)
        #[arg(long)]
        player_x: Option<String>,

        /// Name for O
        #[arg(long)]
        player_o: Option<String>,

        /// Disable the terminal bell
        #[arg(long)]
        mute: bool,
    },

    /// Play a fixed sequence of cells and print the result
    Replay {
        /// Cells in play order, as indices (0-8) or labels such as `center`
        #[arg(required = true, value_parser = parse_move)]
        moves: Vec<usize>,

        /// Name for X
        #[arg(long)]
        player_x: Option<String>,

        /// Name for O
        #[arg(long)]
        player_o: Option<String>,

        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The chosen command, with `play` as the default.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            player_x: None,
            player_o: None,
            mute: false,
        })
    }
}

/// Parses a replay move: a cell label, or any index.
///
/// Out-of-range indices are kept so the engine can report them as ignored.
fn parse_move(s: &str) -> Result<usize, String> {
    Position::from_label_or_number(s)
        .map(Position::to_index)
        .or_else(|| s.trim().parse().ok())
        .ok_or_else(|| format!("'{s}' is not a cell index or label"))
}
