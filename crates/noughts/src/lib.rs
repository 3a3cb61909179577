//! Noughts - two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Engine**: the pure round state machine lives in `noughts_engine`
//! - **TUI**: ratatui front-end that feeds key presses to the engine
//! - **Replay**: headless playback of a fixed move list
//! - **Config**: TOML file plus command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod logging;
pub mod messages;
mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILE};
pub use replay::{ReplayReport, ReplayStep, replay};
