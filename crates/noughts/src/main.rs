//! Noughts - unified CLI.

use anyhow::Result;
use clap::Parser;
use noughts::{AppConfig, Cli, Command, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command() {
        Command::Play {
            player_x,
            player_o,
            mute,
        } => {
            let config = config.with_overrides(player_x, player_o, mute);
            logging::init_file(config.log_file())?;
            tui::run(&config)
        }
        Command::Replay {
            moves,
            player_x,
            player_o,
            json,
        } => {
            logging::init_stderr();
            let config = config.with_overrides(player_x, player_o, false);
            info!(moves = moves.len(), "Replaying moves");
            let report = replay(
                config.player_x().as_deref(),
                config.player_o().as_deref(),
                &moves,
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }
            Ok(())
        }
    }
}
