//! Noughts engine - a pure tic-tac-toe round state machine.
//!
//! The engine tracks the board, whose turn it is, the round phase, the
//! running score and the player names. It never renders, plays sounds or
//! reads input; front-ends call it and observe the result.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameEngine, MoveOutcome, Player, StartRound};
//!
//! let mut engine = GameEngine::new();
//! assert_eq!(engine.start_round(), StartRound::NamesRequired);
//!
//! engine.configure_names("Ann", "Bo");
//! assert_eq!(engine.start_round(), StartRound::Started);
//!
//! for index in [0, 3, 1, 4] {
//!     engine.place_mark(index);
//! }
//! match engine.place_mark(2) {
//!     MoveOutcome::Win { winner, .. } => assert_eq!(winner, Player::X),
//!     other => panic!("expected a win, got {other:?}"),
//! }
//! assert_eq!(engine.scores().get(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod events;
pub mod invariants;
mod names;
mod outcome;
mod position;
mod round;
pub mod rules;
mod scores;
mod types;

pub use engine::GameEngine;
pub use events::{EngineReply, InputEvent};
pub use names::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerNames};
pub use outcome::{IgnoredMove, MoveOutcome, StartRound};
pub use position::Position;
pub use round::RoundState;
pub use rules::{Evaluation, WIN_LINES, WinLine};
pub use scores::Scoreboard;
pub use types::{Board, Player, Square};
