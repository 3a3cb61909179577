//! Application state and logic.
//!
//! `App` turns key presses into engine events and keeps the text the screen
//! shows. It never touches the terminal, so it can be driven directly in
//! tests.

use super::form::NameForm;
use super::input::{Action, board_action, move_cursor};
use super::sound::{Chime, Cue};
use crate::messages;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use noughts_engine::{EngineReply, GameEngine, InputEvent, MoveOutcome, Position, WinLine};
use tracing::{debug, info, instrument};

/// Start-button label before any round.
pub const LABEL_START: &str = "Start";
/// Start-button label during a round.
pub const LABEL_RESTART: &str = "Restart Round";
/// Start-button label after a round ends.
pub const LABEL_PLAY_AGAIN: &str = "Play Again";

/// Which screen has the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// The board.
    Board,
    /// The name form, drawn over the board.
    NameEntry(NameForm),
}

/// Whether the main loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    mode: Mode,
    status: String,
    button: &'static str,
    winning_line: Option<WinLine>,
    chime: Box<dyn Chime>,
}

impl App {
    /// Creates the app with an inactive round.
    ///
    /// With preset names the name form is never shown.
    pub fn new(preset_names: Option<(&str, &str)>, chime: Box<dyn Chime>) -> Self {
        let mut engine = GameEngine::new();
        if let Some((x, o)) = preset_names {
            engine.configure_names(x, o);
        }
        Self {
            engine,
            cursor: Position::Center,
            mode: Mode::Board,
            status: messages::IDLE.to_string(),
            button: LABEL_START,
            winning_line: None,
            chime,
        }
    }

    /// The engine, for rendering.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Active screen.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Label of the start/restart control.
    pub fn button(&self) -> &'static str {
        self.button
    }

    /// Line to highlight after a win.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        if matches!(self.mode, Mode::NameEntry(_)) {
            self.handle_form_key(key.code);
            return Control::Continue;
        }
        match board_action(key) {
            Some(Action::Quit) => {
                info!("User quit");
                return Control::Quit;
            }
            Some(Action::Cursor(code)) => self.cursor = move_cursor(self.cursor, code),
            Some(Action::PlaceAtCursor) => self.select(self.cursor.to_index()),
            Some(Action::Place(index)) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.select(index);
            }
            Some(Action::Start) => self.request_start(),
            Some(Action::ResetScores) => self.reset_scores(),
            None => {}
        }
        Control::Continue
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        let Mode::NameEntry(form) = &mut self.mode else {
            return;
        };
        match code {
            KeyCode::Esc => {
                debug!("Name form dismissed");
                self.mode = Mode::Board;
            }
            KeyCode::Enter => {
                let Mode::NameEntry(form) = std::mem::replace(&mut self.mode, Mode::Board)
                else {
                    return;
                };
                let (first, second) = form.into_values();
                let reply = self.engine.handle(InputEvent::NamesSubmitted { first, second });
                self.on_reply(reply);
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_focus(),
            KeyCode::Backspace => form.pop(),
            KeyCode::Char(c) => form.push(c),
            _ => {}
        }
    }

    /// Asks the engine for a new round, opening the name form if needed.
    pub fn request_start(&mut self) {
        let reply = self.engine.handle(InputEvent::RoundStartRequested);
        self.on_reply(reply);
    }

    /// Zeroes scores and starts a fresh round.
    pub fn reset_scores(&mut self) {
        let reply = self.engine.handle(InputEvent::ScoresResetRequested);
        self.on_reply(reply);
    }

    /// Places the current mark at `index`.
    pub fn select(&mut self, index: usize) {
        let reply = self.engine.handle(InputEvent::CellSelected(index));
        self.on_reply(reply);
    }

    fn on_reply(&mut self, reply: EngineReply) {
        match reply {
            EngineReply::NamesRequired => {
                self.mode = Mode::NameEntry(NameForm::prefilled(self.engine.names()));
            }
            EngineReply::RoundStarted => {
                self.fresh_round();
                self.status = messages::turn(&self.engine, self.engine.current_player());
            }
            EngineReply::ScoresReset => {
                self.fresh_round();
                self.status = messages::scores_reset(&self.engine);
            }
            EngineReply::Move(outcome) => self.on_move(outcome),
        }
    }

    fn on_move(&mut self, outcome: MoveOutcome) {
        if !outcome.is_applied() {
            return;
        }
        self.cue(Cue::Click);
        match outcome {
            MoveOutcome::Win { winner, line } => {
                self.winning_line = Some(line);
                self.status = messages::win(&self.engine, winner);
                self.button = LABEL_PLAY_AGAIN;
                self.cue(Cue::Win);
            }
            MoveOutcome::Draw => {
                self.status = messages::DRAW.to_string();
                self.button = LABEL_PLAY_AGAIN;
                self.cue(Cue::Draw);
            }
            MoveOutcome::Ongoing { next_player } => {
                self.status = messages::turn(&self.engine, next_player);
            }
            MoveOutcome::Ignored(_) => {}
        }
    }

    fn fresh_round(&mut self) {
        self.winning_line = None;
        self.button = LABEL_RESTART;
    }

    fn cue(&mut self, cue: Cue) {
        if let Err(e) = self.chime.play(cue) {
            debug!(error = %e, ?cue, "Cue playback failed");
        }
    }
}
