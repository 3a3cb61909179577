//! Terminal UI for noughts.

mod app;
mod form;
mod input;
mod sound;
mod ui;

pub use app::{App, Control, LABEL_PLAY_AGAIN, LABEL_RESTART, LABEL_START, Mode};
pub use form::{MAX_NAME_LEN, NameForm};
pub use sound::{Chime, Cue, Silent, TerminalBell};

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Runs the interactive game until the player quits.
#[instrument(skip_all, fields(sound = *config.sound()))]
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Starting noughts TUI");

    let chime: Box<dyn Chime> = if *config.sound() {
        Box::new(TerminalBell)
    } else {
        Box::new(Silent)
    };
    let mut app = App::new(config.preset_names(), chime);

    enable_raw_mode()?;
    let mut terminal = undo_on_error(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        restore_terminal,
    )?;

    let res = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Runs `setup`, calling `undo` before returning its error.
fn undo_on_error<T>(setup: impl FnOnce() -> Result<T>, undo: impl FnOnce()) -> Result<T> {
    let res = setup();
    if res.is_err() {
        undo();
    }
    res
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to leave raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && app.handle_key(key) == Control::Quit
        {
            return Ok(());
        }
    }
}
