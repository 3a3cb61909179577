//! Audible feedback.
//!
//! Cues are fire-and-forget: a failed playback is logged and dropped, and
//! never reaches the engine.

use std::io::{self, Write};

/// Moments that get a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A mark was placed.
    Click,
    /// A round was won.
    Win,
    /// A round was drawn.
    Draw,
}

/// Something that can play a [`Cue`].
pub trait Chime {
    /// Plays `cue`.
    fn play(&mut self, cue: Cue) -> io::Result<()>;
}

/// Rings the terminal bell; twice for a win.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Chime for TerminalBell {
    fn play(&mut self, cue: Cue) -> io::Result<()> {
        let rings = match cue {
            Cue::Click | Cue::Draw => "\x07",
            Cue::Win => "\x07\x07",
        };
        let mut out = io::stdout();
        out.write_all(rings.as_bytes())?;
        out.flush()
    }
}

/// Plays nothing.
#[derive(Debug, Default)]
pub struct Silent;

impl Chime for Silent {
    fn play(&mut self, _cue: Cue) -> io::Result<()> {
        Ok(())
    }
}
