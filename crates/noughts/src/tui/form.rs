//! Name-entry form.

use noughts_engine::{Player, PlayerNames};

/// Longest name the form accepts.
pub const MAX_NAME_LEN: usize = 24;

/// Two text fields for the players' names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameForm {
    first: String,
    second: String,
    focus: Player,
}

impl NameForm {
    /// Opens the form prefilled with the current names, X focused.
    pub fn prefilled(names: &PlayerNames) -> Self {
        Self {
            first: names.get(Player::X).to_string(),
            second: names.get(Player::O).to_string(),
            focus: Player::X,
        }
    }

    /// Field being edited.
    pub fn focus(&self) -> Player {
        self.focus
    }

    /// Current text for `player`.
    pub fn value(&self, player: Player) -> &str {
        match player {
            Player::X => &self.first,
            Player::O => &self.second,
        }
    }

    /// Moves focus to the other field.
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.opponent();
    }

    /// Appends a character to the focused field.
    pub fn push(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let field = self.field_mut();
        if field.chars().count() < MAX_NAME_LEN {
            field.push(c);
        }
    }

    /// Deletes the last character of the focused field.
    pub fn pop(&mut self) {
        self.field_mut().pop();
    }

    /// Consumes the form, returning raw (unsanitized) names.
    pub fn into_values(self) -> (String, String) {
        (self.first, self.second)
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            Player::X => &mut self.first,
            Player::O => &mut self.second,
        }
    }
}
