//! Input mode state machine.
//!
//! The plugin is always in exactly one of three modes, which decides how a key
//! press is interpreted:
//!
//! - **Normal**: The table has focus. Keys navigate, select and mutate rows.
//! - **Search**: The search box has focus. Keys edit the search text.
//! - **Editing**: A modal prompt is open for one field of one row.
//!
//! # Example
//!
//! ```rust
//! use admintable::app::modes::InputMode;
//!
//! let mode = InputMode::Search;
//! assert!(mode.accepts_text());
//! assert!(!InputMode::Normal.accepts_text());
//! ```

use super::edit::EditSession;

/// Current input handling mode.
///
/// Controls which keybindings are active and which footer hint is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Table focus.
    ///
    /// Available keybindings: j/k (cursor), space (toggle), a (select all),
    /// e (edit), x (delete), D (delete selected), B (bulk delete page),
    /// g/h/l/G and 1-9 (pages), / (search), q (quit).
    #[default]
    Normal,

    /// Search box focus.
    ///
    /// Typed characters go into the search text. Enter submits it, Esc gives
    /// focus back to the table without searching.
    Search,

    /// An edit prompt is open.
    ///
    /// Carries the [`EditSession`] walking the fields of the edited row.
    Editing(EditSession),
}

impl InputMode {
    /// Whether printable keys are routed to a text buffer in this mode.
    #[must_use]
    pub const fn accepts_text(&self) -> bool {
        matches!(self, Self::Search | Self::Editing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;
    use crate::table::TableState;

    #[test]
    fn edit_prompt_takes_typed_keys() {
        let mut table = TableState::new();
        table.load(vec![Record::from_pairs([("id", "1")])]);
        let session = EditSession::begin(&table, 0).unwrap();

        assert!(InputMode::Editing(session).accepts_text());
        assert!(!InputMode::default().accepts_text());
    }
}
