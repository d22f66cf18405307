//! The edit prompt.
//!
//! Editing a row walks every field name of the record set's first record, one
//! prompt at a time. Each prompt starts out holding the text currently drawn
//! in that cell. Committing a prompt writes the buffer into the record and the
//! drawn cell; cancelling it skips just that field.

use crate::table::TableState;

/// State of an open edit prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Identity of the row being edited.
    pub identity: usize,
    /// Position of the edited row on the display surface.
    pub row: usize,
    fields: Vec<String>,
    current: usize,
    /// Text of the prompt being answered.
    pub buffer: String,
}

impl EditSession {
    /// Opens a session for the drawn row at position `row`.
    ///
    /// Returns `None` when there is no such row or the record set has no
    /// fields to edit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use admintable::app::edit::EditSession;
    /// use admintable::domain::Record;
    /// use admintable::table::TableState;
    ///
    /// let mut table = TableState::new();
    /// table.load(vec![Record::from_pairs([("id", "1"), ("name", "Aaron")])]);
    ///
    /// let session = EditSession::begin(&table, 0).unwrap();
    /// assert_eq!(session.field(), "id");
    /// assert_eq!(session.buffer, "1");
    /// ```
    #[must_use]
    pub fn begin(table: &TableState, row: usize) -> Option<Self> {
        let identity = table.display().rows().get(row)?.identity;
        let fields = table.field_names();
        if fields.is_empty() {
            return None;
        }

        let mut session = Self {
            identity,
            row,
            fields,
            current: 0,
            buffer: String::new(),
        };
        session.buffer = session.drawn_text(table);
        Some(session)
    }

    /// Field name the current prompt is for.
    #[must_use]
    pub fn field(&self) -> &str {
        self.fields.get(self.current).map_or("", String::as_str)
    }

    /// One-based position of the current prompt and the prompt count.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.fields.len())
    }

    /// Moves to the next field, pre-filling its buffer from the drawn row.
    ///
    /// Returns `false` once every field has been prompted.
    pub fn advance(&mut self, table: &TableState) -> bool {
        self.current += 1;
        if self.current >= self.fields.len() {
            return false;
        }
        self.buffer = self.drawn_text(table);
        true
    }

    fn drawn_text(&self, table: &TableState) -> String {
        table
            .display()
            .row_with_identity(self.identity)
            .and_then(|row| row.cells.get(self.current))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;

    fn table() -> TableState {
        let mut table = TableState::new();
        table.load(vec![
            Record::from_pairs([("id", "1"), ("name", "Aaron"), ("role", "member")]),
            Record::from_pairs([("id", "2"), ("name", "Arvind"), ("role", "admin")]),
        ]);
        table
    }

    #[test]
    fn walks_every_field_with_drawn_text() {
        let table = table();
        let mut session = EditSession::begin(&table, 1).unwrap();

        assert_eq!(session.identity, 1);
        assert_eq!((session.field(), session.buffer.as_str()), ("id", "2"));
        assert!(session.advance(&table));
        assert_eq!((session.field(), session.buffer.as_str()), ("name", "Arvind"));
        assert!(session.advance(&table));
        assert_eq!(session.progress(), (3, 3));
        assert!(!session.advance(&table));
    }

    #[test]
    fn no_session_without_a_drawn_row() {
        let table = table();
        assert!(EditSession::begin(&table, 5).is_none());
    }
}
