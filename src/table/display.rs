//! The display surface: the table as it was last drawn.
//!
//! The surface is not derived on demand from the record set. It is the
//! materialized output of the last full render, and a few operations patch it
//! in place without re-rendering (a single-row delete removes its row, an edit
//! rewrites one cell). Readers always see exactly what the user sees.

/// Leading column holding the row checkbox.
pub const SELECT_COLUMN: &str = "Select";
/// Trailing column holding the per-row actions.
pub const ACTIONS_COLUMN: &str = "Actions";

/// One drawn row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Positional identity captured when the row was drawn.
    pub identity: usize,
    /// Cell text in field order, excluding the checkbox and actions columns.
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySurface {
    header: Option<Vec<String>>,
    rows: Vec<DisplayRow>,
    render_count: u64,
}

impl DisplaySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full header row: `Select`, the field names, then `Actions`.
    ///
    /// `None` until the first render that had at least one record to show.
    /// Once set it never changes, even if later data has other fields.
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Field names of the header, without the checkbox and actions columns.
    #[must_use]
    pub fn field_columns(&self) -> Option<&[String]> {
        self.header
            .as_deref()
            .and_then(|header| header.get(1..header.len().saturating_sub(1)))
    }

    #[must_use]
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn identities(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().map(|row| row.identity)
    }

    #[must_use]
    pub fn row_with_identity(&self, identity: usize) -> Option<&DisplayRow> {
        self.rows.iter().find(|row| row.identity == identity)
    }

    /// Number of full renders performed so far.
    #[must_use]
    pub const fn render_count(&self) -> u64 {
        self.render_count
    }

    pub(super) fn install_header_once<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.header.is_some() {
            return;
        }
        let mut header = vec![SELECT_COLUMN.to_string()];
        header.extend(fields.into_iter().map(Into::into));
        header.push(ACTIONS_COLUMN.to_string());

        tracing::debug!(columns = header.len(), "table header installed");
        self.header = Some(header);
    }

    pub(super) fn replace_rows(&mut self, rows: Vec<DisplayRow>) {
        self.rows = rows;
        self.render_count += 1;
    }

    /// Removes the first drawn row carrying `identity`.
    pub(super) fn remove_row(&mut self, identity: usize) -> bool {
        match self.rows.iter().position(|row| row.identity == identity) {
            Some(position) => {
                self.rows.remove(position);
                true
            }
            None => false,
        }
    }

    /// Rewrites one cell of the drawn row carrying `identity`.
    pub(super) fn update_cell(&mut self, identity: usize, column: usize, text: String) {
        if let Some(cell) = self
            .rows
            .iter_mut()
            .find(|row| row.identity == identity)
            .and_then(|row| row.cells.get_mut(column))
        {
            *cell = text;
        }
    }
}
