//! Application state management and view model computation.
//!
//! [`AppState`] wraps the table engine with everything that only exists
//! because the table lives in a terminal pane: the input mode, the text in the
//! search box, the row cursor, the theme and the data-source status.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` projects the state into a [`UIViewModel`] sized for the
//! pane. Column widths are shared out across the terminal width and cell text
//! is truncated to fit, so the renderer only has to paint.
//!
//! # Example
//!
//! ```rust
//! use admintable::app::AppState;
//! use admintable::domain::Record;
//! use admintable::ui::theme::Theme;
//!
//! let mut state = AppState::new("https://example.com/members.json", Theme::default());
//! state.load_dataset(vec![Record::from_pairs([("id", "1"), ("name", "Aaron")])]);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.table.map(|t| t.rows.len()), Some(1));
//! ```

use super::edit::EditSession;
use super::modes::InputMode;
use crate::domain::Record;
use crate::table::{TableState, ACTIONS_COLUMN, SELECT_COLUMN};
use crate::ui::helpers::{fit, fit_widths, match_ranges};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnInfo, EmptyState, FooterInfo, HeaderInfo, PageControlItem, PaginationInfo, PromptInfo,
    RowItem, SearchBarInfo, TableView, UIViewModel,
};
use chrono::{DateTime, Utc};

/// Text drawn in the actions column of every row.
pub const ACTIONS_LABEL: &str = "Edit Delete";

/// Width of the checkbox column.
const SELECT_WIDTH: usize = SELECT_COLUMN.len();

/// Where the dataset is in its one-shot lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetStatus {
    /// Waiting for permission or for the response.
    Pending,
    /// The response was decoded and loaded into the table.
    Loaded {
        /// Record count at load time.
        count: usize,
        /// When the records were loaded.
        loaded_at: DateTime<Utc>,
    },
    /// The fetch or the decode failed. The table stays empty.
    Failed,
}

/// Central application state container.
///
/// Mutated by the event handler only. View models are computed on demand from
/// a shared borrow.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The table engine.
    pub table: TableState,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Text in the search box.
    ///
    /// Survives focus changes; only submitting it filters the table.
    pub search_input: String,

    /// The search term that produced the current filtered view.
    ///
    /// Empty when the filtered view mirrors the record set. Drives match
    /// highlighting.
    pub active_search: String,

    /// Position of the row cursor on the display surface.
    pub cursor: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Data-source endpoint.
    pub endpoint: String,

    /// Data-source lifecycle.
    pub dataset: DatasetStatus,
}

impl AppState {
    /// Creates an empty state that has not fetched anything yet.
    ///
    /// # Parameters
    ///
    /// * `endpoint` - URL to fetch the dataset from once permission is granted
    /// * `theme` - Color scheme for UI rendering
    #[must_use]
    pub fn new(endpoint: impl Into<String>, theme: Theme) -> Self {
        Self {
            table: TableState::new(),
            input_mode: InputMode::Normal,
            search_input: String::new(),
            active_search: String::new(),
            cursor: 0,
            theme,
            endpoint: endpoint.into(),
            dataset: DatasetStatus::Pending,
        }
    }

    /// Loads decoded records into the table and records the load time.
    pub fn load_dataset(&mut self, records: Vec<Record>) {
        let count = records.len();
        self.table.load(records);
        self.active_search.clear();
        self.cursor = 0;
        self.dataset = DatasetStatus::Loaded {
            count,
            loaded_at: Utc::now(),
        };
    }

    /// Moves the row cursor down, wrapping to the first row.
    pub fn move_cursor_down(&mut self) {
        let rows = self.table.display().rows().len();
        if rows == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % rows;
    }

    /// Moves the row cursor up, wrapping to the last row.
    pub fn move_cursor_up(&mut self) {
        let rows = self.table.display().rows().len();
        if rows == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { rows - 1 } else { self.cursor - 1 };
    }

    /// Keeps the cursor on a drawn row.
    pub fn clamp_cursor(&mut self) {
        let rows = self.table.display().rows().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    /// Identity of the drawn row under the cursor.
    #[must_use]
    pub fn cursor_identity(&self) -> Option<usize> {
        self.table
            .display()
            .rows()
            .get(self.cursor)
            .map(|row| row.identity)
    }

    /// Opens the edit prompt on the row under the cursor.
    ///
    /// Returns `false` if there is nothing to edit.
    pub fn begin_edit(&mut self) -> bool {
        match EditSession::begin(&self.table, self.cursor) {
            Some(session) => {
                tracing::debug!(
                    identity = session.identity,
                    fields = session.progress().1,
                    "edit started"
                );
                self.input_mode = InputMode::Editing(session);
                true
            }
            None => false,
        }
    }

    /// Answers the current edit prompt and moves on to the next field.
    ///
    /// With `commit` the buffer is written, otherwise only this field is
    /// skipped. The session ends after the last field, or at once if the
    /// record can no longer be found.
    pub fn resolve_edit(&mut self, commit: bool) {
        let InputMode::Editing(session) = &mut self.input_mode else {
            return;
        };

        let field = session.field().to_string();
        let value = commit.then(|| std::mem::take(&mut session.buffer));

        if let Err(e) = self.table.edit_field(session.identity, &field, value) {
            tracing::warn!(error = %e, field = %field, "edit aborted");
            self.input_mode = InputMode::Normal;
            return;
        }

        if !session.advance(&self.table) {
            tracing::debug!(identity = session.identity, "edit finished");
            self.input_mode = InputMode::Normal;
        }
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    ///
    /// # Returns
    ///
    /// A [`UIViewModel`]. `table` is `None` until the first render that had
    /// records to show, and `empty_state` is set whenever no row is drawn.
    #[must_use]
    pub fn compute_viewmodel(&self, _rows: usize, cols: usize) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            table: self.compute_table(cols),
            pagination: self.compute_pagination(),
            prompt: self.compute_prompt(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let selected = self.table.selection().len();
        let title = format!(
            " Admin Table ({} records, {selected} selected) ",
            self.table.len()
        );

        let status = match &self.dataset {
            DatasetStatus::Pending => "loading...".to_string(),
            DatasetStatus::Loaded { count, loaded_at } => {
                format!("{count} fetched at {} UTC", loaded_at.format("%H:%M:%S"))
            }
            DatasetStatus::Failed => String::new(),
        };

        HeaderInfo { title, status }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.search_input.clone(),
            focused: matches!(self.input_mode, InputMode::Search),
        }
    }

    fn compute_table(&self, cols: usize) -> Option<TableView> {
        let display = self.table.display();
        let fields = display.field_columns()?;

        let natural: Vec<usize> = fields
            .iter()
            .enumerate()
            .map(|(column, title)| {
                display
                    .rows()
                    .iter()
                    .filter_map(|row| row.cells.get(column))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(title.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        // One space between each pair of columns.
        let chrome = SELECT_WIDTH + ACTIONS_LABEL.len() + fields.len() + 1;
        let widths = fit_widths(&natural, cols.saturating_sub(chrome));

        let mut columns = vec![ColumnInfo {
            title: SELECT_COLUMN.to_string(),
            width: SELECT_WIDTH,
        }];
        columns.extend(fields.iter().zip(&widths).map(|(title, &width)| ColumnInfo {
            title: fit(title, width),
            width,
        }));
        columns.push(ColumnInfo {
            title: ACTIONS_COLUMN.to_string(),
            width: ACTIONS_LABEL.len(),
        });

        let lowered = self.active_search.to_lowercase();
        let rows = display
            .rows()
            .iter()
            .enumerate()
            .map(|(position, row)| {
                let cells: Vec<String> = widths
                    .iter()
                    .enumerate()
                    .map(|(column, &width)| {
                        fit(row.cells.get(column).map_or("", String::as_str), width)
                    })
                    .collect();
                let highlight_ranges = cells
                    .iter()
                    .map(|cell| match_ranges(cell, &lowered))
                    .collect();

                RowItem {
                    identity: row.identity,
                    checked: self.table.is_selected(row.identity),
                    is_cursor: position == self.cursor
                        && !matches!(self.input_mode, InputMode::Search),
                    cells,
                    highlight_ranges,
                }
            })
            .collect();

        Some(TableView {
            columns,
            select_all: self.table.select_all_checked(),
            rows,
        })
    }

    fn compute_pagination(&self) -> PaginationInfo {
        let window = self.table.page_window();
        PaginationInfo {
            controls: self
                .table
                .page_controls()
                .into_iter()
                .map(|control| PageControlItem {
                    label: control.label,
                    active: control.active,
                })
                .collect(),
            summary: format!("Page {} of {}", window.current_page, window.total_pages),
        }
    }

    fn compute_prompt(&self) -> Option<PromptInfo> {
        let InputMode::Editing(session) = &self.input_mode else {
            return None;
        };
        let (current, total) = session.progress();
        Some(PromptInfo {
            label: format!("Edit {}:", session.field()),
            buffer: session.buffer.clone(),
            progress: format!("{current}/{total}"),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "j/k: move  space: select  a: all  e: edit  x: delete  D: delete selected  B: delete page  g/h/l/G 1-9: page  /: search  q: quit"
            }
            InputMode::Search => "Type to edit  Enter: search  ESC: back to table",
            InputMode::Editing(_) => "Enter: save field  ESC: skip field",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.table.display().rows().is_empty() {
            return None;
        }

        let subtitle = if self.dataset == DatasetStatus::Pending {
            "Waiting for the data source".to_string()
        } else if self.table.filtered_len() > 0 {
            "Every row on this page was deleted, change page to redraw".to_string()
        } else if !self.active_search.is_empty() {
            format!("Nothing matches \"{}\"", self.active_search)
        } else {
            "The record set is empty".to_string()
        };

        Some(EmptyState {
            message: "No records".to_string(),
            subtitle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| {
                Record::from_pairs([
                    ("id", i.to_string()),
                    ("name", format!("Member {i}")),
                    ("email", format!("member{i}@mailinator.com")),
                    ("role", "member".to_string()),
                ])
            })
            .collect()
    }

    fn loaded(n: usize) -> AppState {
        let mut state = AppState::new("http://localhost", Theme::default());
        state.load_dataset(members(n));
        state
    }

    #[test]
    fn cursor_wraps_within_drawn_rows() {
        let mut state = loaded(3);

        state.move_cursor_up();
        assert_eq!(state.cursor, 2);
        state.move_cursor_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn pending_state_has_no_table() {
        let state = AppState::new("http://localhost", Theme::default());
        let vm = state.compute_viewmodel(24, 80);

        assert!(vm.table.is_none());
        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.message, "No records");
        assert_eq!(vm.header.status, "loading...");
    }

    #[test]
    fn columns_fit_terminal_width() {
        let state = loaded(12);
        let vm = state.compute_viewmodel(24, 60);
        let table = vm.table.unwrap();

        let total: usize = table.columns.iter().map(|c| c.width).sum::<usize>()
            + table.columns.len()
            - 1;
        assert!(total <= 60, "{total}");
        assert_eq!(table.columns.first().map(|c| c.title.as_str()), Some("Select"));
        assert_eq!(table.columns.last().map(|c| c.title.as_str()), Some("Actions"));
        assert_eq!(table.rows.len(), 10);
    }

    #[test]
    fn checked_rows_follow_selection() {
        let mut state = loaded(5);
        state.table.toggle(3);

        let table = state.compute_viewmodel(24, 120).table.unwrap();
        let checked: Vec<usize> = table
            .rows
            .iter()
            .filter(|r| r.checked)
            .map(|r| r.identity)
            .collect();
        assert_eq!(checked, vec![3]);
    }

    #[test]
    fn edit_cancel_then_commit_updates_only_committed_field() {
        let mut state = loaded(2);
        state.cursor = 1;
        assert!(state.begin_edit());

        state.resolve_edit(false); // id
        if let InputMode::Editing(session) = &mut state.input_mode {
            session.buffer = "Renamed".to_string();
        }
        state.resolve_edit(true); // name
        state.resolve_edit(false); // email
        state.resolve_edit(false); // role

        assert_eq!(state.input_mode, InputMode::Normal);
        let record = state.table.record(1).unwrap();
        assert_eq!(record.get("name").map(ToString::to_string).as_deref(), Some("Renamed"));
        assert_eq!(record.get("id").map(ToString::to_string).as_deref(), Some("1"));
        assert_eq!(state.table.display().rows()[1].cells[1], "Renamed");
    }

    #[test]
    fn empty_state_names_the_unmatched_term() {
        let mut state = loaded(5);
        state.table.search("zzz");
        state.active_search = "zzz".to_string();

        let empty = state.compute_viewmodel(24, 80).empty_state.unwrap();
        assert_eq!(empty.subtitle, "Nothing matches \"zzz\"");
    }
}
