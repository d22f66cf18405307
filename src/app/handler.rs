//! Event handling and state transition logic.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin shim (decoded keys, web results)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `TableState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Data source**: `PermissionsResult`, `DatasetLoaded`, `DatasetFailed`
//! - **Cursor**: `CursorUp`, `CursorDown`
//! - **Search box**: `SearchMode`, `SubmitSearch`, `ExitSearch`, `Char`, `Backspace`
//! - **Selection**: `ToggleRow`, `ToggleSelectAll`
//! - **Mutation**: `EditRow`, `EditCommit`, `EditCancel`, `DeleteRow`,
//!   `DeleteSelected`, `BulkDeletePage`
//! - **Pagination**: `Page`, `PageNumber`
//!
//! # Example
//!
//! ```rust
//! use admintable::app::{AppState, Event, handle_event};
//! use admintable::domain::Record;
//! use admintable::ui::theme::Theme;
//!
//! let mut state = AppState::new("http://localhost", Theme::default());
//! let records = vec![Record::from_pairs([("id", "1")])];
//! let (render, actions) = handle_event(&mut state, &Event::DatasetLoaded { records })?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::InputMode;
use super::state::DatasetStatus;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Record;
use crate::table::PageTarget;

/// Events triggered by user input or by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Outcome of the startup permission request.
    ///
    /// A grant triggers the one-time dataset fetch.
    PermissionsResult {
        /// Whether web access was granted.
        granted: bool,
    },

    /// The dataset arrived and decoded cleanly.
    DatasetLoaded {
        /// Decoded records, in source order.
        records: Vec<Record>,
    },

    /// The dataset request or its decoding failed.
    ///
    /// Logged only; the table stays empty.
    DatasetFailed {
        /// Error message describing the failure.
        error: String,
    },

    /// Hides the plugin pane.
    CloseFocus,

    /// Moves the row cursor down (wraps to top).
    CursorDown,
    /// Moves the row cursor up (wraps to bottom).
    CursorUp,

    /// Gives the search box focus.
    SearchMode,
    /// Runs a search for the search box text.
    SubmitSearch,
    /// Gives focus back to the table without searching.
    ExitSearch,
    /// Appends a character to the focused text buffer.
    Char(char),
    /// Removes the last character from the focused text buffer.
    Backspace,

    /// Flips the checkbox of the row under the cursor.
    ToggleRow,
    /// Flips the select-all checkbox.
    ToggleSelectAll,

    /// Opens the edit prompt on the row under the cursor.
    EditRow,
    /// Saves the current edit prompt.
    EditCommit,
    /// Skips the current edit prompt.
    EditCancel,

    /// Deletes the row under the cursor.
    DeleteRow,
    /// Deletes every selected record.
    DeleteSelected,
    /// Deletes the record-set range of the current page.
    BulkDeletePage,

    /// Pagination strip navigation.
    Page(PageTarget),
    /// Jumps to a page number. Ignored unless that number is on the strip.
    PageNumber(usize),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// Whether the pane needs redrawing, and the actions to execute in order.
///
/// # Errors
///
/// Currently every failure is logged and absorbed, so this always returns
/// `Ok`. The `Result` keeps the shim's error path in place for fallible
/// actions.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let outcome = match event {
        Event::PermissionsResult { granted } => {
            if !granted {
                tracing::error!("web access denied, dataset cannot be fetched");
                state.dataset = DatasetStatus::Failed;
                (true, vec![])
            } else if state.dataset == DatasetStatus::Pending {
                tracing::info!(endpoint = %state.endpoint, "fetching dataset");
                (
                    false,
                    vec![Action::FetchDataset {
                        url: state.endpoint.clone(),
                    }],
                )
            } else {
                tracing::debug!("dataset already settled, not fetching again");
                (false, vec![])
            }
        }
        Event::DatasetLoaded { records } => {
            state.load_dataset(records.clone());
            (true, vec![])
        }
        Event::DatasetFailed { error } => {
            tracing::error!(error = %error, "error fetching data");
            state.dataset = DatasetStatus::Failed;
            (true, vec![])
        }
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::CursorDown => {
            state.move_cursor_down();
            (true, vec![])
        }
        Event::CursorUp => {
            state.move_cursor_up();
            (true, vec![])
        }
        Event::SearchMode => {
            tracing::debug!("search box focused");
            state.input_mode = InputMode::Search;
            (true, vec![])
        }
        Event::SubmitSearch => {
            tracing::debug!(query = %state.search_input, "search submitted");
            state.table.search(&state.search_input);
            state.active_search.clone_from(&state.search_input);
            state.cursor = 0;
            (true, vec![])
        }
        Event::ExitSearch => {
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::Char(c) => match &mut state.input_mode {
            InputMode::Search => {
                state.search_input.push(*c);
                (true, vec![])
            }
            InputMode::Editing(session) => {
                session.buffer.push(*c);
                (true, vec![])
            }
            InputMode::Normal => (false, vec![]),
        },
        Event::Backspace => match &mut state.input_mode {
            InputMode::Search => {
                state.search_input.pop();
                (true, vec![])
            }
            InputMode::Editing(session) => {
                session.buffer.pop();
                (true, vec![])
            }
            InputMode::Normal => (false, vec![]),
        },
        Event::ToggleRow => match state.cursor_identity() {
            Some(identity) => {
                state.table.toggle(identity);
                (true, vec![])
            }
            None => (false, vec![]),
        },
        Event::ToggleSelectAll => {
            let flag = !state.table.select_all_checked();
            state.table.select_all(flag);
            (true, vec![])
        }
        Event::EditRow => (state.begin_edit(), vec![]),
        Event::EditCommit => {
            state.resolve_edit(true);
            (true, vec![])
        }
        Event::EditCancel => {
            state.resolve_edit(false);
            (true, vec![])
        }
        Event::DeleteRow => match state.cursor_identity() {
            Some(identity) => {
                if let Err(e) = state.table.delete_one(identity) {
                    tracing::warn!(error = %e, "delete of stale row");
                }
                (true, vec![])
            }
            None => (false, vec![]),
        },
        Event::DeleteSelected => {
            state.table.delete_selected();
            state.active_search.clear();
            state.cursor = 0;
            (true, vec![])
        }
        Event::BulkDeletePage => {
            state.table.bulk_delete_current_page();
            state.active_search.clear();
            (true, vec![])
        }
        Event::Page(target) => {
            state.table.go_to(*target);
            state.cursor = 0;
            (true, vec![])
        }
        Event::PageNumber(n) => {
            if (1..=state.table.total_pages()).contains(n) {
                state.table.go_to(PageTarget::Page(*n));
                state.cursor = 0;
                (true, vec![])
            } else {
                tracing::debug!(page = n, "no such page control");
                (false, vec![])
            }
        }
    };

    state.clamp_cursor();
    Ok(outcome)
}
