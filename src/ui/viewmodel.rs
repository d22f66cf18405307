//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic: text is already truncated to
//! its column width and every flag the renderer styles on is precomputed.

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Search box, always present.
    pub search_bar: SearchBarInfo,

    /// The table, once a header row has been drawn.
    pub table: Option<TableView>,

    /// Pagination strip.
    pub pagination: PaginationInfo,

    /// Edit prompt, while one is open.
    pub prompt: Option<PromptInfo>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Shown in place of the rows when none are drawn.
    pub empty_state: Option<EmptyState>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text with record and selection counts.
    pub title: String,
    /// Data-source status, right-aligned. Empty when there is nothing to say.
    pub status: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search box text.
    pub query: String,
    /// Whether keystrokes go to the search box.
    pub focused: bool,
}

/// The drawn table, columns sized for the pane.
#[derive(Debug, Clone)]
pub struct TableView {
    /// Columns including the leading checkbox and trailing actions columns.
    pub columns: Vec<ColumnInfo>,
    /// State of the select-all checkbox in the header row.
    pub select_all: bool,
    /// Drawn rows in display order.
    pub rows: Vec<RowItem>,
}

#[derive(Debug, Clone)]
pub struct ColumnInfo {
    pub title: String,
    pub width: usize,
}

/// Display information for a single drawn row.
#[derive(Debug, Clone)]
pub struct RowItem {
    /// Positional identity of the row.
    pub identity: usize,
    /// Checkbox state; checked rows get the selected styling.
    pub checked: bool,
    /// Whether the row cursor is on this row.
    pub is_cursor: bool,
    /// Field cells, each padded or truncated to its column width.
    pub cells: Vec<String>,
    /// Per cell, character ranges matching the active search term.
    pub highlight_ranges: Vec<Vec<(usize, usize)>>,
}

/// Pagination strip display information.
#[derive(Debug, Clone)]
pub struct PaginationInfo {
    /// Controls in strip order.
    pub controls: Vec<PageControlItem>,
    /// "Page x of y" text.
    pub summary: String,
}

#[derive(Debug, Clone)]
pub struct PageControlItem {
    pub label: String,
    pub active: bool,
}

/// Edit prompt display information.
#[derive(Debug, Clone)]
pub struct PromptInfo {
    /// Prompt label, e.g. `Edit email:`.
    pub label: String,
    /// Text being edited.
    pub buffer: String,
    /// Field position, e.g. `2/4`.
    pub progress: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
