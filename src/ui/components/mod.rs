//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with counts and data-source status
//! - [`search`]: Search input box
//! - [`table`]: Header row and data rows with checkbox and actions columns
//! - [`pagination`]: Select-all checkbox, page controls and page summary
//! - [`prompt`]: Edit prompt box
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Empty state message in place of the rows
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Table Headers]
//! [Table Rows | Empty State]
//! [Pagination]
//! [Blank padding to fill screen]
//! [Edit Prompt - 3 lines, while editing]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod pagination;
mod prompt;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use prompt::render_prompt;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full pane.
///
/// # Parameters
///
/// * `vm` - View model
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);

    if let Some(table) = &vm.table {
        current_row = render_table_headers(current_row, table, theme, cols);
        current_row = render_table_rows(current_row, table, theme, cols);
    }
    if let Some(empty) = &vm.empty_state {
        current_row = render_empty_state(current_row + 1, empty, theme, cols) + 1;
    }

    let select_all = vm.table.as_ref().is_some_and(|t| t.select_all);
    render_pagination(current_row, &vm.pagination, select_all, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    if let Some(prompt) = &vm.prompt {
        render_prompt(border_row.saturating_sub(3), prompt, theme, cols);
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
