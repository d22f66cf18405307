//! Table component renderer.
//!
//! Draws the header row and the data rows of a [`TableView`]. Each row is a
//! checkbox cell, the field cells and the actions cell, separated by single
//! spaces. Styling precedence: cursor row, then checked row, then plain text.

use crate::ui::helpers::{self, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{RowItem, TableView};

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, table: &TableView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));

    let line = table
        .columns
        .iter()
        .map(|column| fit(&column.title, column.width))
        .collect::<Vec<_>>()
        .join(" ");
    print!("{}", fit(&line, cols));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_table_rows(row: usize, table: &TableView, theme: &Theme, cols: usize) -> usize {
    let select_width = table.columns.first().map_or(0, |c| c.width);
    let actions_width = table.columns.last().map_or(0, |c| c.width);

    let mut current_row = row;
    for item in &table.rows {
        current_row = render_table_row(current_row, item, select_width, actions_width, theme, cols);
    }
    current_row
}

fn row_style(item: &RowItem, theme: &Theme) -> String {
    let (fg, bg) = if item.is_cursor {
        (&theme.colors.cursor_fg, Some(&theme.colors.cursor_bg))
    } else if item.checked {
        (&theme.colors.checked_fg, Some(&theme.colors.checked_bg))
    } else {
        (&theme.colors.text_normal, None)
    };
    let mut style = Theme::fg(fg);
    if let Some(bg) = bg {
        style.push_str(&Theme::bg(bg));
    }
    style
}

/// Renders a single table row, padded to the full pane width so the row
/// background covers the whole line.
fn render_table_row(
    row: usize,
    item: &RowItem,
    select_width: usize,
    actions_width: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    let style = row_style(item, theme);
    position_cursor(row, 1);
    print!("{style}");

    let checkbox = if item.checked { "[x]" } else { "[ ]" };
    print!("{}", fit(checkbox, select_width));
    let mut used = select_width;

    for (column, cell) in item.cells.iter().enumerate() {
        print!(" ");
        let ranges = item
            .highlight_ranges
            .get(column)
            .map_or(&[][..], Vec::as_slice);
        helpers::render_highlighted_text(cell, ranges, theme, &style);
        used += 1 + cell.chars().count();
    }

    print!(" ");
    if !item.is_cursor {
        print!("{}", Theme::fg(&theme.colors.action_fg));
    }
    print!("{}", fit(crate::app::state::ACTIONS_LABEL, actions_width));
    used += 1 + actions_width;

    print!("{style}");
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}
