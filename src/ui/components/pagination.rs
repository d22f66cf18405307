//! Pagination strip renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders the select-all checkbox, the page controls and the page summary
/// on one line.
///
/// The current page's control is drawn with the active-page colors. Controls
/// that do not fit the width are dropped from the right.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_pagination(
    row: usize,
    pagination: &PaginationInfo,
    select_all: bool,
    theme: &Theme,
    cols: usize,
) -> usize {
    let checkbox = if select_all { "[x] all " } else { "[ ] all " };
    let summary = format!(" {}", pagination.summary);
    let budget = cols.saturating_sub(summary.chars().count());

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{checkbox}");
    let mut used = checkbox.len();

    for control in &pagination.controls {
        let label = format!(" {} ", control.label);
        let width = label.chars().count();
        if used + width > budget {
            break;
        }
        if control.active {
            print!("{}", Theme::fg(&theme.colors.active_page_fg));
            print!("{}", Theme::bg(&theme.colors.active_page_bg));
            print!("{label}");
            print!("{}", Theme::reset());
            print!("{}", Theme::fg(&theme.colors.text_normal));
        } else {
            print!("{label}");
        }
        used += width;
    }

    print!("{}", " ".repeat(budget.saturating_sub(used)));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{summary}");
    print!("{}", Theme::reset());
    row + 1
}
