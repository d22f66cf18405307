//! Edit prompt component renderer.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PromptInfo;

/// Renders the edit prompt as a 3-line box spanning the pane.
///
/// ```text
/// ┌──────────────────────────────┐
/// │ Edit email: aaron@...█   2/4 │
/// └──────────────────────────────┘
/// ```
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_prompt(row: usize, prompt: &PromptInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(2);
    let progress = format!(" {} ", prompt.progress);
    let text_width = inner_width.saturating_sub(progress.chars().count());
    let text = fit(&format!(" {} {}█", prompt.label, prompt.buffer), text_width);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.prompt_border));
    print!("┌{}┐", "─".repeat(inner_width));

    position_cursor(row + 1, 1);
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{text}");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{progress}");
    print!("{}", Theme::fg(&theme.colors.prompt_border));
    print!("│");

    position_cursor(row + 2, 1);
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
