//! Shared rendering utilities and helpers.
//!
//! Cursor positioning, width fitting and search-match highlighting. All width
//! arithmetic counts characters, not bytes.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Pads or truncates `text` to exactly `width` characters.
///
/// Truncated text ends in `...` when there is room for it.
///
/// # Example
///
/// ```rust
/// use admintable::ui::helpers::fit;
///
/// assert_eq!(fit("admin", 7), "admin  ");
/// assert_eq!(fit("aaron@mailinator.com", 10), "aaron@m...");
/// assert_eq!(fit("admin", 2), "ad");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        let mut fitted = text.to_string();
        fitted.push_str(&" ".repeat(width - len));
        return fitted;
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut fitted: String = text.chars().take(width - 3).collect();
    fitted.push_str("...");
    fitted
}

/// Shares `available` columns among columns wanting `natural` widths.
///
/// Columns that fit keep their natural width. When they do not all fit, the
/// narrowest columns are served first and the rest split what is left evenly.
///
/// # Example
///
/// ```rust
/// use admintable::ui::helpers::fit_widths;
///
/// assert_eq!(fit_widths(&[2, 10, 30], 60), vec![2, 10, 30]);
/// assert_eq!(fit_widths(&[2, 10, 30], 20), vec![2, 9, 9]);
/// ```
#[must_use]
pub fn fit_widths(natural: &[usize], available: usize) -> Vec<usize> {
    if natural.iter().sum::<usize>() <= available {
        return natural.to_vec();
    }

    let mut order: Vec<usize> = (0..natural.len()).collect();
    order.sort_by_key(|&i| natural[i]);

    let mut widths = vec![0; natural.len()];
    let mut remaining = available;
    for (served, &i) in order.iter().enumerate() {
        let share = remaining / (natural.len() - served);
        let width = natural[i].min(share);
        widths[i] = width;
        remaining -= width;
    }
    widths
}

/// Character ranges of `text` that contain `lowered_term`, case-insensitively.
///
/// Returns nothing for an empty term, or when lowercasing changes the
/// character count of `text` and ranges could not be mapped back.
#[must_use]
pub fn match_ranges(text: &str, lowered_term: &str) -> Vec<(usize, usize)> {
    if lowered_term.is_empty() {
        return vec![];
    }

    let lowered: Vec<char> = text.to_lowercase().chars().collect();
    if lowered.len() != text.chars().count() {
        return vec![];
    }
    let term: Vec<char> = lowered_term.chars().collect();

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + term.len() <= lowered.len() {
        if lowered[start..start + term.len()] == term[..] {
            ranges.push((start, start + term.len()));
            start += term.len();
        } else {
            start += 1;
        }
    }
    ranges
}

/// Renders text with highlighted character ranges for search matches.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight `(start, end)` (inclusive start, exclusive end)
/// * `theme` - Active color theme for highlight colors
/// * `restore` - Escape sequence re-applied after each highlighted section
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start.min(end)..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{restore}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_counts_characters() {
        assert_eq!(fit("Zoë", 4), "Zoë ");
        assert_eq!(fit("Zoë Saldaña", 6), "Zoë...");
    }

    #[test]
    fn fit_widths_never_exceeds_available() {
        let widths = fit_widths(&[4, 18, 26, 6], 30);
        assert!(widths.iter().sum::<usize>() <= 30);
        assert_eq!(widths[0], 4);
        assert_eq!(widths[3], 6);
    }

    #[test]
    fn match_ranges_are_case_insensitive() {
        assert_eq!(match_ranges("Admin admin", "admin"), vec![(0, 5), (6, 11)]);
        assert!(match_ranges("member", "").is_empty());
        assert!(match_ranges("member", "x").is_empty());
    }
}
