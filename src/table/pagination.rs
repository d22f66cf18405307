//! Fixed-size paging over the filtered view.
//!
//! Pages are 1-based. A filtered view of `n` records has `ceil(n / PAGE_SIZE)`
//! pages, and zero pages when it is empty. Every navigation target is clamped
//! into `1..=max(1, total_pages)`, so an empty view never leaves the cursor on
//! page 0.

use super::store::TableState;
use std::ops::Range;

/// Number of rows shown per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` records.
///
/// # Examples
///
/// ```
/// use admintable::table::total_pages;
///
/// assert_eq!(total_pages(0), 0);
/// assert_eq!(total_pages(10), 1);
/// assert_eq!(total_pages(25), 3);
/// ```
#[must_use]
pub const fn total_pages(len: usize) -> usize {
    (len + PAGE_SIZE - 1) / PAGE_SIZE
}

/// Clamps `page` into `1..=max(1, total)`.
#[must_use]
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Unclipped index range `[start, end)` covered by `page`.
///
/// Bulk deletion works on this raw range over the record set, so it is not
/// clipped to any length here.
#[must_use]
pub const fn page_bounds(page: usize) -> Range<usize> {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    start..start + PAGE_SIZE
}

/// Index range of `page` clipped to a sequence of `len` items.
#[must_use]
pub fn page_range(page: usize, len: usize) -> Range<usize> {
    let bounds = page_bounds(page);
    bounds.start.min(len)..bounds.end.min(len)
}

/// Snapshot of the paging cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Current page, 1-based.
    pub current_page: usize,
    /// Page count of the filtered view, 0 when it is empty.
    pub total_pages: usize,
}

/// A navigation intent from the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    First,
    Previous,
    Next,
    Last,
    /// A page-number control.
    Page(usize),
}

impl PageTarget {
    /// Resolves the intent against the current window.
    ///
    /// # Examples
    ///
    /// ```
    /// use admintable::table::PageTarget;
    ///
    /// assert_eq!(PageTarget::Previous.resolve(1, 3), 1);
    /// assert_eq!(PageTarget::Next.resolve(3, 3), 3);
    /// assert_eq!(PageTarget::Last.resolve(1, 0), 1);
    /// ```
    #[must_use]
    pub fn resolve(self, current: usize, total: usize) -> usize {
        let raw = match self {
            Self::First => 1,
            Self::Previous => current.saturating_sub(1).max(1),
            Self::Next => (current + 1).min(total),
            Self::Last => total,
            Self::Page(n) => n,
        };
        clamp_page(raw, total)
    }
}

/// One control of the pagination strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub label: String,
    pub target: PageTarget,
    /// Set on the page-number control of the current page.
    pub active: bool,
}

/// Builds the strip `First, Previous, 1..=total, Next, Last`.
///
/// With zero pages the strip holds only the four navigation controls.
#[must_use]
pub fn page_strip(current: usize, total: usize) -> Vec<PageControl> {
    let nav = |label: &str, target| PageControl {
        label: label.to_string(),
        target,
        active: false,
    };

    let mut strip = Vec::with_capacity(total + 4);
    strip.push(nav("First", PageTarget::First));
    strip.push(nav("Previous", PageTarget::Previous));
    strip.extend((1..=total).map(|n| PageControl {
        label: n.to_string(),
        target: PageTarget::Page(n),
        active: n == current,
    }));
    strip.push(nav("Next", PageTarget::Next));
    strip.push(nav("Last", PageTarget::Last));
    strip
}

impl TableState {
    /// Moves to the page named by `target` and re-renders.
    pub fn go_to(&mut self, target: PageTarget) {
        let window = self.page_window();
        let page = target.resolve(window.current_page, window.total_pages);

        tracing::debug!(
            target = ?target,
            from = window.current_page,
            to = page,
            total_pages = window.total_pages,
            "page navigation"
        );

        self.set_current_page(page);
        self.render();
    }

    /// The pagination strip for the current window.
    #[must_use]
    pub fn page_controls(&self) -> Vec<PageControl> {
        let window = self.page_window();
        page_strip(window.current_page, window.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_range_clips_last_page() {
        assert_eq!(page_range(3, 25), 20..25);
        assert_eq!(page_range(4, 25), 25..25);
        assert_eq!(page_range(1, 0), 0..0);
    }

    #[test]
    fn page_bounds_are_not_clipped() {
        assert_eq!(page_bounds(3), 20..30);
    }

    #[test]
    fn navigation_is_inert_without_pages() {
        for target in [
            PageTarget::First,
            PageTarget::Previous,
            PageTarget::Next,
            PageTarget::Last,
        ] {
            assert_eq!(target.resolve(1, 0), 1, "{target:?}");
        }
    }

    #[test]
    fn goto_clamps_out_of_range_numbers() {
        assert_eq!(PageTarget::Page(0).resolve(2, 3), 1);
        assert_eq!(PageTarget::Page(9).resolve(2, 3), 3);
    }

    #[test]
    fn strip_marks_only_current_page_active() {
        let strip = page_strip(2, 3);
        let labels: Vec<&str> = strip.iter().map(|c| c.label.as_str()).collect();

        assert_eq!(labels, vec!["First", "Previous", "1", "2", "3", "Next", "Last"]);
        let active: Vec<&str> = strip
            .iter()
            .filter(|c| c.active)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(active, vec!["2"]);
    }

    #[test]
    fn strip_without_pages_has_no_numbers() {
        let strip = page_strip(1, 0);
        assert!(strip.iter().all(|c| !matches!(c.target, PageTarget::Page(_))));
        assert_eq!(strip.len(), 4);
    }
}
