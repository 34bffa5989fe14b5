//! Page-jump pagination for the list pager.
//!
//! The visible window is a pure function of the selected index and the page
//! length: the window starts at `floor(index / per_page) * per_page` and is at
//! most `per_page` rows wide. Moving the selection across a page boundary
//! therefore swaps in a whole new page instead of scrolling by one row.
//!
//! The paginator can also render a small page indicator, either as Arabic
//! numerals (`2/3`) or as dots (`○ • ○`).

use serde::Deserialize;

/// The type of page indicator to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    /// Display pagination as Arabic numerals (e.g., "1/5").
    #[default]
    Arabic,
    /// Display pagination as dots (e.g., "• ○ ○ ○ ○").
    Dots,
}

/// Bounds of the currently visible page.
///
/// `start..end` is a half-open range into the item sequence. An empty window
/// (`start == end`) is produced when nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    /// Index of the first visible item (inclusive).
    pub start: usize,
    /// Index one past the last visible item (exclusive).
    pub end: usize,
    /// Zero-based page number containing the selection.
    pub page: usize,
    /// Number of pages needed for all items, never less than 1.
    pub total_pages: usize,
}

impl Window {
    /// Number of rows in the window.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true when the window shows no rows.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The window as a range, ready for slicing.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Computes the page window for a selected index.
///
/// `per_page` values of zero are treated as one so the computation can never
/// divide by zero.
///
/// # Examples
///
/// ```rust
/// use list_pager::paginator::window_for;
///
/// // 11 items, page length 10, the 11th item selected: second page, one row.
/// let w = window_for(Some(10), 10, 11);
/// assert_eq!((w.start, w.end), (10, 11));
/// assert_eq!(w.page, 1);
///
/// // No selection means nothing is visible.
/// assert!(window_for(None, 10, 11).is_empty());
/// ```
pub fn window_for(selected: Option<usize>, per_page: usize, total: usize) -> Window {
    let per_page = per_page.max(1);
    let total_pages = total.div_ceil(per_page).max(1);
    match selected {
        Some(index) if index < total => {
            let page = index / per_page;
            let start = page * per_page;
            Window {
                start,
                end: (start + per_page).min(total),
                page,
                total_pages,
            }
        }
        _ => Window {
            total_pages,
            ..Window::default()
        },
    }
}

/// A paginator model holding the page length and the last computed page.
///
/// # Examples
///
/// ```rust
/// use list_pager::paginator::{Model, Type};
///
/// let mut paginator = Model::new().with_per_page(10);
/// let window = paginator.sync(Some(23), 50);
/// assert_eq!(window.range(), 20..30);
/// assert_eq!(paginator.view(), "3/5");
///
/// paginator.paginator_type = Type::Dots;
/// assert_eq!(paginator.view(), "○ ○ • ○ ○");
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The type of page indicator to display.
    pub paginator_type: Type,
    /// The page holding the selection as of the last `sync`.
    pub page: usize,
    /// The number of items per page.
    pub per_page: usize,
    /// The total number of pages as of the last `sync`.
    pub total_pages: usize,

    /// The character to use for the active page in Dots mode.
    pub active_dot: String,
    /// The character to use for inactive pages in Dots mode.
    pub inactive_dot: String,
    /// The format string for Arabic mode (e.g., "%d/%d").
    pub arabic_format: String,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 0,
            per_page: 10,
            total_pages: 1,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
        }
    }
}

impl Model {
    /// Creates a paginator with ten items per page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page (builder pattern). Clamped to at least 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the indicator style (builder pattern).
    pub fn with_type(mut self, paginator_type: Type) -> Self {
        self.paginator_type = paginator_type;
        self
    }

    /// Sets the number of items per page. Clamped to at least 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Recomputes the window for `selected` out of `total` items and records
    /// the resulting page so `view()` reflects it.
    pub fn sync(&mut self, selected: Option<usize>, total: usize) -> Window {
        let window = window_for(selected, self.per_page, total);
        self.page = window.page;
        self.total_pages = window.total_pages;
        window
    }

    /// Renders the page indicator.
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Arabic => self.arabic_view(),
            Type::Dots => self.dots_view(),
        }
    }

    fn arabic_view(&self) -> String {
        self.arabic_format
            .replacen("%d", &(self.page + 1).to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1)
    }

    fn dots_view(&self) -> String {
        (0..self.total_pages)
            .map(|i| {
                if i == self.page {
                    self.active_dot.as_str()
                } else {
                    self.inactive_dot.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Some(0), 10, 3 => (0, 3, 0, 1) ; "short list fits one page")]
    #[test_case(Some(9), 10, 11 => (0, 10, 0, 2) ; "last row of first page")]
    #[test_case(Some(10), 10, 11 => (10, 11, 1, 2) ; "first row of second page")]
    #[test_case(Some(7), 3, 8 => (6, 8, 2, 3) ; "partial last page is clamped")]
    #[test_case(None, 10, 5 => (0, 0, 0, 1) ; "no selection is empty")]
    #[test_case(Some(4), 10, 0 => (0, 0, 0, 1) ; "stale index on empty list")]
    #[test_case(Some(2), 0, 5 => (2, 3, 2, 5) ; "zero page length acts as one")]
    fn test_window_for(selected: Option<usize>, per_page: usize, total: usize) -> (usize, usize, usize, usize) {
        let w = window_for(selected, per_page, total);
        (w.start, w.end, w.page, w.total_pages)
    }

    #[test]
    fn test_window_width_never_exceeds_page_length() {
        for total in 0..40 {
            for index in 0..total {
                let w = window_for(Some(index), 7, total);
                assert!(w.len() <= 7);
                assert!(w.range().contains(&index));
                assert_eq!(w.start, (index / 7) * 7);
            }
        }
    }

    #[test]
    fn test_sync_records_page() {
        let mut p = Model::new().with_per_page(4);
        p.sync(Some(9), 10);
        assert_eq!(p.page, 2);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.view(), "3/3");
    }

    #[test]
    fn test_dots_view() {
        let mut p = Model::new().with_per_page(2).with_type(Type::Dots);
        p.sync(Some(1), 6);
        assert_eq!(p.view(), "• ○ ○");
    }

    #[test]
    fn test_per_page_clamped() {
        let p = Model::new().with_per_page(0);
        assert_eq!(p.per_page, 1);
    }
}
