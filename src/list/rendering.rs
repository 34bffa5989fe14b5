//! Page layout and the draw sequence.

use tracing::trace;
use unicode_width::UnicodeWidthStr;

use super::model::Pager;
use super::types::Id;
use crate::error::Result;
use crate::input::InputSource;
use crate::paginator::Window;
use crate::surface::Surface;

impl<K: Id, S: Surface, I: InputSource> Pager<K, S, I> {
    /// The lines of the current page: headers, then the visible items with
    /// the marker before the selected one, then the page indicator if enabled
    /// and there is more than one page.
    pub(super) fn page_lines(&self) -> Vec<String> {
        let window = self.window();
        let marker = self.config.marker.as_str();
        let padding = " ".repeat(marker.width());

        let mut lines: Vec<String> = self.headers.iter().map(|h| h.label.clone()).collect();
        lines.extend(self.items.entries()[window.range()].iter().map(|item| {
            if self.selection.is(&item.id) {
                format!("{marker}{}", item.label)
            } else {
                format!("{padding}{}", item.label)
            }
        }));
        if let Some(indicator) = self.page_indicator(&window) {
            lines.push(indicator);
        }
        lines
    }

    /// Reads the paginator as of the last `draw`.
    fn page_indicator(&self, window: &Window) -> Option<String> {
        if self.config.pagination.is_none() || window.is_empty() || self.paginator.total_pages <= 1 {
            return None;
        }
        Some(self.paginator.view())
    }

    /// Redraws the current page:
    /// `clear → save → translate(x, y) → fill_text per line → restore`.
    pub(super) fn draw(&mut self) -> Result<()> {
        let window = self
            .paginator
            .sync(self.selection.index_in(&self.items), self.items.len());
        let lines = self.page_lines();
        trace!(
            start = window.start,
            end = window.end,
            lines = lines.len(),
            "redraw"
        );

        let surface = &mut self.surface;
        surface.clear()?;
        surface.save()?;
        surface.translate(self.config.x, self.config.y)?;
        for (row, text) in lines.iter().enumerate() {
            let Ok(line) = u16::try_from(row) else { break };
            surface.fill_text(text, 0, line)?;
        }
        surface.restore()?;
        Ok(())
    }
}
