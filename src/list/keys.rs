//! Built-in key bindings for the list pager.
//!
//! - **Cursor Movement**: `↑` (up), `↓` (down)
//! - **Quit**: `ctrl+c` (stop the pager)
//!
//! Everything else is left to the embedding application, which sees every
//! key through the `keypress` notification.
//!
//! ```rust
//! use list_pager::list::PagerKeyMap;
//! use list_pager::key::KeyMap;
//!
//! let keymap = PagerKeyMap::default();
//! assert_eq!(keymap.short_help().len(), 3);
//! ```

use crate::key;

/// Key bindings for list navigation and exit.
#[derive(Debug, Clone)]
pub struct PagerKeyMap {
    /// Select the previous item.
    pub cursor_up: key::Binding,
    /// Select the next item.
    pub cursor_down: key::Binding,
    /// Stop the pager.
    pub quit: key::Binding,
}

impl Default for PagerKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::new_binding(vec![
                key::with_keys_str(&["up"]),
                key::with_help("↑", "up"),
            ]),
            cursor_down: key::new_binding(vec![
                key::with_keys_str(&["down"]),
                key::with_help("↓", "down"),
            ]),
            quit: key::new_binding(vec![
                key::with_keys_str(&["ctrl+c"]),
                key::with_help("ctrl+c", "quit"),
            ]),
        }
    }
}

impl key::KeyMap for PagerKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.cursor_up, &self.cursor_down, &self.quit]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.cursor_up, &self.cursor_down], vec![&self.quit]]
    }
}
