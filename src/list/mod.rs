//! Paginated list component with headers, a single selection and key events.
//!
//! This module exposes `Pager<K, S, I>` plus its supporting types:
//! - `Entry` (`Item`/`Header`): an id and a label
//! - `Event`: the notifications a pager publishes
//! - `PagerKeyMap`: the built-in `↑`/`↓`/`ctrl+c` bindings
//!
//! ## Architecture Overview
//!
//! - **Stores**: items and headers live in separate insertion-ordered maps,
//!   each with its own id namespace.
//! - **Selection**: at most one item id; always refers to an existing item.
//! - **Paging**: the visible window is derived from the selection's position
//!   and jumps a whole page at a time.
//! - **Events**: listeners get `&mut Pager` and may call any mutator; events
//!   raised inside a listener are delivered after the current one.
//! - **Dispatch**: each key is published as `keypress` before the built-in
//!   binding runs.
//!
//! ## Example
//!
//! ```rust
//! use list_pager::prelude::*;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let keys = [KeyCode::Char('j'), KeyCode::Char('j'), KeyCode::Char('q')]
//!     .map(|key| KeyMsg { key, modifiers: KeyModifiers::NONE });
//!
//! let mut list: Pager<&str> = Pager::new(
//!     BufferSurface::new(40, 20),
//!     ScriptedInput::new(keys),
//!     PagerConfig::default(),
//! )
//! .unwrap();
//!
//! list.add_item("g", "Google").unwrap();
//! list.add_item("y", "Yahoo").unwrap();
//! list.add_item("c", "Cloudup").unwrap();
//!
//! list.on(|list, event| {
//!     if let Event::Keypress { key, .. } = event {
//!         let _ = match key.name().as_str() {
//!             "j" => list.down(),
//!             "k" => list.up(),
//!             "q" => list.stop(),
//!             _ => Ok(()),
//!         };
//!     }
//! });
//!
//! list.run().unwrap();
//! assert_eq!(list.selected(), Some(&"c"));
//! assert!(!list.is_running());
//! ```

pub mod keys;

mod api;
mod dispatch;
mod events;
mod model;
mod rendering;
mod selection;
mod store;
mod types;


pub use events::{Event, EventBus, Listener, ListenerId};
pub use keys::PagerKeyMap;
pub use model::Pager;
pub use selection::Selection;
pub use store::EntryStore;
pub use types::{Entry, Header, Id, Item, RunState};

use crate::error::Result;
use crate::input::InputSource;
use crate::key::KeyMsg;
use crate::surface::Surface;
use bubbletea_rs::{Cmd, Msg};

// bubbletea-rs integration
impl<K: Id, S: Surface, I: InputSource> Pager<K, S, I> {
    /// Feeds a bubbletea message to the pager.
    ///
    /// Key messages go through [`handle_key`](Self::handle_key); anything else
    /// is ignored. When the key stops the pager, a quit command is returned
    /// so the hosting program exits too.
    ///
    /// # Errors
    ///
    /// Errors from the triggered action.
    pub fn update(&mut self, msg: &Msg) -> Result<Option<Cmd>> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let was_running = self.is_running();
            self.handle_key(key_msg)?;
            if was_running && !self.is_running() {
                return Ok(Some(bubbletea_rs::quit()));
            }
        }
        Ok(None)
    }

    /// Renders the current page as plain text, one line per row: headers,
    /// visible items, then the page indicator if enabled.
    pub fn view(&self) -> String {
        self.page_lines().join("\n")
    }
}
