#![warn(missing_docs)]

//! # list-pager
//!
//! A scrollable, selectable list widget for text-mode terminals, built for
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) applications and
//! for plain blocking programs alike.
//!
//! ## Overview
//!
//! A [`Pager`] keeps an ordered list of labeled items, a set of header lines
//! above them, and a single selection. Every state change redraws the page
//! holding the selection onto a [`Surface`]. Keys are read from an injected
//! [`InputSource`]; the arrow keys move the selection, `ctrl+c` stops, and
//! every key is published as a `keypress` notification first so the
//! application can bind anything else.
//!
//! ## Features
//!
//! - **Page-jump pagination**: the window is the page of `length` items that
//!   contains the selection
//! - **Headers**: static lines above the list, addressable by id
//! - **Typed notifications**: `select`, `remove`, `empty`, `reset`, `keypress`
//! - **Re-entrant listeners**: listeners receive `&mut Pager` and may mutate it
//! - **Pluggable IO**: crossterm-backed terminal surface and input, plus
//!   in-memory ones for tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use list_pager::prelude::*;
//!
//! # fn main() -> list_pager::Result<()> {
//! let mut list: Pager<String, TerminalSurface<std::io::Stdout>, TerminalInput> = Pager::new(
//!     TerminalSurface::stdout(100, 200),
//!     TerminalInput::new(),
//!     PagerConfig::default(),
//! )?;
//!
//! list.add_item("http://google.com".to_string(), "Google")?;
//! list.add_item("http://github.com".to_string(), "Github")?;
//!
//! list.on(|list, event| {
//!     if let Event::Keypress { key, .. } = event {
//!         if key.name() == "q" {
//!             let _ = list.stop();
//!         }
//!     }
//! });
//!
//! list.run()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Component Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`list`] | The pager, its stores, selection and notifications |
//! | [`paginator`] | Window computation and page indicator |
//! | [`surface`] | Drawing surfaces |
//! | [`input`] | Key-event sources |
//! | [`key`] | Key bindings |
//! | [`config`] | Pager options |

pub mod config;
pub mod error;
pub mod input;
pub mod key;
pub mod list;
pub mod paginator;
pub mod surface;

pub use config::PagerConfig;
pub use error::{PagerError, Result};
pub use input::{InputSource, ScriptedInput, TerminalInput};
pub use key::{
    new_binding, with_disabled, with_help, with_keys_str, Binding, KeyMap, KeyMsg, KeyPress,
};
pub use list::{Entry, Event, Header, Item, ListenerId, Pager, PagerKeyMap};
pub use paginator::{Model as Paginator, Window};
pub use surface::{BufferSurface, Surface, SurfaceOp, TerminalSurface};

/// Prelude module for convenient imports.
///
/// ```rust
/// use list_pager::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::PagerConfig;
    pub use crate::error::{PagerError, Result};
    pub use crate::input::{InputSource, ScriptedInput, TerminalInput};
    pub use crate::key::{Binding, KeyMap, KeyMsg, KeyPress};
    pub use crate::list::{Entry, Event, ListenerId, Pager, PagerKeyMap};
    pub use crate::paginator::{Type as PaginatorType, Window};
    pub use crate::surface::{BufferSurface, Surface, TerminalSurface};
}
