//! Start/stop lifecycle and key dispatch.
//!
//! ```text
//!   stopped ── start() ──▶ running
//!      ▲                      │
//!      └──── stop() / ctrl+c ─┘
//! ```
//!
//! While running, every key is first published as a `keypress` notification
//! (carrying the selection before handling) and only then matched against the
//! built-in bindings. Listeners cannot cancel the built-in action.

use tracing::{debug, trace, warn};

use super::events::{Emitter, Event};
use super::model::Pager;
use super::types::{Id, RunState};
use crate::error::Result;
use crate::input::InputSource;
use crate::key::{KeyMsg, KeyPress};
use crate::surface::Surface;

impl<K: Id, S: Surface, I: InputSource> Pager<K, S, I> {
    /// Starts listening: draws the current page, hides the cursor, and puts
    /// the input source into raw, resumed mode. No-op when already running.
    ///
    /// # Errors
    ///
    /// IO errors from the surface or the input source.
    pub fn start(&mut self) -> Result<()> {
        if self.state == RunState::Running {
            return Ok(());
        }
        self.state = RunState::Running;
        debug!(items = self.items.len(), "pager started");
        self.draw()?;
        self.surface.hide_cursor()?;
        self.input.set_raw_mode(true)?;
        self.input.resume()?;
        Ok(())
    }

    /// Stops listening: shows the cursor, resets the surface, leaves raw mode
    /// and pauses the input source. No-op when already stopped.
    ///
    /// # Errors
    ///
    /// IO errors from the surface or the input source.
    pub fn stop(&mut self) -> Result<()> {
        if self.state == RunState::Stopped {
            return Ok(());
        }
        self.state = RunState::Stopped;
        debug!("pager stopped");
        self.surface.show_cursor()?;
        self.surface.reset()?;
        self.input.set_raw_mode(false)?;
        self.input.pause()?;
        Ok(())
    }

    /// Handles one decoded key event.
    ///
    /// Emits `keypress` first, then applies the built-in bindings: `↑` selects
    /// the previous item, `↓` the next, `ctrl+c` stops the pager. Other keys
    /// are only observable through the notification. Keys arriving while
    /// stopped are ignored.
    ///
    /// # Errors
    ///
    /// Errors from the triggered action.
    pub fn handle_key(&mut self, msg: &KeyMsg) -> Result<()> {
        let key = KeyPress::from(msg);
        if self.state != RunState::Running {
            warn!(key = %key.name(), "key ignored while stopped");
            return Ok(());
        }
        trace!(key = %key.name(), ctrl = key.ctrl(), "key");

        let previous = self.selection.get().cloned();
        self.emit(Event::Keypress { key, previous });

        if self.keymap.cursor_up.matches(msg) {
            self.up()
        } else if self.keymap.cursor_down.matches(msg) {
            self.down()
        } else if self.keymap.quit.matches(msg) {
            self.stop()
        } else {
            Ok(())
        }
    }

    /// Runs the pager until it is stopped or the input stream ends.
    ///
    /// Starts the pager, feeds every key from the input source through
    /// [`handle_key`](Self::handle_key), and stops it on the way out.
    ///
    /// # Errors
    ///
    /// The first error from starting, reading or handling a key. The pager is
    /// stopped before the error is returned when possible.
    pub fn run(&mut self) -> Result<()> {
        self.start()?;
        let outcome = self.pump();
        let stopped = self.stop();
        outcome.and(stopped)
    }

    fn pump(&mut self) -> Result<()> {
        while self.is_running() {
            match self.input.read_key()? {
                Some(msg) => self.handle_key(&msg)?,
                None => {
                    debug!("input stream ended");
                    break;
                }
            }
        }
        Ok(())
    }
}
