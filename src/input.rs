//! Decoded key-event sources.
//!
//! The pager never touches the process's stdin directly. Whoever builds a
//! pager hands it an [`InputSource`], so two pagers cannot fight over one
//! raw-mode terminal by accident.

use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use crate::key::KeyMsg;

/// A stream of decoded key events plus the terminal-mode plumbing around it.
pub trait InputSource {
    /// Switches raw mode on or off.
    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()>;
    /// Starts delivering events.
    fn resume(&mut self) -> io::Result<()>;
    /// Stops delivering events. `read_key` returns `None` while paused.
    fn pause(&mut self) -> io::Result<()>;
    /// Blocks until the next key event. `None` means the stream has ended
    /// or is paused.
    fn read_key(&mut self) -> io::Result<Option<KeyMsg>>;
}

/// Key events read from the controlling terminal through crossterm.
///
/// Non-key events (resize, mouse, focus, paste) and key releases are skipped.
#[derive(Debug, Default)]
pub struct TerminalInput {
    raw: bool,
    active: bool,
}

impl TerminalInput {
    /// A paused terminal input in cooked mode.
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for TerminalInput {
    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        if enabled == self.raw {
            return Ok(());
        }
        if enabled {
            terminal::enable_raw_mode()?;
        } else {
            terminal::disable_raw_mode()?;
        }
        self.raw = enabled;
        Ok(())
    }

    fn resume(&mut self) -> io::Result<()> {
        self.active = true;
        Ok(())
    }

    fn pause(&mut self) -> io::Result<()> {
        self.active = false;
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Option<KeyMsg>> {
        while self.active {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                return Ok(Some(KeyMsg {
                    key: key.code,
                    modifiers: key.modifiers,
                }));
            }
        }
        Ok(None)
    }
}

impl Drop for TerminalInput {
    fn drop(&mut self) {
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}

/// A pre-recorded queue of key events.
///
/// Drives a pager without a terminal; the stream ends when the queue is
/// drained.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    keys: VecDeque<KeyMsg>,
    raw: bool,
    active: bool,
}

impl ScriptedInput {
    /// A paused source that will yield `keys` in order.
    pub fn new(keys: impl IntoIterator<Item = KeyMsg>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            raw: false,
            active: false,
        }
    }

    /// Appends a key to the end of the script.
    pub fn push(&mut self, key: KeyMsg) {
        self.keys.push_back(key);
    }

    /// Keys not yet read.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    /// Returns true while raw mode is on.
    pub fn is_raw(&self) -> bool {
        self.raw
    }

    /// Returns true while the source is resumed.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl InputSource for ScriptedInput {
    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        self.raw = enabled;
        Ok(())
    }

    fn resume(&mut self) -> io::Result<()> {
        self.active = true;
        Ok(())
    }

    fn pause(&mut self) -> io::Result<()> {
        self.active = false;
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Option<KeyMsg>> {
        if !self.active {
            return Ok(None);
        }
        Ok(self.keys.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn down() -> KeyMsg {
        KeyMsg {
            key: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_scripted_input_yields_only_while_resumed() {
        let mut input = ScriptedInput::new([down(), down()]);
        assert!(input.read_key().unwrap().is_none());
        assert_eq!(input.remaining(), 2);

        input.resume().unwrap();
        assert!(input.read_key().unwrap().is_some());
        input.pause().unwrap();
        assert!(input.read_key().unwrap().is_none());
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn test_scripted_input_ends() {
        let mut input = ScriptedInput::new([down()]);
        input.resume().unwrap();
        input.set_raw_mode(true).unwrap();
        assert!(input.is_raw());
        assert!(input.read_key().unwrap().is_some());
        assert!(input.read_key().unwrap().is_none());
    }
}
