//! Type-safe key bindings.
//!
//! A [`Binding`] is a set of key presses plus the help text that describes
//! them. Bindings are matched against decoded [`KeyMsg`] events, so a
//! component only ever asks "does this event trigger that action?".
//!
//! ```rust
//! use list_pager::key::{self, KeyMsg};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let quit = key::new_binding(vec![
//!     key::with_keys_str(&["ctrl+c"]),
//!     key::with_help("ctrl+c", "quit"),
//! ]);
//!
//! let ctrl_c = KeyMsg { key: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
//! assert!(quit.matches(&ctrl_c));
//! ```

pub use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers that must be held for the press to match.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<&KeyMsg> for KeyPress {
    fn from(msg: &KeyMsg) -> Self {
        Self {
            code: msg.key,
            modifiers: msg.modifiers,
        }
    }
}

impl KeyPress {
    /// Conventional name of the key, the inverse of [`parse_key`] without
    /// modifiers: `"up"`, `"c"`, `"enter"`.
    pub fn name(&self) -> String {
        match self.code {
            KeyCode::Up => "up".into(),
            KeyCode::Down => "down".into(),
            KeyCode::Left => "left".into(),
            KeyCode::Right => "right".into(),
            KeyCode::PageUp => "pgup".into(),
            KeyCode::PageDown => "pgdown".into(),
            KeyCode::Home => "home".into(),
            KeyCode::End => "end".into(),
            KeyCode::Enter => "enter".into(),
            KeyCode::Esc => "esc".into(),
            KeyCode::Tab => "tab".into(),
            KeyCode::Backspace => "backspace".into(),
            KeyCode::Delete => "delete".into(),
            KeyCode::Char(' ') => "space".into(),
            KeyCode::Char(c) => c.to_string(),
            other => format!("{other:?}").to_lowercase(),
        }
    }

    /// Returns true if control was held.
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CONTROL)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short rendering of the keys, e.g. `"↑/k"`.
    pub key: String,
    /// What the binding does, e.g. `"up"`.
    pub desc: String,
}

/// A key binding: the presses that trigger it and its help text.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// Configuration option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

impl Binding {
    /// Creates a binding from key codes or `(code, modifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. A disabled binding never matches.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true if the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Returns true if `msg` is one of this binding's presses.
    ///
    /// A press without modifiers matches events that carry only `SHIFT`, so
    /// `G` still matches when the terminal reports the shift that produced it.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|press| {
            press.code == msg.key
                && (press.modifiers == msg.modifiers
                    || (press.modifiers.is_empty() && msg.modifiers == KeyModifiers::SHIFT))
        })
    }
}

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Option that sets keys from their string names (`"up"`, `"ctrl+c"`, `"j"`).
///
/// Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let presses: Vec<KeyPress> = keys.iter().filter_map(|k| parse_key(k)).collect();
    Box::new(move |b: &mut Binding| b.keys = presses)
}

/// Option that sets the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Option that starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Parses a key name such as `"down"`, `"pgup"`, `"ctrl+c"` or `"q"`.
pub fn parse_key(name: &str) -> Option<KeyPress> {
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = name;
    loop {
        if let Some(r) = rest.strip_prefix("ctrl+") {
            modifiers |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt+") {
            modifiers |= KeyModifiers::ALT;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift+") {
            modifiers |= KeyModifiers::SHIFT;
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(KeyPress { code, modifiers })
}

/// A set of bindings that can describe itself for help output.
pub trait KeyMap {
    /// Bindings for a compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped into columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Renders bindings as `key desc • key desc`, skipping disabled ones.
pub fn short_help_line(bindings: &[&Binding]) -> String {
    bindings
        .iter()
        .filter(|b| b.enabled())
        .map(|b| format!("{} {}", b.help().key, b.help().desc))
        .collect::<Vec<_>>()
        .join(" • ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_named_and_modified_keys() {
        assert_eq!(parse_key("up"), Some(KeyPress::from(KeyCode::Up)));
        assert_eq!(
            parse_key("ctrl+c"),
            Some(KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)))
        );
        assert_eq!(parse_key("j"), Some(KeyPress::from(KeyCode::Char('j'))));
        assert_eq!(parse_key("nonsense"), None);
    }

    #[test]
    fn test_ctrl_binding_requires_modifier() {
        let quit = new_binding(vec![with_keys_str(&["ctrl+c"])]);
        assert!(quit.matches(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!quit.matches(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_plain_binding_tolerates_shift() {
        let end = Binding::new(vec![KeyCode::Char('G')]);
        assert!(end.matches(&press(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(!end.matches(&press(KeyCode::Char('G'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut up = new_binding(vec![with_keys_str(&["up"]), with_disabled()]);
        assert!(!up.matches(&press(KeyCode::Up, KeyModifiers::NONE)));
        up.set_enabled(true);
        assert!(up.matches(&press(KeyCode::Up, KeyModifiers::NONE)));
    }

    #[test]
    fn test_key_press_name_and_ctrl() {
        let down = KeyPress::from(&press(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(down.name(), "down");
        assert!(!down.ctrl());

        let ctrl_c = KeyPress::from(&press(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(ctrl_c.name(), "c");
        assert!(ctrl_c.ctrl());
    }

    #[test]
    fn test_short_help_line() {
        let up = Binding::new(vec![KeyCode::Up]).with_help("↑", "up");
        let down = Binding::new(vec![KeyCode::Down]).with_help("↓", "down");
        assert_eq!(short_help_line(&[&up, &down]), "↑ up • ↓ down");
    }
}
