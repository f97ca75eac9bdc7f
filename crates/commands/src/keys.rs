//! Keys, modifiers and the integer shortcut encoding.
//!
//! A shortcut code is `key_code | modifier_mask`. Character keys use the
//! upper-case Unicode scalar as their code, so `c` and `C` share a key code
//! and differ only by the Shift bit. Non-printing keys live above
//! `0x0100_0000`, out of the way of any character.
//!
//! Key events coming from a front end are normalized the same way before
//! lookup: Shift is derived from the case of a letter and dropped for
//! punctuation.

use std::fmt;
use std::ops::BitOr;

/// Modifier bitmask. Values sit above every key code.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifiers(u32);

impl Modifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(0x0200_0000);
    pub const CTRL: Self = Self(0x0400_0000);
    pub const ALT: Self = Self(0x0800_0000);
    pub const META: Self = Self(0x1000_0000);

    const ALL: [(Self, &'static str); 4] = [
        (Self::CTRL, "Ctrl"),
        (Self::ALT, "Alt"),
        (Self::META, "Meta"),
        (Self::SHIFT, "Shift"),
    ];

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Some(Self::CTRL),
            "shift" => Some(Self::SHIFT),
            "alt" | "option" => Some(Self::ALT),
            "meta" | "cmd" | "super" => Some(Self::META),
            _ => None,
        }
    }
}

impl BitOr for Modifiers {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A physical key, after the front end has translated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key that produces a character. Space is `Char(' ')`.
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
}

impl Key {
    const NAMED_BASE: u32 = 0x0100_0000;

    /// Key code without modifiers.
    pub fn code(self) -> u32 {
        match self {
            Self::Char(c) => c.to_uppercase().next().unwrap_or(c) as u32,
            Self::Escape => Self::NAMED_BASE,
            Self::Tab => Self::NAMED_BASE + 1,
            Self::Backspace => Self::NAMED_BASE + 3,
            Self::Enter => Self::NAMED_BASE + 4,
        }
    }

    /// The character this key types, if any.
    pub const fn as_char(self) -> Option<char> {
        match self {
            Self::Char(c) => Some(c),
            _ => None,
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Self::Char(c));
        }
        let key = match token.to_ascii_lowercase().as_str() {
            "slash" => Self::Char('/'),
            "colon" => Self::Char(':'),
            "space" => Self::Char(' '),
            "plus" => Self::Char('+'),
            "minus" => Self::Char('-'),
            "enter" | "return" => Self::Enter,
            "escape" | "esc" => Self::Escape,
            "tab" => Self::Tab,
            "backspace" => Self::Backspace,
            _ => return None,
        };
        Some(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char('/') => f.write_str("Slash"),
            Self::Char(':') => f.write_str("Colon"),
            Self::Char(' ') => f.write_str("Space"),
            Self::Char('+') => f.write_str("Plus"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Enter => f.write_str("Enter"),
            Self::Escape => f.write_str("Escape"),
            Self::Backspace => f.write_str("Backspace"),
            Self::Tab => f.write_str("Tab"),
        }
    }
}

/// One key as reported by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// An unmodified key.
    pub const fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// An unmodified character key.
    pub const fn char(c: char) -> Self {
        Self::plain(Key::Char(c))
    }

    /// True when the event types `c` (Shift aside).
    pub fn is_char(&self, c: char) -> bool {
        self.key == Key::Char(c) && self.modifiers.without(Modifiers::SHIFT).is_empty()
    }

    /// The character to append to a text buffer, if this event types one.
    ///
    /// Ctrl/Alt/Meta chords never type; control characters are dropped.
    pub fn text(&self) -> Option<char> {
        let c = self.key.as_char()?;
        let chord = self.modifiers.without(Modifiers::SHIFT);
        (chord.is_empty() && !c.is_control()).then_some(c)
    }

    /// Shortcut code after normalization.
    pub fn shortcut_code(&self) -> u32 {
        Shortcut::from_event(self).code()
    }
}

/// Errors in a textual shortcut specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutError {
    #[error("unknown modifier {0:?}")]
    UnknownModifier(String),
    #[error("unknown key {0:?}")]
    UnknownKey(String),
    #[error("missing key after modifiers")]
    MissingKey,
}

/// A normalized key + modifier combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shortcut {
    key: Key,
    modifiers: Modifiers,
}

impl Shortcut {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        let (key, modifiers) = normalize(key, modifiers);
        Self { key, modifiers }
    }

    /// Parse `token(+token)*`, e.g. `c`, `C`, `Ctrl+Shift+t`, `Slash`, `Alt++`.
    ///
    /// An empty string means "no shortcut" and yields `Ok(None)`.
    pub fn parse(spec: &str) -> Result<Option<Self>, ShortcutError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Ok(None);
        }

        let (modifier_part, key_token) = if spec == "+" {
            ("", "+")
        } else if let Some(prefix) = spec.strip_suffix("++") {
            (prefix, "+")
        } else {
            spec.rsplit_once('+').unwrap_or(("", spec))
        };

        let mut modifiers = Modifiers::NONE;
        for token in modifier_part.split('+').filter(|t| !t.trim().is_empty()) {
            let token = token.trim();
            modifiers = modifiers
                | Modifiers::from_token(token)
                    .ok_or_else(|| ShortcutError::UnknownModifier(token.to_string()))?;
        }

        let key_token = key_token.trim();
        if key_token.is_empty() {
            return Err(ShortcutError::MissingKey);
        }
        let key =
            Key::from_token(key_token).ok_or_else(|| ShortcutError::UnknownKey(key_token.to_string()))?;

        Ok(Some(Self::new(key, modifiers)))
    }

    /// Shortcut matching a key event, normalized like parsed shortcuts.
    pub fn from_event(event: &KeyEvent) -> Self {
        Self::new(event.key, event.modifiers)
    }

    pub const fn key(&self) -> Key {
        self.key
    }

    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// `key_code | modifier_mask`.
    pub fn code(&self) -> u32 {
        self.key.code() | self.modifiers.bits()
    }
}

/// Letters carry Shift in their case; other characters never carry Shift.
fn normalize(key: Key, modifiers: Modifiers) -> (Key, Modifiers) {
    match key {
        Key::Char(c) if c.is_alphabetic() => {
            let shifted = c.is_uppercase() || modifiers.contains(Modifiers::SHIFT);
            let lower = c.to_lowercase().next().unwrap_or(c);
            let base = modifiers.without(Modifiers::SHIFT);
            if shifted {
                (Key::Char(lower), base | Modifiers::SHIFT)
            } else {
                (Key::Char(lower), base)
            }
        }
        Key::Char(c) => (Key::Char(c), modifiers.without(Modifiers::SHIFT)),
        other => (other, modifiers),
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (modifier, label) in Modifiers::ALL {
            if self.modifiers.contains(modifier) {
                write!(f, "{label}+")?;
            }
        }
        write!(f, "{}", self.key)
    }
}
