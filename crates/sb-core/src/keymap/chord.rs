use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
    };
}

/// A key plus the modifiers held while pressing it.
///
/// For character keys the shift state is carried by the character itself
/// (`N` vs `n`), so `shift` is always cleared for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyChordParseError {
    #[error("empty key binding")]
    Empty,

    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),

    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

impl KeyChord {
    pub fn new(code: KeyCode, mut modifiers: Modifiers) -> Self {
        if matches!(code, KeyCode::Char(_)) {
            modifiers.shift = false;
        }
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, Modifiers::NONE)
    }

    /// Character produced by this chord when typed into a text field.
    pub fn typed_char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt => Some(c),
            _ => None,
        }
    }

    /// Keys a focused text field consumes before the key map sees them.
    pub fn is_text_editing(&self) -> bool {
        if self.typed_char().is_some() {
            return true;
        }
        !self.modifiers.ctrl
            && !self.modifiers.alt
            && matches!(
                self.code,
                KeyCode::Backspace | KeyCode::Delete | KeyCode::Left | KeyCode::Right | KeyCode::Home | KeyCode::End
            )
    }
}

fn parse_key(name: &str) -> Result<KeyCode, KeyChordParseError> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let code = match name.to_ascii_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" | "arrowup" => KeyCode::Up,
        "down" | "arrowdown" => KeyCode::Down,
        "left" | "arrowleft" => KeyCode::Left,
        "right" | "arrowright" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "space" => KeyCode::Char(' '),
        "plus" => KeyCode::Char('+'),
        _ => return Err(KeyChordParseError::UnknownKey(name.to_string())),
    };
    Ok(code)
}

impl FromStr for KeyChord {
    type Err = KeyChordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeyChordParseError::Empty);
        }

        let parts: Vec<&str> = s.split('+').collect();
        let (key, mods) = parts.split_last().ok_or(KeyChordParseError::Empty)?;
        if key.is_empty() {
            return Err(KeyChordParseError::Empty);
        }

        let mut modifiers = Modifiers::NONE;
        for m in mods {
            match m.trim().to_ascii_lowercase().as_str() {
                "ctrl" | "control" | "mod" | "cmd" => modifiers.ctrl = true,
                "alt" | "option" | "meta" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                other => return Err(KeyChordParseError::UnknownModifier(other.to_string())),
            }
        }

        Ok(KeyChord::new(parse_key(key.trim())?, modifiers))
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            write!(f, "ctrl+")?;
        }
        if self.modifiers.alt {
            write!(f, "alt+")?;
        }
        if self.modifiers.shift {
            write!(f, "shift+")?;
        }
        match self.code {
            KeyCode::Char(' ') => write!(f, "space"),
            KeyCode::Char('+') => write!(f, "plus"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::Enter => write!(f, "enter"),
            KeyCode::Esc => write!(f, "escape"),
            KeyCode::Tab => write!(f, "tab"),
            KeyCode::BackTab => write!(f, "backtab"),
            KeyCode::Backspace => write!(f, "backspace"),
            KeyCode::Delete => write!(f, "delete"),
            KeyCode::Up => write!(f, "up"),
            KeyCode::Down => write!(f, "down"),
            KeyCode::Left => write!(f, "left"),
            KeyCode::Right => write!(f, "right"),
            KeyCode::Home => write!(f, "home"),
            KeyCode::End => write!(f, "end"),
        }
    }
}
