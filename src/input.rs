//! Input decoding: key events to printable characters.
//!
//! The grid engine does not poll events itself; whatever windowing layer the
//! application uses hands raw key codes here, and [`decode_key_event`] maps
//! them to the character a US-keyboard user expects: shift and caps-lock
//! letter case, shifted symbol substitution (`1` to `!`, `-` to `_`), Enter
//! and Tab as their control characters. Chords with control/alt/super and
//! navigation keys decode to `None`.

/// Key codes delivered by the application's windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character key, as the *unshifted* keycap (lowercase
    /// letters, unshifted symbols).
    Char(char),
    /// Function key (F1-F12).
    F(u8),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Tab key.
    Tab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Escape key.
    Esc,
}

/// Key modifiers held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
    /// Super/Command/Windows key held.
    pub super_key: bool,
    /// Caps-lock active.
    pub caps_lock: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        super_key: false,
        caps_lock: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        super_key: false,
        caps_lock: false,
    };

    /// Check if any modifier is active.
    pub const fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.super_key || self.caps_lock
    }
}

/// Decode a key event into the character it types, if any.
///
/// Letters honor shift and caps-lock (shift under caps-lock flips back to
/// lowercase); other keys honor shift through the fixed US-keyboard symbol
/// table. Enter decodes to `\n` and Tab to `\t` so the result can feed
/// [`crate::Grid::write`] directly.
pub fn decode_key_event(code: KeyCode, modifiers: KeyModifiers) -> Option<char> {
    if modifiers.control || modifiers.alt || modifiers.super_key {
        return None;
    }
    match code {
        KeyCode::Enter => Some('\n'),
        KeyCode::Tab => Some('\t'),
        KeyCode::Char(c) => decode_char(c, modifiers),
        _ => None,
    }
}

/// Apply shift/caps-lock to one keycap character.
fn decode_char(c: char, modifiers: KeyModifiers) -> Option<char> {
    if !c.is_ascii() || c.is_ascii_control() {
        return None;
    }
    if c.is_ascii_alphabetic() {
        // Shift and caps-lock cancel each other out
        let upper = modifiers.shift != modifiers.caps_lock;
        return Some(if upper {
            c.to_ascii_uppercase()
        } else {
            c.to_ascii_lowercase()
        });
    }
    if modifiers.shift {
        Some(shifted_symbol(c))
    } else {
        Some(c)
    }
}

/// The US-keyboard shifted-symbol table. Caps-lock has no effect here.
const fn shifted_symbol(c: char) -> char {
    match c {
        '1' => '!',
        '2' => '@',
        '3' => '#',
        '4' => '$',
        '5' => '%',
        '6' => '^',
        '7' => '&',
        '8' => '*',
        '9' => '(',
        '0' => ')',
        '-' => '_',
        '=' => '+',
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        ';' => ':',
        '\'' => '"',
        ',' => '<',
        '.' => '>',
        '/' => '?',
        '`' => '~',
        other => other,
    }
}
