//! Key and mouse button vocabulary shared by the editor, the player and the
//! key-state monitor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub fn name(self) -> &'static str {
        match self {
            MouseButton::Left => "Left",
            MouseButton::Right => "Right",
            MouseButton::Middle => "Middle",
        }
    }

    pub(crate) fn to_enigo(self) -> enigo::Button {
        match self {
            MouseButton::Left => enigo::Button::Left,
            MouseButton::Right => enigo::Button::Right,
            MouseButton::Middle => enigo::Button::Middle,
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keys a macro can press or the monitor can report as held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Numbers
    Num0, Num1, Num2, Num3, Num4, Num5, Num6, Num7, Num8, Num9,

    // Punctuation (US layout positions)
    Semicolon, Equal, Comma, Minus, Period, Slash,
    Backquote, LeftBracket, Backslash, RightBracket, Quote,

    // Function keys
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,

    // Modifiers
    Control, Alt, Shift, Meta,

    // Navigation
    Up, Down, Left, Right,
    Home, End, PageUp, PageDown,

    // Editing
    Backspace, Delete, Enter, Tab, Escape, Space,

    // Numeric keypad
    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
    NumpadAdd, NumpadSubtract, NumpadMultiply, NumpadDivide, NumpadDecimal,

    // Special
    Insert, PrintScreen, ScrollLock, Pause,
    CapsLock, NumLock, Apps,
}

const LETTERS: [KeyCode; 26] = [
    KeyCode::A, KeyCode::B, KeyCode::C, KeyCode::D, KeyCode::E, KeyCode::F, KeyCode::G,
    KeyCode::H, KeyCode::I, KeyCode::J, KeyCode::K, KeyCode::L, KeyCode::M, KeyCode::N,
    KeyCode::O, KeyCode::P, KeyCode::Q, KeyCode::R, KeyCode::S, KeyCode::T, KeyCode::U,
    KeyCode::V, KeyCode::W, KeyCode::X, KeyCode::Y, KeyCode::Z,
];

const DIGITS: [KeyCode; 10] = [
    KeyCode::Num0, KeyCode::Num1, KeyCode::Num2, KeyCode::Num3, KeyCode::Num4,
    KeyCode::Num5, KeyCode::Num6, KeyCode::Num7, KeyCode::Num8, KeyCode::Num9,
];

const PUNCTUATION: [(KeyCode, char); 11] = [
    (KeyCode::Semicolon, ';'),
    (KeyCode::Equal, '='),
    (KeyCode::Comma, ','),
    (KeyCode::Minus, '-'),
    (KeyCode::Period, '.'),
    (KeyCode::Slash, '/'),
    (KeyCode::Backquote, '`'),
    (KeyCode::LeftBracket, '['),
    (KeyCode::Backslash, '\\'),
    (KeyCode::RightBracket, ']'),
    (KeyCode::Quote, '\''),
];

const FUNCTION_KEYS: [KeyCode; 24] = [
    KeyCode::F1, KeyCode::F2, KeyCode::F3, KeyCode::F4, KeyCode::F5, KeyCode::F6,
    KeyCode::F7, KeyCode::F8, KeyCode::F9, KeyCode::F10, KeyCode::F11, KeyCode::F12,
    KeyCode::F13, KeyCode::F14, KeyCode::F15, KeyCode::F16, KeyCode::F17, KeyCode::F18,
    KeyCode::F19, KeyCode::F20, KeyCode::F21, KeyCode::F22, KeyCode::F23, KeyCode::F24,
];

const NUMPAD_DIGITS: [KeyCode; 10] = [
    KeyCode::Numpad0, KeyCode::Numpad1, KeyCode::Numpad2, KeyCode::Numpad3, KeyCode::Numpad4,
    KeyCode::Numpad5, KeyCode::Numpad6, KeyCode::Numpad7, KeyCode::Numpad8, KeyCode::Numpad9,
];

impl KeyCode {
    /// Character typed by letter, digit and punctuation keys
    fn as_char(self) -> Option<char> {
        if let Some(pos) = LETTERS.iter().position(|k| *k == self) {
            return Some((b'a' + pos as u8) as char);
        }
        if let Some(pos) = DIGITS.iter().position(|k| *k == self) {
            return Some((b'0' + pos as u8) as char);
        }
        PUNCTUATION
            .iter()
            .find(|(k, _)| *k == self)
            .map(|(_, c)| *c)
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            c @ 'a'..='z' => Some(LETTERS[(c as u8 - b'a') as usize]),
            c @ '0'..='9' => Some(DIGITS[(c as u8 - b'0') as usize]),
            c => PUNCTUATION.iter().find(|(_, p)| *p == c).map(|(k, _)| *k),
        }
    }

    /// Human-readable name shown in the action list, e.g. `CTRL`, `A`, `F5`
    pub fn name(self) -> String {
        if let Some(c) = self.as_char() {
            return c.to_ascii_uppercase().to_string();
        }
        if let Some(pos) = FUNCTION_KEYS.iter().position(|k| *k == self) {
            return format!("F{}", pos + 1);
        }
        if let Some(pos) = NUMPAD_DIGITS.iter().position(|k| *k == self) {
            return format!("NUM {}", pos);
        }
        let name = match self {
            KeyCode::Control => "CTRL",
            KeyCode::Alt => "ALT",
            KeyCode::Shift => "SHIFT",
            KeyCode::Meta => "META",
            KeyCode::Up => "UP",
            KeyCode::Down => "DOWN",
            KeyCode::Left => "LEFT",
            KeyCode::Right => "RIGHT",
            KeyCode::Home => "HOME",
            KeyCode::End => "END",
            KeyCode::PageUp => "PAGE UP",
            KeyCode::PageDown => "PAGE DOWN",
            KeyCode::Backspace => "BACKSPACE",
            KeyCode::Delete => "DELETE",
            KeyCode::Enter => "ENTER",
            KeyCode::Tab => "TAB",
            KeyCode::Escape => "ESC",
            KeyCode::Space => "SPACE",
            KeyCode::NumpadAdd => "NUM +",
            KeyCode::NumpadSubtract => "NUM -",
            KeyCode::NumpadMultiply => "NUM *",
            KeyCode::NumpadDivide => "NUM /",
            KeyCode::NumpadDecimal => "NUM .",
            KeyCode::Insert => "INSERT",
            KeyCode::PrintScreen => "PRINT SCREEN",
            KeyCode::ScrollLock => "SCROLL LOCK",
            KeyCode::Pause => "PAUSE",
            KeyCode::CapsLock => "CAPS LOCK",
            KeyCode::NumLock => "NUM LOCK",
            KeyCode::Apps => "APPS",
            _ => "?",
        };
        name.to_string()
    }

    /// The enigo key to inject, or `None` when the platform has no such key
    pub(crate) fn to_enigo(self) -> Option<enigo::Key> {
        use enigo::Key;
        use KeyCode as K;

        let key = match self {
            K::A | K::B | K::C | K::D | K::E | K::F | K::G | K::H | K::I | K::J | K::K
            | K::L | K::M | K::N | K::O | K::P | K::Q | K::R | K::S | K::T | K::U | K::V
            | K::W | K::X | K::Y | K::Z
            | K::Num0 | K::Num1 | K::Num2 | K::Num3 | K::Num4 | K::Num5 | K::Num6
            | K::Num7 | K::Num8 | K::Num9
            | K::Semicolon | K::Equal | K::Comma | K::Minus | K::Period | K::Slash
            | K::Backquote | K::LeftBracket | K::Backslash | K::RightBracket | K::Quote => {
                return self.as_char().map(Key::Unicode);
            }
            K::F1 => Key::F1,
            K::F2 => Key::F2,
            K::F3 => Key::F3,
            K::F4 => Key::F4,
            K::F5 => Key::F5,
            K::F6 => Key::F6,
            K::F7 => Key::F7,
            K::F8 => Key::F8,
            K::F9 => Key::F9,
            K::F10 => Key::F10,
            K::F11 => Key::F11,
            K::F12 => Key::F12,
            K::F13 => Key::F13,
            K::F14 => Key::F14,
            K::F15 => Key::F15,
            K::F16 => Key::F16,
            K::F17 => Key::F17,
            K::F18 => Key::F18,
            K::F19 => Key::F19,
            K::F20 => Key::F20,
            K::Control => Key::Control,
            K::Alt => Key::Alt,
            K::Shift => Key::Shift,
            K::Meta => Key::Meta,
            K::Up => Key::UpArrow,
            K::Down => Key::DownArrow,
            K::Left => Key::LeftArrow,
            K::Right => Key::RightArrow,
            K::Home => Key::Home,
            K::End => Key::End,
            K::PageUp => Key::PageUp,
            K::PageDown => Key::PageDown,
            K::Backspace => Key::Backspace,
            K::Delete => Key::Delete,
            K::Enter => Key::Return,
            K::Tab => Key::Tab,
            K::Escape => Key::Escape,
            K::Space => Key::Space,
            K::CapsLock => Key::CapsLock,
            K::F21 | K::F22 | K::F23 | K::F24
            | K::Numpad0 | K::Numpad1 | K::Numpad2 | K::Numpad3 | K::Numpad4
            | K::Numpad5 | K::Numpad6 | K::Numpad7 | K::Numpad8 | K::Numpad9
            | K::NumpadAdd | K::NumpadSubtract | K::NumpadMultiply | K::NumpadDivide
            | K::NumpadDecimal
            | K::Insert | K::PrintScreen | K::ScrollLock | K::Pause | K::NumLock | K::Apps => {
                return native::to_enigo(self);
            }
        };
        Some(key)
    }

    /// Map a key reported by the global listener. Left/right variants of a
    /// modifier map to the same key.
    pub(crate) fn from_rdev(key: rdev::Key) -> Option<Self> {
        use rdev::Key as R;

        let code = match key {
            R::KeyA => KeyCode::A,
            R::KeyB => KeyCode::B,
            R::KeyC => KeyCode::C,
            R::KeyD => KeyCode::D,
            R::KeyE => KeyCode::E,
            R::KeyF => KeyCode::F,
            R::KeyG => KeyCode::G,
            R::KeyH => KeyCode::H,
            R::KeyI => KeyCode::I,
            R::KeyJ => KeyCode::J,
            R::KeyK => KeyCode::K,
            R::KeyL => KeyCode::L,
            R::KeyM => KeyCode::M,
            R::KeyN => KeyCode::N,
            R::KeyO => KeyCode::O,
            R::KeyP => KeyCode::P,
            R::KeyQ => KeyCode::Q,
            R::KeyR => KeyCode::R,
            R::KeyS => KeyCode::S,
            R::KeyT => KeyCode::T,
            R::KeyU => KeyCode::U,
            R::KeyV => KeyCode::V,
            R::KeyW => KeyCode::W,
            R::KeyX => KeyCode::X,
            R::KeyY => KeyCode::Y,
            R::KeyZ => KeyCode::Z,
            R::Num0 => KeyCode::Num0,
            R::Num1 => KeyCode::Num1,
            R::Num2 => KeyCode::Num2,
            R::Num3 => KeyCode::Num3,
            R::Num4 => KeyCode::Num4,
            R::Num5 => KeyCode::Num5,
            R::Num6 => KeyCode::Num6,
            R::Num7 => KeyCode::Num7,
            R::Num8 => KeyCode::Num8,
            R::Num9 => KeyCode::Num9,
            R::SemiColon => KeyCode::Semicolon,
            R::Equal => KeyCode::Equal,
            R::Comma => KeyCode::Comma,
            R::Minus => KeyCode::Minus,
            R::Dot => KeyCode::Period,
            R::Slash => KeyCode::Slash,
            R::BackQuote => KeyCode::Backquote,
            R::LeftBracket => KeyCode::LeftBracket,
            R::BackSlash | R::IntlBackslash => KeyCode::Backslash,
            R::RightBracket => KeyCode::RightBracket,
            R::Quote => KeyCode::Quote,
            R::F1 => KeyCode::F1,
            R::F2 => KeyCode::F2,
            R::F3 => KeyCode::F3,
            R::F4 => KeyCode::F4,
            R::F5 => KeyCode::F5,
            R::F6 => KeyCode::F6,
            R::F7 => KeyCode::F7,
            R::F8 => KeyCode::F8,
            R::F9 => KeyCode::F9,
            R::F10 => KeyCode::F10,
            R::F11 => KeyCode::F11,
            R::F12 => KeyCode::F12,
            R::ControlLeft | R::ControlRight => KeyCode::Control,
            R::Alt | R::AltGr => KeyCode::Alt,
            R::ShiftLeft | R::ShiftRight => KeyCode::Shift,
            R::MetaLeft | R::MetaRight => KeyCode::Meta,
            R::UpArrow => KeyCode::Up,
            R::DownArrow => KeyCode::Down,
            R::LeftArrow => KeyCode::Left,
            R::RightArrow => KeyCode::Right,
            R::Home => KeyCode::Home,
            R::End => KeyCode::End,
            R::PageUp => KeyCode::PageUp,
            R::PageDown => KeyCode::PageDown,
            R::Backspace => KeyCode::Backspace,
            R::Delete => KeyCode::Delete,
            R::Return | R::KpReturn => KeyCode::Enter,
            R::Tab => KeyCode::Tab,
            R::Escape => KeyCode::Escape,
            R::Space => KeyCode::Space,
            R::Kp0 => KeyCode::Numpad0,
            R::Kp1 => KeyCode::Numpad1,
            R::Kp2 => KeyCode::Numpad2,
            R::Kp3 => KeyCode::Numpad3,
            R::Kp4 => KeyCode::Numpad4,
            R::Kp5 => KeyCode::Numpad5,
            R::Kp6 => KeyCode::Numpad6,
            R::Kp7 => KeyCode::Numpad7,
            R::Kp8 => KeyCode::Numpad8,
            R::Kp9 => KeyCode::Numpad9,
            R::KpPlus => KeyCode::NumpadAdd,
            R::KpMinus => KeyCode::NumpadSubtract,
            R::KpMultiply => KeyCode::NumpadMultiply,
            R::KpDivide => KeyCode::NumpadDivide,
            R::KpDelete => KeyCode::NumpadDecimal,
            R::Insert => KeyCode::Insert,
            R::PrintScreen => KeyCode::PrintScreen,
            R::ScrollLock => KeyCode::ScrollLock,
            R::Pause => KeyCode::Pause,
            R::CapsLock => KeyCode::CapsLock,
            R::NumLock => KeyCode::NumLock,
            R::Unknown(code) => return native::from_code(code),
            R::Function => return None,
        };
        Some(code)
    }
}

/// Keys whose enigo variant or listener code differs per platform.
///
/// Listener codes are virtual-key codes on Windows, X keycodes on Linux and
/// `CGKeyCode`s on macOS; `Key::Other` takes a VK code, a keysym and a
/// `CGKeyCode` respectively.
#[cfg(target_os = "windows")]
mod native {
    use super::{KeyCode, FUNCTION_KEYS};
    use enigo::Key;

    pub fn to_enigo(key: KeyCode) -> Option<Key> {
        let key = match key {
            KeyCode::F21 => Key::F21,
            KeyCode::F22 => Key::F22,
            KeyCode::F23 => Key::F23,
            KeyCode::F24 => Key::F24,
            KeyCode::Numpad0 => Key::Numpad0,
            KeyCode::Numpad1 => Key::Numpad1,
            KeyCode::Numpad2 => Key::Numpad2,
            KeyCode::Numpad3 => Key::Numpad3,
            KeyCode::Numpad4 => Key::Numpad4,
            KeyCode::Numpad5 => Key::Numpad5,
            KeyCode::Numpad6 => Key::Numpad6,
            KeyCode::Numpad7 => Key::Numpad7,
            KeyCode::Numpad8 => Key::Numpad8,
            KeyCode::Numpad9 => Key::Numpad9,
            KeyCode::NumpadAdd => Key::Add,
            KeyCode::NumpadSubtract => Key::Subtract,
            KeyCode::NumpadMultiply => Key::Multiply,
            KeyCode::NumpadDivide => Key::Divide,
            KeyCode::NumpadDecimal => Key::Decimal,
            KeyCode::Insert => Key::Insert,
            KeyCode::PrintScreen => Key::Snapshot,
            KeyCode::ScrollLock => Key::Scroll,
            KeyCode::Pause => Key::Pause,
            KeyCode::NumLock => Key::Numlock,
            KeyCode::Apps => Key::Apps,
            _ => return None,
        };
        Some(key)
    }

    pub fn from_code(code: u32) -> Option<KeyCode> {
        match code {
            0x7C..=0x87 => Some(FUNCTION_KEYS[12 + (code - 0x7C) as usize]),
            0x5D => Some(KeyCode::Apps),
            _ => None,
        }
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
mod native {
    use super::{KeyCode, FUNCTION_KEYS};
    use enigo::Key;

    const XK_MENU: u32 = 0xff67;
    const XK_KP_0: u32 = 0xffb0;

    pub fn to_enigo(key: KeyCode) -> Option<Key> {
        let key = match key {
            KeyCode::F21 => Key::F21,
            KeyCode::F22 => Key::F22,
            KeyCode::F23 => Key::F23,
            KeyCode::F24 => Key::F24,
            KeyCode::Numpad0 => Key::Other(XK_KP_0),
            KeyCode::Numpad1 => Key::Other(XK_KP_0 + 1),
            KeyCode::Numpad2 => Key::Other(XK_KP_0 + 2),
            KeyCode::Numpad3 => Key::Other(XK_KP_0 + 3),
            KeyCode::Numpad4 => Key::Other(XK_KP_0 + 4),
            KeyCode::Numpad5 => Key::Other(XK_KP_0 + 5),
            KeyCode::Numpad6 => Key::Other(XK_KP_0 + 6),
            KeyCode::Numpad7 => Key::Other(XK_KP_0 + 7),
            KeyCode::Numpad8 => Key::Other(XK_KP_0 + 8),
            KeyCode::Numpad9 => Key::Other(XK_KP_0 + 9),
            KeyCode::NumpadAdd => Key::Other(0xffab),
            KeyCode::NumpadSubtract => Key::Other(0xffad),
            KeyCode::NumpadMultiply => Key::Other(0xffaa),
            KeyCode::NumpadDivide => Key::Other(0xffaf),
            KeyCode::NumpadDecimal => Key::Other(0xffae),
            KeyCode::Insert => Key::Insert,
            KeyCode::PrintScreen => Key::Print,
            KeyCode::ScrollLock => Key::ScrollLock,
            KeyCode::Pause => Key::Pause,
            KeyCode::NumLock => Key::Numlock,
            KeyCode::Apps => Key::Other(XK_MENU),
            _ => return None,
        };
        Some(key)
    }

    pub fn from_code(code: u32) -> Option<KeyCode> {
        match code {
            191..=202 => Some(FUNCTION_KEYS[12 + (code - 191) as usize]),
            135 => Some(KeyCode::Apps),
            _ => None,
        }
    }
}

#[cfg(target_os = "macos")]
mod native {
    use super::KeyCode;
    use enigo::Key;

    const KEYPAD: [(KeyCode, u32); 15] = [
        (KeyCode::Numpad0, 0x52),
        (KeyCode::Numpad1, 0x53),
        (KeyCode::Numpad2, 0x54),
        (KeyCode::Numpad3, 0x55),
        (KeyCode::Numpad4, 0x56),
        (KeyCode::Numpad5, 0x57),
        (KeyCode::Numpad6, 0x58),
        (KeyCode::Numpad7, 0x59),
        (KeyCode::Numpad8, 0x5B),
        (KeyCode::Numpad9, 0x5C),
        (KeyCode::NumpadAdd, 0x45),
        (KeyCode::NumpadSubtract, 0x4E),
        (KeyCode::NumpadMultiply, 0x43),
        (KeyCode::NumpadDivide, 0x4B),
        (KeyCode::NumpadDecimal, 0x41),
    ];

    const KEYPAD_CLEAR: u32 = 0x47;
    const CONTEXT_MENU: u32 = 0x6E;

    pub fn to_enigo(key: KeyCode) -> Option<Key> {
        if let Some((_, code)) = KEYPAD.iter().find(|(k, _)| *k == key) {
            return Some(Key::Other(*code));
        }
        match key {
            KeyCode::Insert => Some(Key::Help),
            KeyCode::NumLock => Some(Key::Other(KEYPAD_CLEAR)),
            KeyCode::Apps => Some(Key::Other(CONTEXT_MENU)),
            // No F21-F24, Print Screen, Scroll Lock or Pause on Mac keyboards
            _ => None,
        }
    }

    pub fn from_code(code: u32) -> Option<KeyCode> {
        if let Some((key, _)) = KEYPAD.iter().find(|(_, c)| *c == code) {
            return Some(*key);
        }
        let key = match code {
            0x69 => KeyCode::F13,
            0x6B => KeyCode::F14,
            0x71 => KeyCode::F15,
            0x6A => KeyCode::F16,
            0x40 => KeyCode::F17,
            0x4F => KeyCode::F18,
            0x50 => KeyCode::F19,
            0x5A => KeyCode::F20,
            0x72 => KeyCode::Insert,
            0x73 => KeyCode::Home,
            0x77 => KeyCode::End,
            0x74 => KeyCode::PageUp,
            0x79 => KeyCode::PageDown,
            0x75 => KeyCode::Delete,
            0x4C => KeyCode::Enter,
            0x3E => KeyCode::Control,
            KEYPAD_CLEAR => KeyCode::NumLock,
            CONTEXT_MENU => KeyCode::Apps,
            _ => return None,
        };
        Some(key)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown key: {0}")]
pub struct UnknownKey(pub String);

impl FromStr for KeyCode {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();

        let mut chars = lower.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(key) = KeyCode::from_char(c) {
                return Ok(key);
            }
        }

        if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<usize>().ok()) {
            if (1..=FUNCTION_KEYS.len()).contains(&n) {
                return Ok(FUNCTION_KEYS[n - 1]);
            }
        }

        let keypad = ["num ", "numpad", "kp"]
            .iter()
            .find_map(|prefix| lower.strip_prefix(prefix))
            .map(str::trim);
        if let Some(rest) = keypad {
            let key = match rest {
                "+" | "add" => Some(KeyCode::NumpadAdd),
                "-" | "subtract" => Some(KeyCode::NumpadSubtract),
                "*" | "multiply" => Some(KeyCode::NumpadMultiply),
                "/" | "divide" => Some(KeyCode::NumpadDivide),
                "." | "decimal" => Some(KeyCode::NumpadDecimal),
                "lock" => Some(KeyCode::NumLock),
                digit => digit
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| NUMPAD_DIGITS.get(n).copied()),
            };
            if let Some(key) = key {
                return Ok(key);
            }
        }

        let key = match lower.as_str() {
            "ctrl" | "control" => KeyCode::Control,
            "alt" => KeyCode::Alt,
            "shift" => KeyCode::Shift,
            "meta" | "win" | "cmd" | "command" => KeyCode::Meta,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "page up" | "pgup" => KeyCode::PageUp,
            "pagedown" | "page down" | "pgdn" => KeyCode::PageDown,
            "backspace" | "bs" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "enter" | "return" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "escape" | "esc" => KeyCode::Escape,
            "space" => KeyCode::Space,
            "insert" | "ins" => KeyCode::Insert,
            "printscreen" | "print screen" | "prtsc" => KeyCode::PrintScreen,
            "scrolllock" | "scroll lock" => KeyCode::ScrollLock,
            "pause" | "break" | "pause break" => KeyCode::Pause,
            "capslock" | "caps lock" => KeyCode::CapsLock,
            "numlock" => KeyCode::NumLock,
            "apps" | "menu" => KeyCode::Apps,
            _ => return Err(UnknownKey(s.to_string())),
        };
        Ok(key)
    }
}
