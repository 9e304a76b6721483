//! Keycodes and key events
//!
//! Keycode values follow the USB HID keyboard/keypad usage page, so report
//! bytes can be handed to a HID stack without translation. Values
//! `0x00..0xA5` are ordinary keys, `0xE0..=0xE7` the eight modifiers.

/// A normalized key identifier
///
/// The default is [`KeyCode::NO_EVENT`], an empty report slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCode(pub u8);

impl KeyCode {
    pub const NO_EVENT: Self = Self(0x00);
    pub const ERROR_ROLL_OVER: Self = Self(0x01);
    pub const POST_FAIL: Self = Self(0x02);
    pub const ERROR_UNDEFINED: Self = Self(0x03);

    pub const A: Self = Self(0x04);
    pub const B: Self = Self(0x05);
    pub const C: Self = Self(0x06);
    pub const D: Self = Self(0x07);
    pub const E: Self = Self(0x08);
    pub const F: Self = Self(0x09);
    pub const G: Self = Self(0x0A);
    pub const H: Self = Self(0x0B);
    pub const I: Self = Self(0x0C);
    pub const J: Self = Self(0x0D);
    pub const K: Self = Self(0x0E);
    pub const L: Self = Self(0x0F);
    pub const M: Self = Self(0x10);
    pub const N: Self = Self(0x11);
    pub const O: Self = Self(0x12);
    pub const P: Self = Self(0x13);
    pub const Q: Self = Self(0x14);
    pub const R: Self = Self(0x15);
    pub const S: Self = Self(0x16);
    pub const T: Self = Self(0x17);
    pub const U: Self = Self(0x18);
    pub const V: Self = Self(0x19);
    pub const W: Self = Self(0x1A);
    pub const X: Self = Self(0x1B);
    pub const Y: Self = Self(0x1C);
    pub const Z: Self = Self(0x1D);

    pub const KEY_1: Self = Self(0x1E);
    pub const KEY_2: Self = Self(0x1F);
    pub const KEY_3: Self = Self(0x20);
    pub const KEY_4: Self = Self(0x21);
    pub const KEY_5: Self = Self(0x22);
    pub const KEY_6: Self = Self(0x23);
    pub const KEY_7: Self = Self(0x24);
    pub const KEY_8: Self = Self(0x25);
    pub const KEY_9: Self = Self(0x26);
    pub const KEY_0: Self = Self(0x27);

    pub const ENTER: Self = Self(0x28);
    pub const ESC: Self = Self(0x29);
    pub const BACKSPACE: Self = Self(0x2A);
    pub const TAB: Self = Self(0x2B);
    pub const SPACE: Self = Self(0x2C);
    pub const MINUS: Self = Self(0x2D);
    pub const EQUAL: Self = Self(0x2E);
    pub const OPEN_BRACKET: Self = Self(0x2F);
    pub const CLOSE_BRACKET: Self = Self(0x30);
    pub const BACKSLASH: Self = Self(0x31);
    pub const HASH: Self = Self(0x32);
    pub const SEMICOLON: Self = Self(0x33);
    pub const QUOTE: Self = Self(0x34);
    pub const BACK_QUOTE: Self = Self(0x35);
    pub const COMMA: Self = Self(0x36);
    pub const PERIOD: Self = Self(0x37);
    pub const SLASH: Self = Self(0x38);
    pub const CAPS_LOCK: Self = Self(0x39);

    pub const F1: Self = Self(0x3A);
    pub const F2: Self = Self(0x3B);
    pub const F3: Self = Self(0x3C);
    pub const F4: Self = Self(0x3D);
    pub const F5: Self = Self(0x3E);
    pub const F6: Self = Self(0x3F);
    pub const F7: Self = Self(0x40);
    pub const F8: Self = Self(0x41);
    pub const F9: Self = Self(0x42);
    pub const F10: Self = Self(0x43);
    pub const F11: Self = Self(0x44);
    pub const F12: Self = Self(0x45);

    pub const PRINT_SCREEN: Self = Self(0x46);
    pub const SCROLL_LOCK: Self = Self(0x47);
    pub const PAUSE: Self = Self(0x48);
    pub const INSERT: Self = Self(0x49);
    pub const HOME: Self = Self(0x4A);
    pub const PAGE_UP: Self = Self(0x4B);
    pub const DELETE: Self = Self(0x4C);
    pub const END: Self = Self(0x4D);
    pub const PAGE_DOWN: Self = Self(0x4E);
    pub const RIGHT: Self = Self(0x4F);
    pub const LEFT: Self = Self(0x50);
    pub const DOWN: Self = Self(0x51);
    pub const UP: Self = Self(0x52);

    pub const NUM_LOCK: Self = Self(0x53);
    pub const KP_DIVIDE: Self = Self(0x54);
    pub const KP_MULTIPLY: Self = Self(0x55);
    pub const KP_SUBTRACT: Self = Self(0x56);
    pub const KP_ADD: Self = Self(0x57);
    pub const KP_ENTER: Self = Self(0x58);
    pub const KP_1: Self = Self(0x59);
    pub const KP_2: Self = Self(0x5A);
    pub const KP_3: Self = Self(0x5B);
    pub const KP_4: Self = Self(0x5C);
    pub const KP_5: Self = Self(0x5D);
    pub const KP_6: Self = Self(0x5E);
    pub const KP_7: Self = Self(0x5F);
    pub const KP_8: Self = Self(0x60);
    pub const KP_9: Self = Self(0x61);
    pub const KP_0: Self = Self(0x62);
    pub const KP_DOT: Self = Self(0x63);

    pub const NON_US_BACKSLASH: Self = Self(0x64);
    pub const APPLICATION: Self = Self(0x65);
    pub const POWER: Self = Self(0x66);
    pub const KP_EQUAL: Self = Self(0x67);

    pub const F13: Self = Self(0x68);
    pub const F14: Self = Self(0x69);
    pub const F15: Self = Self(0x6A);
    pub const F16: Self = Self(0x6B);
    pub const F17: Self = Self(0x6C);
    pub const F18: Self = Self(0x6D);
    pub const F19: Self = Self(0x6E);
    pub const F20: Self = Self(0x6F);
    pub const F21: Self = Self(0x70);
    pub const F22: Self = Self(0x71);
    pub const F23: Self = Self(0x72);
    pub const F24: Self = Self(0x73);

    pub const EXECUTE: Self = Self(0x74);
    pub const HELP: Self = Self(0x75);
    pub const MENU: Self = Self(0x76);
    pub const SELECT: Self = Self(0x77);
    pub const STOP: Self = Self(0x78);
    pub const AGAIN: Self = Self(0x79);
    pub const UNDO: Self = Self(0x7A);
    pub const CUT: Self = Self(0x7B);
    pub const COPY: Self = Self(0x7C);
    pub const PASTE: Self = Self(0x7D);
    pub const FIND: Self = Self(0x7E);
    pub const MUTE: Self = Self(0x7F);
    pub const VOLUME_UP: Self = Self(0x80);
    pub const VOLUME_DOWN: Self = Self(0x81);
    pub const LOCKING_CAPS_LOCK: Self = Self(0x82);
    pub const LOCKING_NUM_LOCK: Self = Self(0x83);
    pub const LOCKING_SCROLL_LOCK: Self = Self(0x84);
    pub const KP_COMMA: Self = Self(0x85);
    pub const KP_EQUAL_SIGN: Self = Self(0x86);

    pub const INTL_1: Self = Self(0x87);
    pub const INTL_2: Self = Self(0x88);
    pub const INTL_3: Self = Self(0x89);
    pub const INTL_4: Self = Self(0x8A);
    pub const INTL_5: Self = Self(0x8B);
    pub const INTL_6: Self = Self(0x8C);
    pub const INTL_7: Self = Self(0x8D);
    pub const INTL_8: Self = Self(0x8E);
    pub const INTL_9: Self = Self(0x8F);
    pub const LANG_1: Self = Self(0x90);
    pub const LANG_2: Self = Self(0x91);
    pub const LANG_3: Self = Self(0x92);
    pub const LANG_4: Self = Self(0x93);
    pub const LANG_5: Self = Self(0x94);
    pub const LANG_6: Self = Self(0x95);
    pub const LANG_7: Self = Self(0x96);
    pub const LANG_8: Self = Self(0x97);
    pub const LANG_9: Self = Self(0x98);

    pub const ALT_ERASE: Self = Self(0x99);
    pub const SYS_REQ: Self = Self(0x9A);
    pub const CANCEL: Self = Self(0x9B);
    pub const CLEAR: Self = Self(0x9C);
    pub const PRIOR: Self = Self(0x9D);
    pub const RETURN: Self = Self(0x9E);
    pub const SEPARATOR: Self = Self(0x9F);
    pub const OUT: Self = Self(0xA0);
    pub const OPER: Self = Self(0xA1);
    pub const CLEAR_AGAIN: Self = Self(0xA2);
    pub const CRSEL: Self = Self(0xA3);
    pub const EXSEL: Self = Self(0xA4);

    pub const LCTRL: Self = Self(0xE0);
    pub const LSHIFT: Self = Self(0xE1);
    pub const LALT: Self = Self(0xE2);
    pub const LGUI: Self = Self(0xE3);
    pub const RCTRL: Self = Self(0xE4);
    pub const RSHIFT: Self = Self(0xE5);
    pub const RALT: Self = Self(0xE6);
    pub const RGUI: Self = Self(0xE7);

    /// No mapping for this scan code
    pub const INVALID: Self = Self(0xE8);

    /// End of the ordinary key range (exclusive)
    pub const NON_MODIFIER_END: u8 = 0xA5;

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_modifier(self) -> bool {
        self.0 >= Self::LCTRL.0 && self.0 <= Self::RGUI.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }

    /// Bit in the report's modifier byte, for the eight modifier keys
    pub const fn modifier_bit(self) -> Option<u8> {
        if self.is_modifier() {
            Some(1 << (self.0 - Self::LCTRL.0))
        } else {
            None
        }
    }
}

impl From<KeyCode> for u8 {
    fn from(code: KeyCode) -> u8 {
        code.0
    }
}

/// Whether a key went down or up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEventKind {
    Pressed,
    Released,
}

/// One decoded key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub code: KeyCode,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    pub const fn pressed(code: KeyCode) -> Self {
        Self {
            code,
            kind: KeyEventKind::Pressed,
        }
    }

    pub const fn released(code: KeyCode) -> Self {
        Self {
            code,
            kind: KeyEventKind::Released,
        }
    }

    pub const fn is_pressed(&self) -> bool {
        matches!(self.kind, KeyEventKind::Pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_range() {
        assert!(KeyCode::LCTRL.is_modifier());
        assert!(KeyCode::RGUI.is_modifier());
        assert!(!KeyCode::INVALID.is_modifier());
        assert!(!KeyCode::EXSEL.is_modifier());
    }

    #[test]
    fn test_modifier_bits() {
        assert_eq!(KeyCode::LCTRL.modifier_bit(), Some(0x01));
        assert_eq!(KeyCode::LSHIFT.modifier_bit(), Some(0x02));
        assert_eq!(KeyCode::RSHIFT.modifier_bit(), Some(0x20));
        assert_eq!(KeyCode::RGUI.modifier_bit(), Some(0x80));
        assert_eq!(KeyCode::A.modifier_bit(), None);
    }

    #[test]
    fn test_hid_values() {
        assert_eq!(u8::from(KeyCode::A), 0x04);
        assert_eq!(u8::from(KeyCode::KEY_0), 0x27);
        assert_eq!(u8::from(KeyCode::PAUSE), 0x48);
        assert_eq!(KeyCode::EXSEL.value() + 1, KeyCode::NON_MODIFIER_END);
    }

    #[test]
    fn test_event_constructors() {
        let down = KeyEvent::pressed(KeyCode::A);
        assert!(down.is_pressed());
        assert_eq!(KeyEvent::released(KeyCode::A).kind, KeyEventKind::Released);
    }
}
