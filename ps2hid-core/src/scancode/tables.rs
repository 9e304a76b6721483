//! Scan code set 2 lookup tables
//!
//! Indexed by the raw byte from the keyboard. Bytes without a key map to
//! [`KeyCode::INVALID`].

use crate::keycode::KeyCode;

const fn build(entries: &[(u8, KeyCode)]) -> [KeyCode; 256] {
    let mut table = [KeyCode::INVALID; 256];
    let mut i = 0;
    while i < entries.len() {
        table[entries[i].0 as usize] = entries[i].1;
        i += 1;
    }
    table
}

/// Single-byte make/break codes
pub static SET2: [KeyCode; 256] = build(&[
    (0x01, KeyCode::F9),
    (0x03, KeyCode::F5),
    (0x04, KeyCode::F3),
    (0x05, KeyCode::F1),
    (0x06, KeyCode::F2),
    (0x07, KeyCode::F12),
    (0x09, KeyCode::F10),
    (0x0A, KeyCode::F8),
    (0x0B, KeyCode::F6),
    (0x0C, KeyCode::F4),
    (0x0D, KeyCode::TAB),
    (0x0E, KeyCode::BACK_QUOTE),
    (0x11, KeyCode::LALT),
    (0x12, KeyCode::LSHIFT),
    (0x14, KeyCode::LCTRL),
    (0x15, KeyCode::Q),
    (0x16, KeyCode::KEY_1),
    (0x1A, KeyCode::Z),
    (0x1B, KeyCode::S),
    (0x1C, KeyCode::A),
    (0x1D, KeyCode::W),
    (0x1E, KeyCode::KEY_2),
    (0x21, KeyCode::C),
    (0x22, KeyCode::X),
    (0x23, KeyCode::D),
    (0x24, KeyCode::E),
    (0x25, KeyCode::KEY_4),
    (0x26, KeyCode::KEY_3),
    (0x29, KeyCode::SPACE),
    (0x2A, KeyCode::V),
    (0x2B, KeyCode::F),
    (0x2C, KeyCode::T),
    (0x2D, KeyCode::R),
    (0x2E, KeyCode::KEY_5),
    (0x31, KeyCode::N),
    (0x32, KeyCode::B),
    (0x33, KeyCode::H),
    (0x34, KeyCode::G),
    (0x35, KeyCode::Y),
    (0x36, KeyCode::KEY_6),
    (0x3A, KeyCode::M),
    (0x3B, KeyCode::J),
    (0x3C, KeyCode::U),
    (0x3D, KeyCode::KEY_7),
    (0x3E, KeyCode::KEY_8),
    (0x41, KeyCode::COMMA),
    (0x42, KeyCode::K),
    (0x43, KeyCode::I),
    (0x44, KeyCode::O),
    (0x45, KeyCode::KEY_0),
    (0x46, KeyCode::KEY_9),
    (0x49, KeyCode::PERIOD),
    (0x4A, KeyCode::SLASH),
    (0x4B, KeyCode::L),
    (0x4C, KeyCode::SEMICOLON),
    (0x4D, KeyCode::P),
    (0x4E, KeyCode::MINUS),
    (0x52, KeyCode::QUOTE),
    (0x54, KeyCode::OPEN_BRACKET),
    (0x55, KeyCode::EQUAL),
    (0x58, KeyCode::CAPS_LOCK),
    (0x59, KeyCode::RSHIFT),
    (0x5A, KeyCode::ENTER),
    (0x5B, KeyCode::CLOSE_BRACKET),
    (0x5D, KeyCode::BACKSLASH),
    (0x66, KeyCode::BACKSPACE),
    (0x69, KeyCode::KP_1),
    (0x6B, KeyCode::KP_4),
    (0x6C, KeyCode::KP_7),
    (0x70, KeyCode::KP_0),
    (0x71, KeyCode::KP_DOT),
    (0x72, KeyCode::KP_2),
    (0x73, KeyCode::KP_5),
    (0x74, KeyCode::KP_6),
    (0x75, KeyCode::KP_8),
    (0x76, KeyCode::ESC),
    (0x77, KeyCode::NUM_LOCK),
    (0x78, KeyCode::F11),
    (0x79, KeyCode::KP_ADD),
    (0x7A, KeyCode::KP_3),
    (0x7B, KeyCode::KP_SUBTRACT),
    (0x7C, KeyCode::KP_MULTIPLY),
    (0x7D, KeyCode::KP_9),
    (0x7E, KeyCode::SCROLL_LOCK),
    (0x83, KeyCode::F7),
]);

/// Codes following the 0xE0 extension prefix
pub static SET2_EXTENDED: [KeyCode; 256] = build(&[
    (0x11, KeyCode::RALT),
    (0x14, KeyCode::RCTRL),
    (0x1F, KeyCode::LGUI),
    (0x27, KeyCode::RGUI),
    (0x2F, KeyCode::APPLICATION),
    (0x37, KeyCode::POWER),
    (0x4A, KeyCode::KP_DIVIDE),
    (0x5A, KeyCode::KP_ENTER),
    (0x69, KeyCode::END),
    (0x6B, KeyCode::LEFT),
    (0x6C, KeyCode::HOME),
    (0x70, KeyCode::INSERT),
    (0x71, KeyCode::DELETE),
    (0x72, KeyCode::DOWN),
    (0x74, KeyCode::RIGHT),
    (0x75, KeyCode::UP),
    (0x7A, KeyCode::PAGE_DOWN),
    (0x7C, KeyCode::PRINT_SCREEN),
    (0x7D, KeyCode::PAGE_UP),
]);
