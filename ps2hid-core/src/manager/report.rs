//! Report and LED value types
//!
//! Report layout:
//! ```text
//! ┌───────────┬──────────────────────────────┐
//! │ MODIFIERS │ KEYCODES                     │
//! │ 1B        │ 6B, 0 = empty slot           │
//! └───────────┴──────────────────────────────┘
//! ```
//! Modifier bits from low to high: LCtrl, LShift, LAlt, LGui, RCtrl,
//! RShift, RAlt, RGui. With more than six keys down every slot holds
//! [`KeyCode::ERROR_ROLL_OVER`].

use crate::keycode::KeyCode;

/// Number of keycode slots in a report
pub const REPORT_KEYS: usize = 6;

/// Modifier byte of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const LCTRL: u8 = 1 << 0;
    pub const LSHIFT: u8 = 1 << 1;
    pub const LALT: u8 = 1 << 2;
    pub const LGUI: u8 = 1 << 3;
    pub const RCTRL: u8 = 1 << 4;
    pub const RSHIFT: u8 = 1 << 5;
    pub const RALT: u8 = 1 << 6;
    pub const RGUI: u8 = 1 << 7;

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, mask: u8) -> bool {
        self.0 & mask != 0
    }

    pub fn insert(&mut self, mask: u8) {
        self.0 |= mask;
    }
}

/// Keyboard LED state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Leds(pub u8);

impl Leds {
    pub const SCROLL_LOCK: u8 = 1 << 0;
    pub const NUM_LOCK: u8 = 1 << 1;
    pub const CAPS_LOCK: u8 = 1 << 2;

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, mask: u8) -> bool {
        self.0 & mask != 0
    }

    /// Replace the bits selected by `mask` with those of `values`
    pub const fn merge(self, mask: u8, values: u8) -> Self {
        Self((self.0 & !mask) | (mask & values))
    }

    /// LED bit toggled by releasing `code`
    pub const fn for_lock_key(code: KeyCode) -> Option<u8> {
        match code {
            KeyCode::SCROLL_LOCK => Some(Self::SCROLL_LOCK),
            KeyCode::NUM_LOCK => Some(Self::NUM_LOCK),
            KeyCode::CAPS_LOCK => Some(Self::CAPS_LOCK),
            _ => None,
        }
    }
}

/// Snapshot of the keyboard for a HID host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    pub modifiers: Modifiers,
    pub keycodes: [KeyCode; REPORT_KEYS],
}

impl Report {
    pub fn is_shift_pressed(&self) -> bool {
        self.modifiers.contains(Modifiers::LSHIFT | Modifiers::RSHIFT)
    }

    pub fn is_control_pressed(&self) -> bool {
        self.modifiers.contains(Modifiers::LCTRL | Modifiers::RCTRL)
    }

    pub fn is_alt_pressed(&self) -> bool {
        self.modifiers.contains(Modifiers::LALT | Modifiers::RALT)
    }

    pub fn is_gui_pressed(&self) -> bool {
        self.modifiers.contains(Modifiers::LGUI | Modifiers::RGUI)
    }

    /// `code` is in the report, as a modifier bit or a keycode slot
    pub fn is_key_pressed(&self, code: KeyCode) -> bool {
        match code.modifier_bit() {
            Some(bit) => self.modifiers.contains(bit),
            None => code != KeyCode::NO_EVENT && self.keycodes.contains(&code),
        }
    }

    /// Too many keys down to list them
    pub fn is_rollover(&self) -> bool {
        self.keycodes.iter().all(|&k| k == KeyCode::ERROR_ROLL_OVER)
    }

    /// Modifier byte followed by the six keycodes
    pub fn to_bytes(&self) -> [u8; 7] {
        let mut out = [0; 7];
        out[0] = self.modifiers.bits();
        for (slot, code) in out[1..].iter_mut().zip(self.keycodes) {
            *slot = code.0;
        }
        out
    }

    /// HID boot protocol input report: modifiers, reserved, six keycodes
    pub fn to_boot_report(&self) -> [u8; 8] {
        let bytes = self.to_bytes();
        let mut out = [0; 8];
        out[0] = bytes[0];
        out[2..].copy_from_slice(&bytes[1..]);
        out
    }
}
