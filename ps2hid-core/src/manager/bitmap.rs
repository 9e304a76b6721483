//! Pressed-key set

use crate::keycode::KeyCode;

/// One bit per possible keycode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBitmap([u8; 32]);

impl KeyBitmap {
    pub const fn new() -> Self {
        Self([0; 32])
    }

    pub fn set(&mut self, code: KeyCode) {
        self.0[code.0 as usize / 8] |= 1 << (code.0 % 8);
    }

    pub fn clear(&mut self, code: KeyCode) {
        self.0[code.0 as usize / 8] &= !(1 << (code.0 % 8));
    }

    pub fn contains(&self, code: KeyCode) -> bool {
        self.0[code.0 as usize / 8] & (1 << (code.0 % 8)) != 0
    }

    pub fn clear_all(&mut self) {
        self.0 = [0; 32];
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}
