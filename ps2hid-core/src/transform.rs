//! Key remapping hook
//!
//! The key state manager passes every decoded event through a
//! [`KeyTransform`] before touching its state. Closures work directly:
//!
//! ```
//! use ps2hid_core::{KeyCode, KeyEvent, KeyTransform};
//!
//! // Swap CapsLock and left Control
//! let mut swap = |mut event: KeyEvent| {
//!     event.code = match event.code {
//!         KeyCode::CAPS_LOCK => KeyCode::LCTRL,
//!         KeyCode::LCTRL => KeyCode::CAPS_LOCK,
//!         other => other,
//!     };
//!     event
//! };
//! let out = swap.transform(KeyEvent::pressed(KeyCode::CAPS_LOCK));
//! assert_eq!(out.code, KeyCode::LCTRL);
//! ```

use crate::keycode::KeyEvent;

pub trait KeyTransform {
    fn transform(&mut self, event: KeyEvent) -> KeyEvent;
}

/// Passes events through unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl KeyTransform for Identity {
    fn transform(&mut self, event: KeyEvent) -> KeyEvent {
        event
    }
}

impl<F> KeyTransform for F
where
    F: FnMut(KeyEvent) -> KeyEvent,
{
    fn transform(&mut self, event: KeyEvent) -> KeyEvent {
        self(event)
    }
}
