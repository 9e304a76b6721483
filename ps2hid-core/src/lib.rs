//! Board-agnostic keyboard logic on top of the PS/2 link
//!
//! This crate turns the byte stream from `ps2hid-protocol` into keyboard
//! state:
//!
//! - Keycodes numbered like the USB HID keyboard usage page
//! - Scan-code set 2 lookup tables
//! - Scan-code decoder (make/break/extended sequences and the Pause quirk)
//! - Key state manager (pressed-key bitmap, LEDs, HID-style reports)
//! - Keyboard configuration and a ready-made diagnostics log
//!
//! Each layer polls the one below through `available()`/`read()`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

pub mod config;
pub mod diagnostics;
pub mod keycode;
pub mod manager;
pub mod scancode;
pub mod transform;

pub use config::{ConfigError, KeyboardConfig};
pub use diagnostics::{DiagnosticLog, Histogram};
pub use keycode::{KeyCode, KeyEvent, KeyEventKind};
pub use manager::{KeyStateManager, Leds, Modifiers, Report};
pub use scancode::{DecoderState, ScanCodeDecoder};
pub use transform::{Identity, KeyTransform};

pub use ps2hid_protocol::{Diagnostics, Fault, Layer};
