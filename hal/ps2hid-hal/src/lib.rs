//! ps2hid Hardware Abstraction Layer
//!
//! This crate defines the small set of platform primitives the PS/2 stack
//! needs from a board. Chip-specific code implements these traits; the
//! protocol and key handling crates only ever see the traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  ps2hid-core (decoder, key state)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ps2hid-protocol (bit framing, ISR)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ps2hid-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           board / chip HAL pins
//! ```
//!
//! # Traits
//!
//! - [`lines::Ps2Lines`] - The clock and data lines of one PS/2 port
//! - [`irq::EdgeInterrupt`] - Attach/detach of the clock falling-edge vector
//! - [`time::Millis`] - Monotonic millisecond clock
//!
//! [`lines::OpenDrainLines`] adapts any pair of `embedded-hal` 1.0 pins
//! configured as open-drain outputs.

#![no_std]
#![deny(unsafe_code)]

pub mod irq;
pub mod lines;
pub mod time;

// Re-export key traits at crate root for convenience
pub use irq::EdgeInterrupt;
pub use lines::{OpenDrainLines, Ps2Lines};
pub use time::Millis;
