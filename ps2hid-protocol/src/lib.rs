//! PS/2 Link Protocol
//!
//! This crate talks to one PS/2 device over its clock and data lines. The
//! device is bus master: it generates the clock, and the host samples or
//! drives the data line on every falling edge from an interrupt handler.
//!
//! # Frame Format
//!
//! Device-to-host and host-to-device frames share the same payload shape:
//! ```text
//! ┌───────┬──────────────────────┬────────┬──────┬─────┐
//! │ START │ DATA (LSB first)     │ PARITY │ STOP │ ACK │
//! │ 0     │ 8 bits               │ odd    │ 1    │ 0   │
//! └───────┴──────────────────────┴────────┴──────┴─────┘
//! ```
//! The ACK bit exists only when the host sends. Sending starts with a
//! request-to-send: both lines held low for about 100 µs.
//!
//! # Contexts
//!
//! [`Ps2Link`] is the interrupt-shared half. It owns the lines, the bit
//! state machine and the producer end of the byte ring. [`ProtocolEngine`]
//! is the foreground half that drains the ring and issues commands. Board
//! code routes the clock vector to the link through an [`IsrSlot`], usually
//! declared with [`ps2_clock_vector!`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

pub mod diag;
pub mod engine;
pub mod fault;
pub mod frame;
pub mod isr;
pub mod link;
pub mod stream;

#[cfg(test)]
pub(crate) mod mock;

pub use diag::{Diagnostics, Layer};
pub use engine::{ProtocolEngine, SEND_POLL_MS};
pub use fault::{Fault, FaultKind};
pub use frame::{device_frame, odd_parity, Action, BitFrame, LinkState, FRAME_BITS};
pub use isr::{BindError, ClockEdgeHandler, IsrSlot};
pub use link::{ByteQueue, Ps2Link, QUEUE_SLOTS};
pub use stream::{ByteStream, CommandPort};
