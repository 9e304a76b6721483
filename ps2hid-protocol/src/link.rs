//! Interrupt-shared half of the PS/2 link
//!
//! Everything the clock interrupt touches lives here. The lines, the bit
//! state machine and the producer end of the byte ring sit behind one
//! critical-section mutex; foreground code only reaches them through
//! [`Ps2Link::with_wire`], which masks interrupts for the duration.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::spsc::{Producer, Queue};
use portable_atomic::{AtomicU16, Ordering};
use ps2hid_hal::Ps2Lines;

use crate::diag::Diagnostics;
use crate::fault::Fault;
use crate::frame::{Action, BitFrame, LinkState};
use crate::isr::ClockEdgeHandler;

/// Slots in the byte ring; one is kept free, so 16 bytes fit
pub const QUEUE_SLOTS: usize = 17;

/// Byte ring shared between the link and the engine
pub type ByteQueue = Queue<u8, QUEUE_SLOTS>;

struct Wire<'a, L> {
    lines: L,
    frame: BitFrame,
    bytes: Producer<'a, u8, QUEUE_SLOTS>,
}

impl<L: Ps2Lines> Wire<'_, L> {
    fn step(&mut self) -> Option<Fault> {
        let bit = self.frame.state().samples_data() && self.lines.data_is_high();
        match self.frame.clock(bit) {
            Action::Drive(level) => self.lines.set_data(level),
            Action::Release => self.lines.release_data(),
            Action::Received(byte) => {
                // Full ring: keep what is queued, drop the newcomer
                if self.bytes.enqueue(byte).is_err() {
                    return Some(Fault::ByteBufferOverflow);
                }
            }
            Action::Fault(fault) => return Some(fault),
            Action::None | Action::Sent => {}
        }
        None
    }
}

/// Interrupt-side state of one PS/2 port
pub struct Ps2Link<'a, L> {
    wire: Mutex<RefCell<Wire<'a, L>>>,
    pulses: AtomicU16,
    diagnostics: Option<&'a (dyn Diagnostics + Sync)>,
}

impl<'a, L: Ps2Lines> Ps2Link<'a, L> {
    /// Take ownership of the lines and the producer end of the byte ring
    pub fn new(
        lines: L,
        bytes: Producer<'a, u8, QUEUE_SLOTS>,
        diagnostics: Option<&'a (dyn Diagnostics + Sync)>,
    ) -> Self {
        Self {
            wire: Mutex::new(RefCell::new(Wire {
                lines,
                frame: BitFrame::new(),
                bytes,
            })),
            pulses: AtomicU16::new(0),
            diagnostics,
        }
    }

    /// Interrupt body: one falling edge on the clock line
    pub fn on_clock_edge(&self) {
        self.pulses.fetch_add(1, Ordering::Relaxed);
        let fault = critical_section::with(|cs| self.wire.borrow_ref_mut(cs).step());
        if let (Some(fault), Some(sink)) = (fault, self.diagnostics) {
            sink.fault(fault);
        }
    }

    pub fn state(&self) -> LinkState {
        critical_section::with(|cs| self.wire.borrow_ref(cs).frame.state())
    }

    /// Clock edges seen since construction or the last [`Ps2Link::reset_pulses`]
    pub fn clock_pulses(&self) -> u16 {
        self.pulses.load(Ordering::Relaxed)
    }

    pub fn reset_pulses(&self) {
        self.pulses.store(0, Ordering::Relaxed);
    }

    pub fn diagnostics(&self) -> Option<&'a (dyn Diagnostics + Sync)> {
        self.diagnostics
    }

    /// Run `f` on the lines and frame with interrupts masked
    pub fn with_wire<R>(&self, f: impl FnOnce(&mut L, &mut BitFrame) -> R) -> R {
        critical_section::with(|cs| {
            let mut wire = self.wire.borrow_ref_mut(cs);
            let wire = &mut *wire;
            f(&mut wire.lines, &mut wire.frame)
        })
    }
}

impl<L: Ps2Lines> ClockEdgeHandler for Ps2Link<'_, L> {
    fn on_clock_edge(&self) {
        Ps2Link::on_clock_edge(self);
    }
}
