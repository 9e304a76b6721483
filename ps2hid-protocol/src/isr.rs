//! Binding a clock interrupt vector to a link
//!
//! Interrupt vectors take no arguments, so the handler has to find its link
//! through a static. An [`IsrSlot`] is that static: one per vector, holding
//! at most one handler. [`ps2_clock_vector!`] declares the slot together
//! with the zero-argument function to call from the vector.
//!
//! ```ignore
//! ps2hid_protocol::ps2_clock_vector!(KEYBOARD_SLOT, keyboard_clock_edge);
//!
//! #[interrupt]
//! fn IO_IRQ_BANK0() {
//!     keyboard_clock_edge();
//! }
//!
//! // during init, once the link is 'static
//! KEYBOARD_SLOT.bind(link)?;
//! ```

use core::cell::Cell;

use critical_section::Mutex;

/// Anything that wants to be called on each falling clock edge
pub trait ClockEdgeHandler {
    fn on_clock_edge(&self);
}

/// Slot already holds a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BindError {
    AlreadyBound,
}

type Handler = &'static (dyn ClockEdgeHandler + Sync);

/// Per-vector handler registration
pub struct IsrSlot {
    handler: Mutex<Cell<Option<Handler>>>,
}

impl Default for IsrSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl IsrSlot {
    pub const fn new() -> Self {
        Self {
            handler: Mutex::new(Cell::new(None)),
        }
    }

    /// Route this vector to `handler`
    ///
    /// Fails if another handler is bound; call [`IsrSlot::unbind`] first.
    pub fn bind(&self, handler: Handler) -> Result<(), BindError> {
        critical_section::with(|cs| {
            let slot = self.handler.borrow(cs);
            if slot.get().is_some() {
                return Err(BindError::AlreadyBound);
            }
            slot.set(Some(handler));
            Ok(())
        })
    }

    /// Detach the current handler, returning it
    pub fn unbind(&self) -> Option<Handler> {
        critical_section::with(|cs| self.handler.borrow(cs).take())
    }

    pub fn is_bound(&self) -> bool {
        critical_section::with(|cs| self.handler.borrow(cs).get().is_some())
    }

    /// Forward one edge to the bound handler; no-op when unbound
    pub fn dispatch(&self) {
        let handler = critical_section::with(|cs| self.handler.borrow(cs).get());
        if let Some(handler) = handler {
            handler.on_clock_edge();
        }
    }
}

/// Declare an [`IsrSlot`] static and the function a vector should call
///
/// `ps2_clock_vector!(pub SLOT, handler_fn)` expands to a `static SLOT:
/// IsrSlot` and `fn handler_fn()` that dispatches through it.
#[macro_export]
macro_rules! ps2_clock_vector {
    ($vis:vis $slot:ident, $handler:ident) => {
        $vis static $slot: $crate::isr::IsrSlot = $crate::isr::IsrSlot::new();

        $vis fn $handler() {
            $slot.dispatch();
        }
    };
}
