//! Clock interrupt control
//!
//! The protocol engine runs its bit state machine on every falling edge of
//! the clock line. Before the host manipulates the lines itself it must stop
//! those edges from reaching the state machine.

/// Falling-edge interrupt on the PS/2 clock line
///
/// `attach` enables delivery to whatever handler the board bound to the
/// vector; `detach` masks it. Both are called from foreground code only.
pub trait EdgeInterrupt {
    /// Enable falling-edge interrupts on the clock pin
    fn attach(&mut self);

    /// Disable falling-edge interrupts on the clock pin
    fn detach(&mut self);
}

impl<T: EdgeInterrupt + ?Sized> EdgeInterrupt for &mut T {
    fn attach(&mut self) {
        (**self).attach();
    }

    fn detach(&mut self) {
        (**self).detach();
    }
}
