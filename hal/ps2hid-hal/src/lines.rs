//! PS/2 line abstractions
//!
//! A PS/2 port is two open-collector lines, clock and data, each pulled up
//! to the supply. Either side may pull a line low; releasing it lets the
//! pull-up bring it back high.

use core::convert::Infallible;

use embedded_hal::digital::{InputPin, OutputPin};

/// The clock and data lines of a single PS/2 port
///
/// "Release" means stop driving the line (input with pull-up, or an
/// open-drain output set high). Implementations must be cheap: every method
/// except the request-to-send sequence is called from the clock interrupt.
pub trait Ps2Lines {
    /// Pull the clock line low
    fn drive_clock_low(&mut self);

    /// Stop driving the clock line
    fn release_clock(&mut self);

    /// Pull the data line low
    fn drive_data_low(&mut self);

    /// Stop driving the data line
    fn release_data(&mut self);

    /// Put one bit on the data line while sending to the device
    fn set_data(&mut self, high: bool) {
        if high {
            self.release_data();
        } else {
            self.drive_data_low();
        }
    }

    /// Sample the data line
    fn data_is_high(&mut self) -> bool;
}

/// [`Ps2Lines`] over two `embedded-hal` pins in open-drain mode
///
/// Setting an open-drain pin high releases the line, so a plain
/// `OutputPin` is enough for the clock. The data line must also be
/// readable. Pin errors must be [`Infallible`], which is the case for the
/// GPIO drivers of every common chip HAL.
pub struct OpenDrainLines<C, D> {
    clock: C,
    data: D,
}

impl<C, D> OpenDrainLines<C, D>
where
    C: OutputPin<Error = Infallible>,
    D: InputPin<Error = Infallible> + OutputPin<Error = Infallible>,
{
    /// Wrap the two pins
    pub fn new(clock: C, data: D) -> Self {
        Self { clock, data }
    }

    /// Give the pins back
    pub fn release(self) -> (C, D) {
        (self.clock, self.data)
    }
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

impl<C, D> Ps2Lines for OpenDrainLines<C, D>
where
    C: OutputPin<Error = Infallible>,
    D: InputPin<Error = Infallible> + OutputPin<Error = Infallible>,
{
    fn drive_clock_low(&mut self) {
        infallible(self.clock.set_low());
    }

    fn release_clock(&mut self) {
        infallible(self.clock.set_high());
    }

    fn drive_data_low(&mut self) {
        infallible(self.data.set_low());
    }

    fn release_data(&mut self) {
        infallible(self.data.set_high());
    }

    fn data_is_high(&mut self) -> bool {
        infallible(self.data.is_high())
    }
}
