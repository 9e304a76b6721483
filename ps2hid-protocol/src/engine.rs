//! Foreground half of the PS/2 link
//!
//! The engine drains the byte ring filled by [`Ps2Link`] and sends command
//! bytes to the device. Sending is a request-to-send handshake done here,
//! after which the clock interrupt shifts the byte out.

use embedded_hal::delay::DelayNs;
use heapless::spsc::Consumer;
use ps2hid_hal::{EdgeInterrupt, Ps2Lines};

use crate::diag::Layer;
use crate::frame::LinkState;
use crate::link::{Ps2Link, QUEUE_SLOTS};
use crate::stream::{ByteStream, CommandPort};

/// Poll period while waiting for a send to finish, in milliseconds
///
/// A device may take up to 15 ms to start clocking and about 2 ms to clock
/// a frame.
pub const SEND_POLL_MS: u32 = 6;

/// How long both lines are held low to request a send, in microseconds
const REQUEST_TO_SEND_US: u32 = 100;

/// Foreground protocol engine for one PS/2 port
pub struct ProtocolEngine<'l, 'a, L, I, D> {
    link: &'l Ps2Link<'a, L>,
    bytes: Consumer<'a, u8, QUEUE_SLOTS>,
    irq: I,
    delay: D,
}

impl<'l, 'a, L, I, D> ProtocolEngine<'l, 'a, L, I, D>
where
    L: Ps2Lines,
    I: EdgeInterrupt,
    D: DelayNs,
{
    /// Pair the engine with its link and the consumer end of the same ring
    pub fn new(
        link: &'l Ps2Link<'a, L>,
        bytes: Consumer<'a, u8, QUEUE_SLOTS>,
        irq: I,
        delay: D,
    ) -> Self {
        Self {
            link,
            bytes,
            irq,
            delay,
        }
    }

    /// Release both lines and start taking clock edges
    pub fn begin(&mut self) {
        self.link.with_wire(|lines, frame| {
            lines.release_clock();
            lines.release_data();
            frame.reset();
        });
        self.irq.attach();
        debug!("ps2: link started");
    }

    /// Bytes waiting to be read
    pub fn available(&self) -> usize {
        let count = self.bytes.len();
        if let Some(sink) = self.link.diagnostics() {
            sink.available(Layer::Protocol, count);
        }
        count
    }

    /// Oldest received byte
    pub fn read(&mut self) -> Option<u8> {
        self.bytes.dequeue()
    }

    /// Start sending `byte` to the device without waiting for it
    ///
    /// Any frame the device was in the middle of sending is abandoned.
    pub fn write(&mut self, byte: u8) {
        trace!("ps2: write {=u8:#x}", byte);

        // A falling clock we cause ourselves must not reach the state machine
        self.irq.detach();
        self.link.with_wire(|lines, _| {
            lines.drive_clock_low();
            lines.drive_data_low();
        });
        self.delay.delay_us(REQUEST_TO_SEND_US);

        // The device stops clocking once it sees the request, so the frame
        // can be primed before the interrupt comes back.
        self.link.with_wire(|lines, frame| {
            frame.prime(byte);
            lines.release_clock();
        });
        self.irq.attach();
    }

    /// Send `byte` and busy-wait until the device clocked in the ACK bit
    ///
    /// There is no timeout: an unresponsive device blocks forever. Always
    /// returns `true`.
    pub fn write_and_wait(&mut self, byte: u8) -> bool {
        self.write(byte);
        while self.link.state().is_sending() {
            self.delay.delay_ms(SEND_POLL_MS);
        }
        true
    }

    /// [`ProtocolEngine::write_and_wait`] yielding to an async delay between polls
    pub async fn write_and_wait_async<A>(&mut self, byte: u8, delay: &mut A) -> bool
    where
        A: embedded_hal_async::delay::DelayNs,
    {
        self.write(byte);
        while self.link.state().is_sending() {
            delay.delay_ms(SEND_POLL_MS).await;
        }
        true
    }

    /// Stop taking clock edges and forget everything in flight
    pub fn end(&mut self) {
        self.irq.detach();
        self.link.with_wire(|lines, frame| {
            lines.release_clock();
            lines.release_data();
            frame.reset();
        });
        while self.bytes.dequeue().is_some() {}
        self.link.reset_pulses();
        debug!("ps2: link stopped");
    }

    pub fn state(&self) -> LinkState {
        self.link.state()
    }

    pub fn clock_pulses(&self) -> u16 {
        self.link.clock_pulses()
    }

    pub fn link(&self) -> &'l Ps2Link<'a, L> {
        self.link
    }
}

impl<L, I, D> ByteStream for ProtocolEngine<'_, '_, L, I, D>
where
    L: Ps2Lines,
    I: EdgeInterrupt,
    D: DelayNs,
{
    fn available(&self) -> usize {
        ProtocolEngine::available(self)
    }

    fn read(&mut self) -> Option<u8> {
        ProtocolEngine::read(self)
    }
}

impl<L, I, D> CommandPort for ProtocolEngine<'_, '_, L, I, D>
where
    L: Ps2Lines,
    I: EdgeInterrupt,
    D: DelayNs,
{
    fn write(&mut self, byte: u8) {
        ProtocolEngine::write(self, byte);
    }

    fn write_and_wait(&mut self, byte: u8) -> bool {
        ProtocolEngine::write_and_wait(self, byte)
    }
}
