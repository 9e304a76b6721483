//! Byte stream and command traits
//!
//! The decoder and key state manager are written against these traits
//! rather than against [`crate::ProtocolEngine`], so they can be driven by a
//! recorded byte sequence in tests.

/// Source of bytes received from the device
pub trait ByteStream {
    /// Number of bytes ready to read
    fn available(&self) -> usize;

    /// Take the oldest byte, if any
    fn read(&mut self) -> Option<u8>;
}

/// Sink for host-to-device command bytes
pub trait CommandPort {
    /// Start sending a byte and return immediately
    fn write(&mut self, byte: u8);

    /// Send a byte and block until the device acknowledged it
    ///
    /// Returns `true` once the send completed.
    fn write_and_wait(&mut self, byte: u8) -> bool;
}

impl<T: ByteStream + ?Sized> ByteStream for &mut T {
    fn available(&self) -> usize {
        (**self).available()
    }

    fn read(&mut self) -> Option<u8> {
        (**self).read()
    }
}

impl<T: CommandPort + ?Sized> CommandPort for &mut T {
    fn write(&mut self, byte: u8) {
        (**self).write(byte);
    }

    fn write_and_wait(&mut self, byte: u8) -> bool {
        (**self).write_and_wait(byte)
    }
}
