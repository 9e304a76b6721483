//! Recoverable faults
//!
//! Every fault in the stack is recovered where it happens: the owning state
//! machine goes back to idle and the in-flight frame or item is dropped.
//! Faults are only ever reported, never returned.

/// A recoverable fault raised by any layer of the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// Start bit was 1
    InvalidStartBit,
    /// Parity bit did not make the 1-bit count odd
    InvalidParityBit,
    /// Stop bit was 0
    InvalidStopBit,
    /// Device did not pull data low for the ACK bit after a send
    InvalidAck,
    /// Byte ring full, newest byte dropped
    ByteBufferOverflow,
    /// Extension prefix while already extended
    ExtendedWhileExtended,
    /// Prefix byte while waiting for a break code
    PrefixWhileBreak,
    /// Prefix byte while waiting for an extended break code
    PrefixWhileExtendedBreak,
    /// Unexpected byte inside the Pause make sequence
    InvalidPauseCode,
    /// Key event ring full, newest event dropped
    KeyBufferOverflow,
}

/// Broad class of a [`Fault`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// Bad bit on the wire
    Framing,
    /// Bytes arrived in an order the decoder cannot use
    Sequencing,
    /// A ring buffer was full
    Capacity,
}

impl Fault {
    /// Short human-readable description
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidStartBit => "Invalid start bit",
            Self::InvalidParityBit => "Invalid parity bit",
            Self::InvalidStopBit => "Invalid stop bit",
            Self::InvalidAck => "Invalid ACK",
            Self::ByteBufferOverflow => "Protocol buffer overflow",
            Self::ExtendedWhileExtended => "EXT while in EXT",
            Self::PrefixWhileBreak => "BRK/EXT while in BRK",
            Self::PrefixWhileExtendedBreak => "BRK/EXT while in EXT_BRK",
            Self::InvalidPauseCode => "Invalid code in Pause",
            Self::KeyBufferOverflow => "Keyboard buffer overflow",
        }
    }

    pub const fn kind(self) -> FaultKind {
        match self {
            Self::InvalidStartBit
            | Self::InvalidParityBit
            | Self::InvalidStopBit
            | Self::InvalidAck => FaultKind::Framing,
            Self::ExtendedWhileExtended
            | Self::PrefixWhileBreak
            | Self::PrefixWhileExtendedBreak
            | Self::InvalidPauseCode => FaultKind::Sequencing,
            Self::ByteBufferOverflow | Self::KeyBufferOverflow => FaultKind::Capacity,
        }
    }
}

impl core::fmt::Display for Fault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}
