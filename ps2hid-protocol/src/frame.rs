//! Bit-level frame state machine
//!
//! One call to [`BitFrame::clock`] per falling clock edge. Receive frames:
//! - START: 0
//! - DATA: 8 bits, LSB first
//! - PARITY: odd parity over DATA
//! - STOP: 1
//!
//! Send frames are primed from the foreground with [`BitFrame::prime`] and
//! then shifted out on the same edges, followed by the device's ACK bit.

use crate::fault::Fault;

/// Number of bits in a device-to-host frame
pub const FRAME_BITS: usize = 11;

/// Position within the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// Idle, expecting a start bit from the device
    WaitStart,
    /// Expecting data bit `n` (0..=7) from the device
    WaitData(u8),
    /// Expecting the parity bit
    WaitParity,
    /// Expecting the stop bit
    WaitStop,
    /// Driving data bit `n` (0..=7) to the device
    WaitSendData(u8),
    /// Driving the parity bit
    WaitSendParity,
    /// Releasing the data line for the stop bit
    WaitSendStop,
    /// Sampling the device's acknowledge bit
    WaitSendAck,
}

impl LinkState {
    /// A host-to-device send is in progress
    pub const fn is_sending(self) -> bool {
        matches!(
            self,
            Self::WaitSendData(_) | Self::WaitSendParity | Self::WaitSendStop | Self::WaitSendAck
        )
    }

    /// Between frames
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::WaitStart)
    }

    /// The next edge needs the level of the data line
    pub const fn samples_data(self) -> bool {
        !matches!(
            self,
            Self::WaitSendData(_) | Self::WaitSendParity | Self::WaitSendStop
        )
    }
}

/// Parity bit that makes the total count of 1-bits odd
pub const fn odd_parity(byte: u8) -> bool {
    byte.count_ones() % 2 == 0
}

/// Data line levels a device puts on the wire to send `byte`
pub fn device_frame(byte: u8) -> [bool; FRAME_BITS] {
    let mut bits = [false; FRAME_BITS];
    for (i, bit) in bits[1..9].iter_mut().enumerate() {
        *bit = byte & (1 << i) != 0;
    }
    bits[9] = odd_parity(byte);
    bits[10] = true;
    bits
}

/// What the line driver has to do after an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Nothing to do
    None,
    /// Put this level on the data line
    Drive(bool),
    /// Stop driving the data line
    Release,
    /// A complete byte arrived
    Received(u8),
    /// The device acknowledged the sent byte
    Sent,
    /// Frame dropped, machine back at [`LinkState::WaitStart`]
    Fault(Fault),
}

/// Receive/send shift register plus its state
#[derive(Debug, Clone)]
pub struct BitFrame {
    state: LinkState,
    current: u8,
    parity: bool,
}

impl Default for BitFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl BitFrame {
    pub const fn new() -> Self {
        Self {
            state: LinkState::WaitStart,
            current: 0,
            parity: true,
        }
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Drop any partial frame
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Load `byte` for sending on the following edges
    pub fn prime(&mut self, byte: u8) {
        self.state = LinkState::WaitSendData(0);
        self.current = byte;
        self.parity = true;
    }

    /// Advance one clock edge
    ///
    /// `bit` is the sampled data line. It is ignored while driving data,
    /// parity and stop bits.
    pub fn clock(&mut self, bit: bool) -> Action {
        match self.state {
            LinkState::WaitStart => {
                if bit {
                    return self.fail(Fault::InvalidStartBit);
                }
                self.current = 0;
                self.parity = true;
                self.state = LinkState::WaitData(0);
                Action::None
            }
            LinkState::WaitData(n) => {
                self.current >>= 1;
                if bit {
                    self.current |= 0x80;
                    self.parity = !self.parity;
                }
                self.state = if n == 7 {
                    LinkState::WaitParity
                } else {
                    LinkState::WaitData(n + 1)
                };
                Action::None
            }
            LinkState::WaitParity => {
                if bit != self.parity {
                    return self.fail(Fault::InvalidParityBit);
                }
                self.state = LinkState::WaitStop;
                Action::None
            }
            LinkState::WaitStop => {
                if !bit {
                    return self.fail(Fault::InvalidStopBit);
                }
                self.state = LinkState::WaitStart;
                Action::Received(self.current)
            }
            LinkState::WaitSendData(n) => {
                let out = self.current & 1 != 0;
                self.current >>= 1;
                if out {
                    self.parity = !self.parity;
                }
                self.state = if n == 7 {
                    LinkState::WaitSendParity
                } else {
                    LinkState::WaitSendData(n + 1)
                };
                Action::Drive(out)
            }
            LinkState::WaitSendParity => {
                self.state = LinkState::WaitSendStop;
                Action::Drive(self.parity)
            }
            LinkState::WaitSendStop => {
                self.state = LinkState::WaitSendAck;
                Action::Release
            }
            LinkState::WaitSendAck => {
                if bit {
                    return self.fail(Fault::InvalidAck);
                }
                self.state = LinkState::WaitStart;
                Action::Sent
            }
        }
    }

    fn fail(&mut self, fault: Fault) -> Action {
        self.reset();
        Action::Fault(fault)
    }
}
