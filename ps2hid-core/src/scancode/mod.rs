//! Scan code set 2 decoder
//!
//! Turns raw keyboard bytes into [`KeyEvent`]s:
//! - `XX`: make code
//! - `F0 XX`: break code
//! - `E0 XX` / `E0 F0 XX`: extended make/break
//! - `E1 14 77 E1 F0 14 F0 77`: Pause, which has no break code
//!
//! A prefix where a code byte was expected is a fault. The decoder reports
//! it, returns to [`DecoderState::WaitStart`], and the next byte starts a
//! fresh sequence.

pub mod tables;

use heapless::spsc::Queue;
use ps2hid_protocol::{ByteStream, Diagnostics, Fault, Layer};

use crate::keycode::{KeyCode, KeyEvent, KeyEventKind};

pub use tables::{SET2, SET2_EXTENDED};

/// Break-code prefix
pub const BREAK_PREFIX: u8 = 0xF0;
/// Extended-code prefix
pub const EXTENDED_PREFIX: u8 = 0xE0;
/// First byte of the Pause sequence
pub const PAUSE_PREFIX: u8 = 0xE1;

const PAUSE_MARKER: u8 = 0x77;
const PAUSE_FILLER: [u8; 3] = [0x14, PAUSE_PREFIX, BREAK_PREFIX];

/// Slots in the event ring; 16 events fit
pub const EVENT_SLOTS: usize = 17;

/// Position within a scan code sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecoderState {
    WaitStart,
    WaitExtended,
    WaitBreak,
    WaitExtendedBreak,
    WaitFirst77,
    WaitSecond77,
}

/// Decoder reading from a byte source `S`
pub struct ScanCodeDecoder<'d, S> {
    source: S,
    state: DecoderState,
    events: Queue<KeyEvent, EVENT_SLOTS>,
    diagnostics: Option<&'d (dyn Diagnostics + Sync)>,
}

impl<'d, S> ScanCodeDecoder<'d, S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: DecoderState::WaitStart,
            events: Queue::new(),
            diagnostics: None,
        }
    }

    /// Send faults and availability samples to `sink`
    pub fn with_diagnostics(mut self, sink: &'d (dyn Diagnostics + Sync)) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Oldest decoded event
    pub fn read(&mut self) -> Option<KeyEvent> {
        self.events.dequeue()
    }

    /// Events decoded but not yet read, without pulling new bytes
    pub fn pending(&self) -> usize {
        self.events.len()
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn diagnostics(&self) -> Option<&'d (dyn Diagnostics + Sync)> {
        self.diagnostics
    }

    /// Forget the partial sequence and all unread events
    pub fn end(&mut self) {
        self.state = DecoderState::WaitStart;
        while self.events.dequeue().is_some() {}
    }

    /// Decode one byte
    pub fn feed(&mut self, byte: u8) {
        match self.state {
            DecoderState::WaitStart => match byte {
                BREAK_PREFIX => self.state = DecoderState::WaitBreak,
                EXTENDED_PREFIX => self.state = DecoderState::WaitExtended,
                PAUSE_PREFIX => self.state = DecoderState::WaitFirst77,
                _ => self.emit(SET2[byte as usize], KeyEventKind::Pressed),
            },
            DecoderState::WaitExtended => match byte {
                EXTENDED_PREFIX => self.fail(Fault::ExtendedWhileExtended),
                BREAK_PREFIX => self.state = DecoderState::WaitExtendedBreak,
                _ => {
                    self.state = DecoderState::WaitStart;
                    self.emit(SET2_EXTENDED[byte as usize], KeyEventKind::Pressed);
                }
            },
            DecoderState::WaitBreak => match byte {
                BREAK_PREFIX | EXTENDED_PREFIX => self.fail(Fault::PrefixWhileBreak),
                _ => {
                    self.state = DecoderState::WaitStart;
                    self.emit(SET2[byte as usize], KeyEventKind::Released);
                }
            },
            DecoderState::WaitExtendedBreak => match byte {
                BREAK_PREFIX | EXTENDED_PREFIX => self.fail(Fault::PrefixWhileExtendedBreak),
                _ => {
                    self.state = DecoderState::WaitStart;
                    self.emit(SET2_EXTENDED[byte as usize], KeyEventKind::Released);
                }
            },
            DecoderState::WaitFirst77 | DecoderState::WaitSecond77 => {
                if byte == PAUSE_MARKER {
                    if self.state == DecoderState::WaitFirst77 {
                        self.state = DecoderState::WaitSecond77;
                    } else {
                        self.state = DecoderState::WaitStart;
                        self.emit(KeyCode::PAUSE, KeyEventKind::Pressed);
                    }
                } else if !PAUSE_FILLER.contains(&byte) {
                    self.fail(Fault::InvalidPauseCode);
                }
            }
        }
    }

    fn emit(&mut self, code: KeyCode, kind: KeyEventKind) {
        // Bytes with no key (keyboard replies such as ACK 0xFA) end here
        if !code.is_valid() {
            return;
        }
        if self.events.enqueue(KeyEvent { code, kind }).is_err() {
            self.report(Fault::KeyBufferOverflow);
        }
    }

    fn fail(&mut self, fault: Fault) {
        self.state = DecoderState::WaitStart;
        self.report(fault);
    }

    fn report(&self, fault: Fault) {
        debug!("decoder: {}", fault);
        if let Some(sink) = self.diagnostics {
            sink.fault(fault);
        }
    }
}

impl<S: ByteStream> ScanCodeDecoder<'_, S> {
    /// Decode every byte the source has, then count unread events
    pub fn available(&mut self) -> usize {
        let mut count = self.source.available();
        while count > 0 {
            if let Some(byte) = self.source.read() {
                self.feed(byte);
            }
            count -= 1;
        }

        let pending = self.events.len();
        if let Some(sink) = self.diagnostics {
            sink.available(Layer::Decoder, pending);
        }
        pending
    }
}
