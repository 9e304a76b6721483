//! Full keyboard stack over a simulated wire.
//!
//! The test plays the keyboard: it clocks scan code frames into the link and
//! acknowledges every command the host sends.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use embedded_hal::delay::DelayNs;
use heapless::spsc::Queue;
use ps2hid_core::{DiagnosticLog, KeyStateManager, KeyboardConfig, ScanCodeDecoder};
use ps2hid_hal::{EdgeInterrupt, Millis, Ps2Lines};
use ps2hid_protocol::{device_frame, ByteQueue, Diagnostics, LinkState, ProtocolEngine, Ps2Link};

#[derive(Default)]
pub struct Wire {
    clock_low: AtomicBool,
    host_data_low: AtomicBool,
    device_data_low: AtomicBool,
}

impl Wire {
    fn data_high(&self) -> bool {
        !self.host_data_low.load(Ordering::SeqCst) && !self.device_data_low.load(Ordering::SeqCst)
    }

    fn device_bit(&self, high: bool) {
        self.device_data_low.store(!high, Ordering::SeqCst);
    }
}

pub struct HostLines(&'static Wire);

impl Ps2Lines for HostLines {
    fn drive_clock_low(&mut self) {
        self.0.clock_low.store(true, Ordering::SeqCst);
    }

    fn release_clock(&mut self) {
        self.0.clock_low.store(false, Ordering::SeqCst);
    }

    fn drive_data_low(&mut self) {
        self.0.host_data_low.store(true, Ordering::SeqCst);
    }

    fn release_data(&mut self) {
        self.0.host_data_low.store(false, Ordering::SeqCst);
    }

    fn data_is_high(&mut self) -> bool {
        self.0.data_high()
    }
}

pub struct NoIrq;

impl EdgeInterrupt for NoIrq {
    fn attach(&mut self) {}
    fn detach(&mut self) {}
}

/// Millisecond counter the test moves by hand
pub struct Clock(pub &'static AtomicU32);

impl Millis for Clock {
    fn millis(&self) -> u32 {
        self.0.load(Ordering::SeqCst)
    }
}

pub type Link = Ps2Link<'static, HostLines>;

/// Keyboard side of host-to-device frames, run from the engine's poll delay
pub struct Keyboard {
    link: &'static Link,
    wire: &'static Wire,
    commands: &'static Mutex<Vec<u8>>,
    bits: Vec<bool>,
}

impl DelayNs for Keyboard {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, _ms: u32) {
        while self.link.state().is_sending() {
            let state = self.link.state();
            if state == LinkState::WaitSendAck {
                self.wire.device_bit(false);
            }
            self.link.on_clock_edge();
            self.wire.device_bit(true);
            match state {
                LinkState::WaitSendData(_) => self.bits.push(self.wire.data_high()),
                LinkState::WaitSendAck => {
                    let byte = self
                        .bits
                        .drain(..)
                        .enumerate()
                        .fold(0u8, |acc, (i, b)| acc | ((b as u8) << i));
                    self.commands.lock().unwrap().push(byte);
                }
                _ => {}
            }
        }
    }
}

pub type Engine = ProtocolEngine<'static, 'static, HostLines, NoIrq, Keyboard>;
pub type Manager = KeyStateManager<'static, Engine, Clock>;

pub struct Stack {
    pub wire: &'static Wire,
    pub link: &'static Link,
    pub log: &'static DiagnosticLog,
    pub commands: &'static Mutex<Vec<u8>>,
    pub now: &'static AtomicU32,
    pub manager: Manager,
}

impl Stack {
    pub fn new(config: KeyboardConfig) -> Self {
        let queue: &'static mut ByteQueue = Box::leak(Box::new(Queue::new()));
        let (producer, consumer) = queue.split();
        let wire: &'static Wire = Box::leak(Box::new(Wire::default()));
        let log: &'static DiagnosticLog = Box::leak(Box::new(DiagnosticLog::new()));
        let link: &'static Link = Box::leak(Box::new(Ps2Link::new(
            HostLines(wire),
            producer,
            Some(log as &(dyn Diagnostics + Sync)),
        )));
        let commands: &'static Mutex<Vec<u8>> = Box::leak(Box::new(Mutex::new(Vec::new())));
        let now: &'static AtomicU32 = Box::leak(Box::new(AtomicU32::new(0)));

        let keyboard = Keyboard {
            link,
            wire,
            commands,
            bits: Vec::new(),
        };
        let mut engine = ProtocolEngine::new(link, consumer, NoIrq, keyboard);
        engine.begin();
        let mut manager = KeyStateManager::new(ScanCodeDecoder::new(engine), Clock(now), config)
            .with_diagnostics(log);
        manager.begin();

        Self {
            wire,
            link,
            log,
            commands,
            now,
            manager,
        }
    }

    /// Clock raw data-line levels into the link, one edge each
    pub fn clock_bits(&self, bits: &[bool]) {
        for &bit in bits {
            self.wire.device_bit(bit);
            self.link.on_clock_edge();
        }
        self.wire.device_bit(true);
    }

    /// Keyboard sends well-formed frames
    pub fn keyboard_sends(&self, bytes: &[u8]) {
        for &byte in bytes {
            self.clock_bits(&device_frame(byte));
        }
    }

    /// Command bytes the keyboard acknowledged so far
    pub fn commands(&self) -> Vec<u8> {
        self.commands.lock().unwrap().clone()
    }

    pub fn advance(&self, ms: u32) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}
