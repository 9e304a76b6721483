//! Simulated PS/2 wire shared by the integration tests.
//!
//! The wire is two open-collector lines modelled with atomics. The test plays
//! the device: it puts bits on the data line and calls the link's edge
//! handler the way the clock interrupt would.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use embedded_hal::delay::DelayNs;
use heapless::spsc::Queue;
use ps2hid_hal::{EdgeInterrupt, Ps2Lines};
use ps2hid_protocol::{
    device_frame, ByteQueue, Diagnostics, Fault, Layer, LinkState, ProtocolEngine, Ps2Link,
};

#[derive(Default)]
pub struct Wire {
    clock_low: AtomicBool,
    host_data_low: AtomicBool,
    device_data_low: AtomicBool,
}

impl Wire {
    pub fn data_high(&self) -> bool {
        !self.host_data_low.load(Ordering::SeqCst) && !self.device_data_low.load(Ordering::SeqCst)
    }

    pub fn device_bit(&self, high: bool) {
        self.device_data_low.store(!high, Ordering::SeqCst);
    }

    pub fn clock_held(&self) -> bool {
        self.clock_low.load(Ordering::SeqCst)
    }
}

pub struct HostLines(pub &'static Wire);

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

#[derive(Default)]
pub struct Recorder {
    pub faults: Mutex<Vec<Fault>>,
}

impl Recorder {
    pub fn faults(&self) -> Vec<Fault> {
        self.faults.lock().unwrap().clone()
    }
}

impl Diagnostics for Recorder {
    fn fault(&self, fault: Fault) {
        self.faults.lock().unwrap().push(fault);
    }

    fn available(&self, _layer: Layer, _count: usize) {}
}

pub struct NoIrq;

impl EdgeInterrupt for NoIrq {
    fn attach(&mut self) {}
    fn detach(&mut self) {}
}

pub type Link = Ps2Link<'static, HostLines>;

/// Delay that acts as an always-acknowledging device
pub struct AckingDevice {
    pub link: &'static Link,
    pub wire: &'static Wire,
    pub sent: &'static Mutex<Vec<u8>>,
    bits: Vec<bool>,
}

impl AckingDevice {
    pub fn new(link: &'static Link, wire: &'static Wire, sent: &'static Mutex<Vec<u8>>) -> Self {
        Self {
            link,
            wire,
            sent,
            bits: Vec::new(),
        }
    }
}

impl DelayNs for AckingDevice {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, _ms: u32) {
        while self.link.state().is_sending() {
            let state = self.link.state();
            if state == LinkState::WaitSendAck {
                self.wire.device_bit(false);
            }
            self.link.on_clock_edge();
            self.wire.device_bit(true);
            if let LinkState::WaitSendData(_) = state {
                self.bits.push(self.wire.data_high());
            }
            if state == LinkState::WaitSendAck {
                let byte = self
                    .bits
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &b)| acc | ((b as u8) << i));
                self.sent.lock().unwrap().push(byte);
                self.bits.clear();
            }
        }
    }
}

pub struct Harness {
    pub link: &'static Link,
    pub wire: &'static Wire,
    pub recorder: &'static Recorder,
    pub sent: &'static Mutex<Vec<u8>>,
    pub engine: ProtocolEngine<'static, 'static, HostLines, NoIrq, AckingDevice>,
}

impl Harness {
    pub fn new() -> Self {
        let queue: &'static mut ByteQueue = Box::leak(Box::new(Queue::new()));
        let (producer, consumer) = queue.split();
        let wire: &'static Wire = Box::leak(Box::new(Wire::default()));
        let recorder: &'static Recorder = Box::leak(Box::new(Recorder::default()));
        let link: &'static Link = Box::leak(Box::new(Ps2Link::new(
            HostLines(wire),
            producer,
            Some(recorder as &(dyn Diagnostics + Sync)),
        )));
        let sent: &'static Mutex<Vec<u8>> = Box::leak(Box::new(Mutex::new(Vec::new())));
        let device = AckingDevice::new(link, wire, sent);
        let mut engine = ProtocolEngine::new(link, consumer, NoIrq, device);
        engine.begin();
        Self {
            link,
            wire,
            recorder,
            sent,
            engine,
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

    /// Device sends one well-formed byte
    pub fn device_sends(&self, byte: u8) {
        self.clock_bits(&device_frame(byte));
    }

    /// Bytes the device has acknowledged so far
    pub fn received_by_device(&self) -> Vec<u8> {
        self.sent.lock().unwrap().clone()
    }
}
