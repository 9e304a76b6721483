//! Test doubles for the lines, the delay and the diagnostics sink

use std::boxed::Box;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use ps2hid_hal::Ps2Lines;

use crate::diag::{Diagnostics, Layer};
use crate::fault::Fault;
use crate::frame::{device_frame, LinkState};
use crate::link::Ps2Link;

/// Shared view of both lines; a line reads high unless someone pulls it low
#[derive(Default)]
pub struct Bus {
    clock_low: AtomicBool,
    host_data_low: AtomicBool,
    device_data_low: AtomicBool,
}

impl Bus {
    pub fn clock_low(&self) -> bool {
        self.clock_low.load(Ordering::SeqCst)
    }

    pub fn host_data_low(&self) -> bool {
        self.host_data_low.load(Ordering::SeqCst)
    }

    pub fn set_device_data(&self, high: bool) {
        self.device_data_low.store(!high, Ordering::SeqCst);
    }

    pub fn data_high(&self) -> bool {
        !self.host_data_low() && !self.device_data_low.load(Ordering::SeqCst)
    }
}

pub struct MockLines(&'static Bus);

impl MockLines {
    pub fn new() -> (Self, &'static Bus) {
        let bus: &'static Bus = Box::leak(Box::new(Bus::default()));
        (Self(bus), bus)
    }
}

impl Ps2Lines for MockLines {
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

/// Clock one device-to-host frame into the link
pub fn clock_in(link: &Ps2Link<'_, MockLines>, bus: &Bus, byte: u8) {
    for bit in device_frame(byte) {
        bus.set_device_data(bit);
        link.on_clock_edge();
    }
    bus.set_device_data(true);
}

/// Delay that plays the device while the host waits
///
/// Every millisecond wait clocks edges until the send finishes, recording
/// what the host drove and acknowledging the frame.
pub struct DeviceDelay {
    pub link: &'static Ps2Link<'static, MockLines>,
    pub bus: &'static Bus,
    pub ack: bool,
    pub rts_seen: bool,
    pub driven: Vec<bool>,
    pub waits: usize,
}

impl DeviceDelay {
    pub fn new(link: &'static Ps2Link<'static, MockLines>, bus: &'static Bus) -> Self {
        Self {
            link,
            bus,
            ack: true,
            rts_seen: false,
            driven: Vec::new(),
            waits: 0,
        }
    }

    /// Byte assembled from the first eight driven bits
    pub fn sent_byte(&self) -> u8 {
        self.driven[..8]
            .iter()
            .enumerate()
            .fold(0, |acc, (i, &bit)| acc | ((bit as u8) << i))
    }

    pub fn pump(&mut self) {
        self.waits += 1;
        for _ in 0..11 {
            let state = self.link.state();
            if !state.is_sending() {
                break;
            }
            if state == LinkState::WaitSendAck {
                self.bus.set_device_data(!self.ack);
            }
            self.link.on_clock_edge();
            self.bus.set_device_data(true);
            if matches!(state, LinkState::WaitSendData(_) | LinkState::WaitSendParity) {
                self.driven.push(self.bus.data_high());
            }
        }
    }
}

impl DelayNs for DeviceDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_us(&mut self, _us: u32) {
        self.rts_seen = self.bus.clock_low() && self.bus.host_data_low();
    }

    fn delay_ms(&mut self, _ms: u32) {
        self.pump();
    }
}

impl embedded_hal_async::delay::DelayNs for DeviceDelay {
    async fn delay_ns(&mut self, _ns: u32) {}

    async fn delay_ms(&mut self, _ms: u32) {
        self.pump();
    }
}

/// Interrupt gate that only counts calls
#[derive(Default)]
pub struct MockIrq {
    pub attached: bool,
    pub attaches: usize,
    pub detaches: usize,
}

impl ps2hid_hal::EdgeInterrupt for MockIrq {
    fn attach(&mut self) {
        self.attached = true;
        self.attaches += 1;
    }

    fn detach(&mut self) {
        self.attached = false;
        self.detaches += 1;
    }
}

#[derive(Default)]
pub struct FaultLog {
    faults: Mutex<Vec<Fault>>,
    samples: Mutex<Vec<(Layer, usize)>>,
}

impl FaultLog {
    pub fn faults(&self) -> Vec<Fault> {
        self.faults.lock().unwrap().clone()
    }

    pub fn samples(&self) -> Vec<(Layer, usize)> {
        self.samples.lock().unwrap().clone()
    }
}

impl Diagnostics for FaultLog {
    fn fault(&self, fault: Fault) {
        self.faults.lock().unwrap().push(fault);
    }

    fn available(&self, layer: Layer, count: usize) {
        self.samples.lock().unwrap().push((layer, count));
    }
}
