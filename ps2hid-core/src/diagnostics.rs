//! Ready-made diagnostics sink
//!
//! [`DiagnosticLog`] keeps the faults raised by all three layers until the
//! application drains them, plus a histogram per layer of how many items
//! `available()` reported. The histograms show how far behind the consumer
//! runs: a healthy poll loop sees mostly 1s.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Vec;
use ps2hid_protocol::{Diagnostics, Fault, Layer};

/// Faults kept before new ones are dropped
pub const MAX_FAULTS: usize = 32;

/// Histogram buckets: 1, 2, 3, 4-5, 6-8, 9+
pub const BUCKETS: usize = 6;

/// Counts of non-zero `available()` results per bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Histogram(pub [u32; BUCKETS]);

impl Histogram {
    fn bucket(count: usize) -> Option<usize> {
        match count {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            3 => Some(2),
            4 | 5 => Some(3),
            6..=8 => Some(4),
            _ => Some(5),
        }
    }

    pub fn record(&mut self, count: usize) {
        if let Some(i) = Self::bucket(count) {
            self.0[i] = self.0[i].saturating_add(1);
        }
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

struct LogState {
    faults: Vec<Fault, MAX_FAULTS>,
    histograms: [Histogram; 3],
}

/// Fault log and availability histograms, safe to share with the interrupt
pub struct DiagnosticLog {
    state: Mutex<RefCell<LogState>>,
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticLog {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(LogState {
                faults: Vec::new(),
                histograms: [Histogram([0; BUCKETS]); 3],
            })),
        }
    }

    /// Remove and return the pending faults, oldest first
    pub fn take_faults(&self) -> Vec<Fault, MAX_FAULTS> {
        critical_section::with(|cs| core::mem::take(&mut self.state.borrow_ref_mut(cs).faults))
    }

    pub fn fault_count(&self) -> usize {
        critical_section::with(|cs| self.state.borrow_ref(cs).faults.len())
    }

    pub fn histogram(&self, layer: Layer) -> Histogram {
        critical_section::with(|cs| self.state.borrow_ref(cs).histograms[layer.index()])
    }

    pub fn clear(&self) {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            state.faults.clear();
            state.histograms = [Histogram::default(); 3];
        });
    }

    /// Log and drain pending faults, then log the histograms
    pub fn dump(&self) {
        for fault in self.take_faults() {
            warn!("fault: {}", fault.message());
        }
        for layer in Layer::ALL {
            let histogram = self.histogram(layer);
            info!("{} available: {}", layer, histogram.0);
        }
    }
}

impl Diagnostics for DiagnosticLog {
    fn fault(&self, fault: Fault) {
        critical_section::with(|cs| {
            // Full log: keep the oldest, they explain what went wrong first
            let _ = self.state.borrow_ref_mut(cs).faults.push(fault);
        });
    }

    fn available(&self, layer: Layer, count: usize) {
        critical_section::with(|cs| {
            self.state.borrow_ref_mut(cs).histograms[layer.index()].record(count);
        });
    }
}
