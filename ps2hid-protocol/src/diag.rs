//! Diagnostics sink interface

use crate::fault::Fault;

/// Which layer produced an availability sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    /// Bytes waiting in the protocol ring
    Protocol,
    /// Key events waiting in the decoder ring
    Decoder,
    /// Reports due at the key state manager
    Manager,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Protocol, Layer::Decoder, Layer::Manager];

    pub const fn index(self) -> usize {
        match self {
            Layer::Protocol => 0,
            Layer::Decoder => 1,
            Layer::Manager => 2,
        }
    }
}

/// Receiver for faults and availability samples
///
/// [`Diagnostics::fault`] may be called from the clock interrupt, so
/// implementations must not block and must synchronise internally.
pub trait Diagnostics {
    /// A recoverable fault happened
    fn fault(&self, fault: Fault);

    /// A layer's `available()` returned `count`
    fn available(&self, layer: Layer, count: usize) {
        let _ = (layer, count);
    }
}
