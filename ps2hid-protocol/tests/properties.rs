//! Property tests for framing, parity and ring ordering.

mod common;

use common::Harness;
use proptest::prelude::*;
use ps2hid_protocol::{odd_parity, Action, BitFrame};

proptest! {
    #[test]
    fn test_parity_makes_count_odd(byte in any::<u8>()) {
        let ones = byte.count_ones() + odd_parity(byte) as u32;
        prop_assert_eq!(ones % 2, 1);
    }

    #[test]
    fn test_send_drives_byte_then_parity(byte in any::<u8>()) {
        let mut frame = BitFrame::new();
        frame.prime(byte);
        let mut driven = Vec::new();
        for _ in 0..9 {
            if let Action::Drive(level) = frame.clock(false) {
                driven.push(level);
            }
        }
        prop_assert_eq!(driven.len(), 9);
        let sent = driven[..8]
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &b)| acc | ((b as u8) << i));
        prop_assert_eq!(sent, byte);
        prop_assert_eq!(driven[8], odd_parity(byte));
        prop_assert_eq!(frame.clock(false), Action::Release);
        prop_assert_eq!(frame.clock(false), Action::Sent);
        prop_assert!(frame.state().is_idle());
    }

    #[test]
    fn test_write_and_wait_sends_byte(byte in any::<u8>()) {
        let mut h = Harness::new();
        prop_assert!(h.engine.write_and_wait(byte));
        prop_assert!(h.engine.state().is_idle());
        prop_assert!(h.recorder.faults().is_empty());
        prop_assert_eq!(h.received_by_device(), vec![byte]);
    }

    #[test]
    fn test_delivery_in_order_bounded(bytes in proptest::collection::vec(any::<u8>(), 0..40)) {
        let mut h = Harness::new();
        for &byte in &bytes {
            h.device_sends(byte);
        }

        let kept = bytes.len().min(16);
        prop_assert_eq!(h.engine.available(), kept);
        prop_assert_eq!(h.recorder.faults().len(), bytes.len() - kept);

        let mut read = Vec::new();
        while let Some(byte) = h.engine.read() {
            read.push(byte);
        }
        prop_assert_eq!(&read[..], &bytes[..kept]);
    }
}
