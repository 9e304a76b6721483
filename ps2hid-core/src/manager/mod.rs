//! Key state manager
//!
//! Consumes key events from a [`ScanCodeDecoder`], keeps the set of pressed
//! keys and the lock LEDs, and produces [`Report`]s. A report is available
//! after every key event, and, when a report interval is configured, after
//! the interval passed without one.

mod bitmap;
mod report;

pub use bitmap::KeyBitmap;
pub use report::{Leds, Modifiers, Report, REPORT_KEYS};

use ps2hid_hal::Millis;
use ps2hid_protocol::{ByteStream, CommandPort, Diagnostics, Layer};

use crate::config::KeyboardConfig;
use crate::keycode::{KeyCode, KeyEvent, KeyEventKind};
use crate::scancode::ScanCodeDecoder;
use crate::transform::{Identity, KeyTransform};

/// Keyboard command bytes
pub mod command {
    /// Reset and self-test; answered with ACK then 0xAA
    pub const RESET: u8 = 0xFF;
    /// Set typematic rate and delay; followed by one argument byte
    pub const SET_TYPEMATIC: u8 = 0xF3;
    /// Set LEDs; followed by the LED mask
    pub const SET_LEDS: u8 = 0xED;
    /// Acknowledge sent by the keyboard after each command byte
    pub const ACK: u8 = 0xFA;
}

pub struct KeyStateManager<'d, S, C, T = Identity> {
    decoder: ScanCodeDecoder<'d, S>,
    clock: C,
    config: KeyboardConfig,
    transform: T,
    pressed: KeyBitmap,
    leds: Leds,
    last_report: u32,
}

impl<'d, S, C: Millis> KeyStateManager<'d, S, C, Identity> {
    pub fn new(decoder: ScanCodeDecoder<'d, S>, clock: C, config: KeyboardConfig) -> Self {
        let last_report = clock.millis();
        Self {
            decoder,
            clock,
            config,
            transform: Identity,
            pressed: KeyBitmap::new(),
            leds: Leds::default(),
            last_report,
        }
    }
}

impl<'d, S, C, T> KeyStateManager<'d, S, C, T> {
    /// Replace the remapping hook applied to every event
    pub fn with_transform<U: KeyTransform>(self, transform: U) -> KeyStateManager<'d, S, C, U> {
        KeyStateManager {
            decoder: self.decoder,
            clock: self.clock,
            config: self.config,
            transform,
            pressed: self.pressed,
            leds: self.leds,
            last_report: self.last_report,
        }
    }

    /// Send faults and availability samples from this layer and the
    /// decoder to `sink`
    pub fn with_diagnostics(mut self, sink: &'d (dyn Diagnostics + Sync)) -> Self {
        self.decoder = self.decoder.with_diagnostics(sink);
        self
    }

    pub fn is_key_pressed(&self, code: KeyCode) -> bool {
        self.pressed.contains(code)
    }

    pub fn is_shift_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::LSHIFT) || self.is_key_pressed(KeyCode::RSHIFT)
    }

    pub fn is_control_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::LCTRL) || self.is_key_pressed(KeyCode::RCTRL)
    }

    pub fn is_alt_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::LALT) || self.is_key_pressed(KeyCode::RALT)
    }

    pub fn is_gui_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::LGUI) || self.is_key_pressed(KeyCode::RGUI)
    }

    pub fn leds(&self) -> Leds {
        self.leds
    }

    pub fn config(&self) -> &KeyboardConfig {
        &self.config
    }

    pub fn decoder(&self) -> &ScanCodeDecoder<'d, S> {
        &self.decoder
    }

    pub fn decoder_mut(&mut self) -> &mut ScanCodeDecoder<'d, S> {
        &mut self.decoder
    }

    /// Assemble a report from the bitmap
    ///
    /// Pause never gets a break code, so its bit is cleared once a report
    /// listed it. A rollover report lists nothing, so Pause stays down
    /// until one does.
    fn build_report(&mut self) -> Report {
        let mut report = Report::default();
        for bit in 0..8 {
            if self.pressed.contains(KeyCode(KeyCode::LCTRL.0 + bit)) {
                report.modifiers.insert(1 << bit);
            }
        }

        let mut down = 0;
        let mut pause_listed = false;
        for value in 0..KeyCode::NON_MODIFIER_END {
            let code = KeyCode(value);
            if !self.pressed.contains(code) {
                continue;
            }
            if down < REPORT_KEYS {
                report.keycodes[down] = code;
                pause_listed |= code == KeyCode::PAUSE;
            }
            down += 1;
        }

        if down > REPORT_KEYS {
            report.keycodes = [KeyCode::ERROR_ROLL_OVER; REPORT_KEYS];
        } else if pause_listed {
            self.pressed.clear(KeyCode::PAUSE);
        }
        report
    }
}

impl<'d, S, C, T> KeyStateManager<'d, S, C, T>
where
    S: ByteStream + CommandPort,
    C: Millis,
    T: KeyTransform,
{
    /// Apply the startup part of the configuration
    pub fn begin(&mut self) {
        if self.config.reset_on_begin {
            self.reset_keyboard();
        }
        if let Some(typematic) = self.config.typematic {
            self.set_typematic_rate_and_delay(typematic);
        }
        self.last_report = self.clock.millis();
        info!("keyboard: started");
    }

    /// Reports ready to read
    ///
    /// The number of pending key events, or 1 when none are pending but
    /// the report interval has elapsed.
    pub fn available(&mut self) -> usize {
        let mut count = self.decoder.available();
        if count == 0 {
            if let Some(interval) = self.config.heartbeat() {
                if self.clock.millis().wrapping_sub(self.last_report) > interval {
                    count = 1;
                }
            }
        }
        if let Some(sink) = self.decoder.diagnostics() {
            sink.available(Layer::Manager, count);
        }
        count
    }

    /// Apply at most one pending key event and return the resulting report
    pub fn read(&mut self) -> Report {
        if self.decoder.available() > 0 {
            if let Some(event) = self.decoder.read() {
                let event = self.transform.transform(event);
                self.apply(event);
            }
        }
        self.last_report = self.clock.millis();
        self.build_report()
    }

    fn apply(&mut self, event: KeyEvent) {
        trace!("keyboard: {}", event);
        match event.kind {
            KeyEventKind::Pressed => self.pressed.set(event.code),
            KeyEventKind::Released => {
                self.pressed.clear(event.code);
                if let Some(mask) = Leds::for_lock_key(event.code) {
                    self.set_leds(mask, !self.leds.bits());
                }
            }
        }
    }

    /// Reset the keyboard and forget all key and LED state
    pub fn reset_keyboard(&mut self) {
        self.decoder.source_mut().write_and_wait(command::RESET);
        self.pressed.clear_all();
        self.leds = Leds::default();
    }

    pub fn set_typematic_rate_and_delay(&mut self, arg: u8) {
        let port = self.decoder.source_mut();
        port.write_and_wait(command::SET_TYPEMATIC);
        port.write_and_wait(arg);
    }

    /// Set the LEDs selected by `mask` to the matching bits of `values`
    pub fn set_leds(&mut self, mask: u8, values: u8) {
        self.leds = self.leds.merge(mask, values);
        let leds = self.leds.bits();
        debug!("keyboard: leds {=u8:#x}", leds);
        let port = self.decoder.source_mut();
        port.write_and_wait(command::SET_LEDS);
        port.write_and_wait(leds);
    }

    /// Forget all state, including unread events
    pub fn end(&mut self) {
        self.decoder.end();
        self.pressed.clear_all();
        self.leds = Leds::default();
        self.last_report = 0;
    }
}
