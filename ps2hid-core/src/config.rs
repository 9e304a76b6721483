//! Keyboard configuration
//!
//! Small enough to keep in a flash page or EEPROM cell. With the `serde`
//! feature it is stored as a format version byte followed by the
//! postcard-encoded struct.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current stored format version
pub const CONFIG_VERSION: u8 = 1;

/// Upper bound on the encoded size, version byte included
pub const MAX_ENCODED_SIZE: usize = 16;

/// Typematic byte for the keyboard's power-on default: 10.9 cps, 500 ms
pub const DEFAULT_TYPEMATIC: u8 = 0x2B;

/// Errors from loading or storing a [`KeyboardConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Input was empty
    Empty,
    /// Stored with a different format version
    UnsupportedVersion(u8),
    /// Payload could not be decoded
    Malformed,
    /// Output buffer too small
    BufferTooSmall,
}

/// Startup and reporting behaviour of the key state manager
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyboardConfig {
    /// Emit a report at least this often even without key activity, in
    /// milliseconds. Zero disables the heartbeat.
    pub report_interval_ms: u32,
    /// Send a reset command to the keyboard in `begin()`
    pub reset_on_begin: bool,
    /// Typematic rate/delay byte sent in `begin()`, if any
    pub typematic: Option<u8>,
}

impl KeyboardConfig {
    pub const fn new() -> Self {
        Self {
            report_interval_ms: 0,
            reset_on_begin: false,
            typematic: None,
        }
    }

    /// Set the heartbeat interval
    pub const fn with_report_interval(mut self, interval_ms: u32) -> Self {
        self.report_interval_ms = interval_ms;
        self
    }

    pub const fn with_reset_on_begin(mut self, reset: bool) -> Self {
        self.reset_on_begin = reset;
        self
    }

    pub const fn with_typematic(mut self, typematic: u8) -> Self {
        self.typematic = Some(typematic);
        self
    }

    /// Heartbeat interval, if the heartbeat is on
    pub const fn heartbeat(&self) -> Option<u32> {
        if self.report_interval_ms > 0 {
            Some(self.report_interval_ms)
        } else {
            None
        }
    }
}

#[cfg(feature = "serde")]
impl KeyboardConfig {
    /// Write the versioned encoding into `buf`, returning the bytes used
    pub fn encode<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        let (version, payload) = buf.split_first_mut().ok_or(ConfigError::BufferTooSmall)?;
        *version = CONFIG_VERSION;
        let used = postcard::to_slice(self, payload)
            .map_err(|_| ConfigError::BufferTooSmall)?
            .len();
        Ok(&mut buf[..used + 1])
    }

    /// Read a configuration written by [`KeyboardConfig::encode`]
    pub fn decode(bytes: &[u8]) -> Result<Self, ConfigError> {
        let (&version, payload) = bytes.split_first().ok_or(ConfigError::Empty)?;
        if version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(version));
        }
        postcard::from_bytes(payload).map_err(|_| ConfigError::Malformed)
    }
}
