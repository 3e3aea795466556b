//! Frame and reading types produced by the DHT11 protocol.

use crate::error::DhtError;

/// Number of bytes the sensor transmits per read cycle.
pub const FRAME_LEN: usize = 5;

/// A checksum-validated 5-byte frame as transmitted by the sensor.
///
/// Byte order on the wire is humidity integral, humidity fractional,
/// temperature integral, temperature fractional, checksum. A `RawFrame` can
/// only be obtained through validation, so its checksum always holds.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawFrame([u8; FRAME_LEN]);

impl RawFrame {
    /// Validates `bytes` and wraps them in a frame.
    ///
    /// # Errors
    ///
    /// Returns `DhtError::ChecksumMismatch` if the last byte is not the
    /// wrapping sum of the first four.
    pub fn from_bytes<E>(bytes: [u8; FRAME_LEN]) -> Result<Self, DhtError<E>> {
        let expected = bytes[4];
        let calculated = checksum(&bytes[..4]);
        if expected != calculated {
            return Err(DhtError::ChecksumMismatch {
                expected,
                calculated,
            });
        }
        Ok(RawFrame(bytes))
    }

    /// The five bytes as received.
    pub fn bytes(&self) -> [u8; FRAME_LEN] {
        self.0
    }

    /// Relative humidity, integral part.
    pub fn humidity_integral(&self) -> u8 {
        self.0[0]
    }

    /// Always 0 on the DHT11.
    pub fn humidity_fractional(&self) -> u8 {
        self.0[1]
    }

    /// Temperature in degrees Celsius, integral part.
    pub fn temperature_integral(&self) -> u8 {
        self.0[2]
    }

    /// Always 0 on the DHT11.
    pub fn temperature_fractional(&self) -> u8 {
        self.0[3]
    }

    /// Checksum byte as transmitted.
    pub fn checksum(&self) -> u8 {
        self.0[4]
    }
}

/// Additive checksum: sum of `data` modulo 256.
fn checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |sum, v| sum.wrapping_add(*v))
}

/// Reading returned by the DHT11 sensor.
///
/// Only the integral bytes are reported; the fractional bytes are dropped.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: u8,
    /// Relative humidity in percent.
    pub humidity: u8,
}

impl From<RawFrame> for Reading {
    fn from(frame: RawFrame) -> Self {
        Reading {
            temperature: frame.temperature_integral(),
            humidity: frame.humidity_integral(),
        }
    }
}
