//! DHT11 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic, bit-banged driver for the DHT11
//! temperature and humidity sensor, built on top of the [`embedded-hal`] traits.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Optional logging via `defmt` or `log`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access. The data pin must be
//!   configured as an open-drain input/output.
//! - [`DelayNs`] for accurate timing
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and logs through `defmt`
//! - `log`: Logs through the `log` facade
//!
//! # Example
//!
//! ```ignore
//! let mut dht = Dht11::new(delay);
//! dht.init(pin)?;
//! loop {
//!     match dht.read() {
//!         Ok(reading) => { /* reading.temperature, reading.humidity */ }
//!         Err(DhtError::Timeout | DhtError::ChecksumMismatch { .. }) => { /* retry later */ }
//!         Err(DhtError::PinError(e)) => return Err(e),
//!     }
//!     timer.delay_ms(dht11_sensor::MIN_READ_INTERVAL_MS);
//! }
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod decoder;
pub mod dht11;
pub mod error;
pub mod frame;

#[cfg(test)]
mod testing;

pub use decoder::capture_frame;
pub use dht11::{Dht11, MIN_READ_INTERVAL_MS};
pub use error::DhtError;
pub use frame::{RawFrame, Reading};
