use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::decoder::capture_frame;
use crate::error::DhtError;
#[cfg(any(feature = "defmt", feature = "log"))]
use crate::fmt::{debug, trace};
use crate::frame::Reading;

/// Minimum spacing between two reads recommended by the DHT11 datasheet.
///
/// The driver does not enforce it; pacing reads is up to the caller.
pub const MIN_READ_INTERVAL_MS: u32 = 1000;

/// Driver session for one DHT11 sensor.
///
/// A session starts unbound. [`Dht11::init`] binds it to a data pin, after
/// which [`Dht11::read`] can be called any number of times.
pub struct Dht11<PIN, D> {
    pin: Option<PIN>,
    delay: D,
}

impl<PIN, DELAY, E> Dht11<PIN, DELAY>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// Creates a new, unbound DHT11 session.
    ///
    /// # Arguments
    ///
    /// * `delay` - A delay provider implementing the `DelayNs` trait. `delay_us`
    ///   must busy-wait; `delay_ms` may yield.
    pub fn new(delay: DELAY) -> Self {
        Dht11 { pin: None, delay }
    }

    /// Binds the session to `pin` and releases the line to its idle high level.
    ///
    /// The pin must be configured as an open-drain input/output with a pull-up.
    /// Calling `init` again rebinds the session; a previously bound pin is
    /// dropped, use [`Dht11::release`] first to get it back.
    pub fn init(&mut self, pin: PIN) -> Result<(), DhtError<E>> {
        let pin = self.pin.insert(pin);
        pin.set_high()?;
        debug!("dht11: pin bound, line idle high");
        Ok(())
    }

    /// Returns `true` once [`Dht11::init`] has bound a pin.
    pub fn is_bound(&self) -> bool {
        self.pin.is_some()
    }

    /// Unbinds the session and hands back the pin, if any.
    pub fn release(&mut self) -> Option<PIN> {
        self.pin.take()
    }

    /// Consumes the session, returning the bound pin (if any) and the delay provider.
    pub fn free(self) -> (Option<PIN>, DELAY) {
        (self.pin, self.delay)
    }

    /// Reads a temperature and humidity measurement from the DHT11 sensor.
    ///
    /// Performs exactly one capture: start signal, response handshake,
    /// 40 data bits and checksum check. Blocks for roughly 20-30 ms.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` if the read is successful and the checksum is valid.
    /// * `Err(DhtError)` on timeout, checksum mismatch or pin failure.
    ///
    /// # Panics
    ///
    /// Panics if called before [`Dht11::init`].
    pub fn read(&mut self) -> Result<Reading, DhtError<E>> {
        let Some(pin) = self.pin.as_mut() else {
            panic!("Dht11::read called before Dht11::init");
        };

        let reading = Reading::from(capture_frame(pin, &mut self.delay)?);
        trace!(
            "dht11: temperature {}C, humidity {}%",
            reading.temperature, reading.humidity
        );
        Ok(reading)
    }
}
