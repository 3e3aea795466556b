//! Pin-level DHT11 protocol decoder.
//!
//! Drives the start signal, follows the sensor's response handshake and
//! samples the 40 data bits by busy-waiting on the line.

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin, PinState},
};

use crate::error::DhtError;
#[cfg(any(feature = "defmt", feature = "log"))]
use crate::fmt::{trace, warn};
use crate::frame::{FRAME_LEN, RawFrame};

/// How long the line is held low to wake the sensor (datasheet minimum is 18 ms).
pub const START_LOW_MS: u32 = 20;

/// How long the line is held released after the start pulse.
pub const RELEASE_US: u32 = 30;

/// Maximum wait (in microseconds) for each edge of the response handshake.
pub const HANDSHAKE_TIMEOUT_US: u32 = 80;

/// Maximum wait (in microseconds) for each edge of a data bit.
pub const BIT_TIMEOUT_US: u32 = 100;

/// Delay after a bit's rising edge before sampling.
///
/// A 0 bit is a ~26-28us high pulse and a 1 bit is ~70us, so the line is
/// still high at this point only for a 1.
pub const SETTLE_US: u32 = 40;

/// Captures one validated frame from the sensor.
///
/// Sends the start signal, waits for the response handshake, reads 40 bits
/// MSB first and verifies the checksum. The pin must be configured as an
/// open-drain input/output so that driving it high releases the line.
///
/// # Errors
///
/// * `DhtError::Timeout` if any expected edge does not arrive within its bound.
/// * `DhtError::ChecksumMismatch` if the received frame is corrupt.
/// * `DhtError::PinError` if the HAL reports a pin failure.
pub fn capture_frame<P, D, E>(pin: &mut P, delay: &mut D) -> Result<RawFrame, DhtError<E>>
where
    P: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayNs,
{
    start(pin, delay)?;

    let mut bytes = [0u8; FRAME_LEN];
    for byte in bytes.iter_mut() {
        *byte = read_byte(pin, delay)?;
    }

    RawFrame::from_bytes(bytes).inspect_err(|_| {
        warn!(
            "dht11: checksum error, frame {} {} {} {} {}",
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]
        );
    })
}

/// Sends the start signal and waits for the sensor's ~80us low / ~80us high response.
fn start<P, D, E>(pin: &mut P, delay: &mut D) -> Result<(), DhtError<E>>
where
    P: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayNs,
{
    trace!("dht11: sending start signal");
    pin.set_low()?;
    delay.delay_ms(START_LOW_MS);
    pin.set_high()?;
    delay.delay_us(RELEASE_US);

    wait_for_level(pin, delay, PinState::Low, HANDSHAKE_TIMEOUT_US)?;
    wait_for_level(pin, delay, PinState::High, HANDSHAKE_TIMEOUT_US)?;
    Ok(())
}

fn read_byte<P, D, E>(pin: &mut P, delay: &mut D) -> Result<u8, DhtError<E>>
where
    P: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayNs,
{
    let mut byte: u8 = 0;
    for _ in 0..8 {
        byte = (byte << 1) | read_bit(pin, delay)? as u8;
    }
    Ok(byte)
}

/// Reads a single bit.
///
/// Each bit starts with a ~50us low phase followed by a high pulse whose
/// length encodes the value. The line is sampled once, `SETTLE_US` after the
/// rising edge.
fn read_bit<P, D, E>(pin: &mut P, delay: &mut D) -> Result<bool, DhtError<E>>
where
    P: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayNs,
{
    wait_for_level(pin, delay, PinState::Low, BIT_TIMEOUT_US)?;
    wait_for_level(pin, delay, PinState::High, BIT_TIMEOUT_US)?;

    delay.delay_us(SETTLE_US);
    Ok(pin.is_high()?)
}

/// Polls the line until it reaches `level`, busy-waiting 1us between polls.
///
/// The line is polled at 0us through `timeout_us`, so an edge landing exactly
/// on the bound is still accepted.
///
/// # Errors
///
/// Returns `DhtError::Timeout` if the line is not at `level` by `timeout_us`.
fn wait_for_level<P, D, E>(
    pin: &mut P,
    delay: &mut D,
    level: PinState,
    timeout_us: u32,
) -> Result<(), DhtError<E>>
where
    P: InputPin<Error = E>,
    D: DelayNs,
{
    for elapsed in 0..=timeout_us {
        let reached = match level {
            PinState::High => pin.is_high()?,
            PinState::Low => pin.is_low()?,
        };
        if reached {
            return Ok(());
        }
        if elapsed < timeout_us {
            delay.delay_us(1);
        }
    }
    warn!(
        "dht11: timed out after {}us waiting for the line to go {}",
        timeout_us,
        if level == PinState::High { "high" } else { "low" }
    );
    Err(DhtError::Timeout)
}
