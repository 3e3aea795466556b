//! Scripted sensor waveforms for the unit tests.

use embedded_hal_mock::eh1::delay::Transaction as DelayTx;
use embedded_hal_mock::eh1::digital::{State as PinState, Transaction as PinTx};

/// MCU start pulse followed by the sensor's response.
pub(crate) fn start_sequence() -> Vec<PinTx> {
    vec![
        // MCU pulls the line low, then releases it
        PinTx::set(PinState::Low),
        PinTx::set(PinState::High),
        // Sensor responds
        PinTx::get(PinState::Low),
        PinTx::get(PinState::High),
    ]
}

/// One data bit with every edge arriving on the first poll.
pub(crate) fn bit(value: bool) -> Vec<PinTx> {
    vec![
        PinTx::get(PinState::Low),  // start of bit
        PinTx::get(PinState::High), // rising edge of the data pulse
        PinTx::get(if value { PinState::High } else { PinState::Low }), // sample
    ]
}

/// Encodes five bytes, MSB first.
pub(crate) fn encode_frame(bytes: [u8; 5]) -> Vec<PinTx> {
    bytes
        .iter()
        .flat_map(|byte| (0..8).map(move |i| (byte >> (7 - i)) & 1 == 1))
        .flat_map(bit)
        .collect()
}

/// Delays of a full capture where every edge arrives on the first poll.
pub(crate) fn frame_delays() -> Vec<DelayTx> {
    let mut delays = vec![DelayTx::delay_ms(20), DelayTx::delay_us(30)];
    delays.extend(std::iter::repeat_n(DelayTx::delay_us(40), 40));
    delays
}
