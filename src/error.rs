use core::fmt;

/// Possible errors from the DHT11 driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// Timed out waiting for a pin state change.
    Timeout,
    /// Checksum did not match the received data.
    ChecksumMismatch {
        /// Checksum byte transmitted by the sensor.
        expected: u8,
        /// Checksum computed over the four data bytes.
        calculated: u8,
    },
    /// Error from the GPIO pin (input/output).
    PinError(E),
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::PinError(value)
    }
}

impl<E: fmt::Debug> fmt::Display for DhtError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DhtError::Timeout => f.write_str("timed out waiting for the sensor"),
            DhtError::ChecksumMismatch {
                expected,
                calculated,
            } => write!(
                f,
                "checksum mismatch (expected {expected:#04x}, calculated {calculated:#04x})"
            ),
            DhtError::PinError(err) => write!(f, "pin error: {err:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for DhtError<E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_checksum_mismatch() {
        let err: DhtError<()> = DhtError::ChecksumMismatch {
            expected: 0x00,
            calculated: 0x43,
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch (expected 0x00, calculated 0x43)"
        );
    }

    #[test]
    fn pin_error_from_hal_error() {
        #[derive(Debug, PartialEq)]
        struct BusFault;

        let err: DhtError<BusFault> = BusFault.into();
        assert_eq!(err, DhtError::PinError(BusFault));
        assert_eq!(err.to_string(), "pin error: BusFault");
    }
}
