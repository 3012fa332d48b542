use core::fmt;

/// Possible errors from the DHT driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// The sensor never pulled the line low after the start signal.
    SensorUnresponsive,
    /// The sensor released the line before enough bits were captured.
    IncompleteFrame {
        /// Number of data bits captured.
        bits: u8,
    },
    /// Checksum did not match the received data.
    ChecksumMismatch {
        /// Checksum byte sent by the sensor.
        expected: u8,
        /// Checksum computed over the four payload bytes.
        computed: u8,
    },
    /// The data line could not be configured.
    Configuration(E),
    /// Error from the GPIO pin (input/output).
    Pin(E),
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::Pin(value)
    }
}

impl<E: fmt::Debug> fmt::Display for DhtError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SensorUnresponsive => f.write_str("no response from sensor"),
            Self::IncompleteFrame { bits } => {
                write!(f, "got too few bits: {bits}, expected at least 40")
            }
            Self::ChecksumMismatch { expected, computed } => write!(
                f,
                "checksum mismatch: sensor sent {expected:#04x}, computed {computed:#04x}"
            ),
            Self::Configuration(e) => write!(f, "data line setup failed: {e:?}"),
            Self::Pin(e) => write!(f, "pin error: {e:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for DhtError<E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            DhtError::<u8>::SensorUnresponsive.to_string(),
            "no response from sensor"
        );
        assert_eq!(
            DhtError::<u8>::IncompleteFrame { bits: 20 }.to_string(),
            "got too few bits: 20, expected at least 40"
        );
        assert_eq!(
            DhtError::<u8>::ChecksumMismatch {
                expected: 0x81,
                computed: 0x07,
            }
            .to_string(),
            "checksum mismatch: sensor sent 0x81, computed 0x07"
        );
        assert_eq!(
            DhtError::Configuration(3u8).to_string(),
            "data line setup failed: 3"
        );
        assert_eq!(DhtError::Pin(3u8).to_string(), "pin error: 3");
    }

    #[test]
    fn test_from_pin_error() {
        assert_eq!(DhtError::from(7u8), DhtError::Pin(7u8));
    }
}
