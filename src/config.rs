//! Timing parameters for a read transaction.

/// Timing parameters used by [`Dht::read`](crate::Dht::read).
///
/// All tick counts are in units of one `delay_us(1)` call plus the cost of a
/// pin read. On slower targets a tick is noticeably longer than 1 µs, which is
/// what the default `break_ticks` of 20 was tuned for. Adjust it if your
/// sampling loop runs close to 1 µs per iteration.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// How long the line is held high before the reset pulse, in milliseconds.
    pub wake_ms: u32,
    /// Length of the low reset pulse, in milliseconds.
    pub reset_ms: u32,
    /// How long the line is driven high after the reset pulse, in microseconds.
    pub release_us: u32,
    /// Maximum number of 1 µs samples to wait for the sensor to pull the line low.
    pub max_start_wait: u32,
    /// Maximum number of level transitions captured in one read.
    pub max_transitions: u32,
    /// Ticks without a level change after which the line counts as released.
    pub release_ticks: u32,
    /// High periods longer than this many ticks decode as a `1` bit.
    pub break_ticks: u32,
}

impl Timing {
    /// Defaults for both DHT11 and DHT22, tuned for an ESP8266-class sampling loop.
    pub const DHTXX: Self = Self {
        wake_ms: 250,
        reset_ms: 20,
        release_us: 40,
        max_start_wait: 32_000,
        max_transitions: 10_000,
        release_ticks: 1_000,
        break_ticks: 20,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DHTXX
    }
}
