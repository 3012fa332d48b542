//! Frame assembly and integrity checking.

use crate::{dht::Reading, error::DhtError, variant::Variant};

/// Number of bits in a complete frame.
pub const FRAME_BITS: u8 = 40;

/// Minimum number of captured bits accepted as a frame.
///
/// One short of [`FRAME_BITS`]: a frame missing its final bit is still
/// checked, although its checksum byte then holds only the top seven bits
/// and rarely matches.
pub const MIN_FRAME_BITS: u8 = 39;

/// The five bytes sent by the sensor: humidity high/low, temperature
/// high/low, checksum.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawFrame(pub [u8; 5]);

impl RawFrame {
    /// The four payload bytes.
    pub fn payload(&self) -> [u8; 4] {
        let [b0, b1, b2, b3, _] = self.0;
        [b0, b1, b2, b3]
    }

    /// Checksum byte sent by the sensor.
    pub fn checksum_byte(&self) -> u8 {
        self.0[4]
    }

    /// Sum of the four payload bytes, modulo 256.
    pub fn checksum(&self) -> u8 {
        self.payload()
            .iter()
            .fold(0u8, |sum, v| sum.wrapping_add(*v))
    }

    /// Returns the payload if the checksum matches.
    pub fn verify<E>(&self) -> Result<[u8; 4], DhtError<E>> {
        let computed = self.checksum();
        let expected = self.checksum_byte();
        if computed == expected {
            Ok(self.payload())
        } else {
            Err(DhtError::ChecksumMismatch { expected, computed })
        }
    }
}

/// Accumulates captured bits MSB-first into a [`RawFrame`].
#[derive(Debug, Default)]
pub struct FrameBuilder {
    frame: RawFrame,
    bits: u8,
}

impl FrameBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shifts one bit into the current byte. Bits past the 40th are dropped.
    pub fn push(&mut self, bit: bool) {
        if self.bits >= FRAME_BITS {
            return;
        }
        let byte = &mut self.frame.0[usize::from(self.bits / 8)];
        *byte = (*byte << 1) | u8::from(bit);
        self.bits += 1;
    }

    /// Number of bits captured so far.
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// The frame assembled so far; unfilled bytes are zero.
    pub fn frame(&self) -> RawFrame {
        self.frame
    }
}

/// Checks a captured frame and scales it for `variant`.
pub fn decode<E>(variant: Variant, bits: u8, frame: &RawFrame) -> Result<Reading, DhtError<E>> {
    if bits < MIN_FRAME_BITS {
        return Err(DhtError::IncompleteFrame { bits });
    }
    let payload = frame.verify::<E>()?;
    Ok(variant.scale(&payload))
}
