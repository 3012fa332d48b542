use core::fmt;

use crate::dht::Reading;

/// Supported sensor models.
///
/// Both speak the same wire protocol; they differ only in how the payload
/// bytes encode the measurement.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// DHT11: whole-degree temperature and whole-percent humidity.
    Dht11,
    /// DHT22 / AM2302: tenths resolution, sign-magnitude temperature.
    Dht22,
}

impl Variant {
    /// Relative humidity in percent from the four payload bytes.
    pub fn humidity(self, payload: &[u8; 4]) -> f32 {
        let [hum_hi, hum_lo, _, _] = *payload;
        match self {
            Variant::Dht11 => hum_hi as f32,
            Variant::Dht22 => u16::from_be_bytes([hum_hi, hum_lo]) as f32 / 10.0,
        }
    }

    /// Temperature in degrees Celsius from the four payload bytes.
    pub fn temperature(self, payload: &[u8; 4]) -> f32 {
        let [_, _, temp_hi, temp_lo] = *payload;
        match self {
            Variant::Dht11 => temp_hi as f32,
            Variant::Dht22 => {
                // Bit 7 of the high byte is a sign flag, not two's complement.
                let is_negative = (temp_hi >> 7) != 0;
                let magnitude = u16::from_be_bytes([temp_hi & 0b0111_1111, temp_lo]);
                let temperature = magnitude as f32 / 10.0;
                if is_negative { -temperature } else { temperature }
            }
        }
    }

    /// Scales a checksum-verified payload into a [`Reading`].
    pub fn scale(self, payload: &[u8; 4]) -> Reading {
        Reading {
            temperature: self.temperature(payload),
            relative_humidity: self.humidity(payload),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Dht11 => "DHT11",
            Variant::Dht22 => "DHT22",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dht11_is_identity() {
        for b in [0u8, 1, 42, 127, 128, 255] {
            let payload = [b, 0xAA, b, 0x55];
            assert_eq!(Variant::Dht11.humidity(&payload), b as f32);
            assert_eq!(Variant::Dht11.temperature(&payload), b as f32);
        }
    }

    #[test]
    fn test_dht11_ignores_fraction_bytes() {
        let reading = Variant::Dht11.scale(&[45, 9, 23, 7]);
        assert_eq!(
            reading,
            Reading {
                temperature: 23.0,
                relative_humidity: 45.0,
            }
        );
    }

    #[test]
    fn test_dht22_humidity_all_byte_pairs() {
        for hi in 0..=255u8 {
            for lo in 0..=255u8 {
                let expected = (hi as u32 * 256 + lo as u32) as f32 / 10.0;
                assert_eq!(Variant::Dht22.humidity(&[hi, lo, 0, 0]), expected);
            }
        }
    }

    #[test]
    fn test_dht22_positive_temp() {
        // 0x022B = 555 tenths of a percent, 0x00F6 = 246 tenths of a degree
        let reading = Variant::Dht22.scale(&[0x02, 0x2B, 0x00, 0xF6]);

        assert_eq!(
            reading,
            Reading {
                relative_humidity: 55.5,
                temperature: 24.6,
            }
        );
    }

    #[test]
    fn test_dht22_negative_temp() {
        // 0x800A: sign flag set on a magnitude of 10 tenths
        let reading = Variant::Dht22.scale(&[0x01, 0x90, 0x80, 0x0A]);

        assert_eq!(
            reading,
            Reading {
                relative_humidity: 40.0,
                temperature: -1.0,
            }
        );
    }

    #[test]
    fn test_dht22_sign_magnitude_not_twos_complement() {
        // 0x99 = sign bit + 0x19; (0x19 * 256 + 0x05) / 10 = 640.5
        assert_eq!(Variant::Dht22.temperature(&[0, 0, 0x99, 0x05]), -640.5);
        assert_eq!(Variant::Dht22.temperature(&[0, 0, 0x19, 0x05]), 640.5);
    }

    #[test]
    fn test_dht22_sign_follows_high_bit() {
        for hi in 0..=255u8 {
            for lo in [0u8, 1, 0x7F, 0xFF] {
                let t = Variant::Dht22.temperature(&[0, 0, hi, lo]);
                if hi & 0x80 != 0 {
                    assert!(t <= 0.0);
                    assert_eq!(-t, Variant::Dht22.temperature(&[0, 0, hi & 0x7F, lo]));
                } else {
                    assert!(t >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Variant::Dht11.to_string(), "DHT11");
        assert_eq!(Variant::Dht22.to_string(), "DHT22");
    }
}
