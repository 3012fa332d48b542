//! Minimal two-decimal rendering for targets without float formatting.

use core::fmt;

/// Renders a value as `<integer part>.<first two fractional digits>`.
///
/// Both parts are truncated toward zero with integer casts, which keeps the
/// float formatting machinery out of the binary. The output is only correct
/// for non-negative values whose fractional part has two significant digits:
///
/// * the fractional part is not zero-padded (`2.0625` renders as `2.6`),
/// * representation error truncates downward (`65.2` renders as `65.19`),
/// * negative values carry the sign on both parts (`-12.75` renders as
///   `-12.-75`) and lose it entirely above -1 (`-0.5` renders as `0.-50`).
///
/// Use `{:.2}` where correctly rounded output matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwoDecimals(pub f32);

/// Wraps `value` for display with [`TwoDecimals`].
pub fn format_two_decimals(value: f32) -> TwoDecimals {
    TwoDecimals(value)
}

impl fmt::Display for TwoDecimals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int = self.0 as i32;
        let frac = ((self.0 - int as f32) * 100.0) as i32;
        write!(f, "{int}.{frac}")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TwoDecimals {
    fn format(&self, f: defmt::Formatter<'_>) {
        let int = self.0 as i32;
        let frac = ((self.0 - int as f32) * 100.0) as i32;
        defmt::write!(f, "{}.{}", int, frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_extra_digits() {
        assert_eq!(format_two_decimals(3.14159).to_string(), "3.14");
        assert_eq!(format_two_decimals(24.6).to_string(), "24.60");
        assert_eq!(format_two_decimals(0.0).to_string(), "0.0");
    }

    #[test]
    fn test_no_zero_padding() {
        assert_eq!(format_two_decimals(2.0625).to_string(), "2.6");
    }

    #[test]
    fn test_representation_error_truncates_down() {
        assert_eq!(format_two_decimals(3.05).to_string(), "3.4");
        assert_eq!(format_two_decimals(65.2).to_string(), "65.19");
    }

    #[test]
    fn test_negative_quirks() {
        // Known quirk: the sign is carried by both parts, and lost above -1.
        assert_eq!(format_two_decimals(-12.75).to_string(), "-12.-75");
        assert_eq!(format_two_decimals(-0.5).to_string(), "0.-50");
    }
}
