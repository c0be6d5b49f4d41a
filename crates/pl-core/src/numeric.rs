//! Integer arithmetic for the plant model.
//!
//! All plant quantities (volumes, rates, temperatures, rpm) are whole units.
//! Intermediate ratios are computed in `f64` and brought back with the
//! rounding helpers below, which round halves toward positive infinity.

use crate::error::{PlError, PlResult};

/// Round to the nearest integer, halves toward positive infinity.
///
/// `round_half_up(2.5) == 3`, `round_half_up(-2.5) == -2`.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Smallest integer not less than `value`.
pub fn ceil_to_i64(value: f64) -> i64 {
    value.ceil() as i64
}

/// `round_half_up(max * numerator / denominator)`, zero when the denominator is not positive.
pub fn scale(max: i64, numerator: i64, denominator: i64) -> i64 {
    if denominator <= 0 {
        return 0;
    }
    round_half_up(max as f64 * (numerator as f64 / denominator as f64))
}

/// Return `value` if it lies in `min..=max`.
pub fn check_range(what: &'static str, value: i64, min: i64, max: i64) -> PlResult<i64> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(PlError::OutOfRange {
            what,
            value,
            min,
            max,
        })
    }
}

/// Return `value` unless it is negative.
pub fn check_non_negative(what: &'static str, value: i64) -> PlResult<i64> {
    if value < 0 {
        Err(PlError::InvalidArg { what })
    } else {
        Ok(value)
    }
}

/// Convert a whole percentage into a fraction.
pub fn percent(value: i64) -> f64 {
    value as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_matches_game_rounding() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn ceil_rounds_up() {
        assert_eq!(ceil_to_i64(0.1), 1);
        assert_eq!(ceil_to_i64(4.0), 4);
        assert_eq!(ceil_to_i64(-0.5), 0);
    }

    #[test]
    fn scale_basic() {
        assert_eq!(scale(1000, 50, 100), 500);
        assert_eq!(scale(400, 1, 3), 133);
        assert_eq!(scale(3500, 300, 300), 3500);
    }

    #[test]
    fn scale_guards_zero_denominator() {
        assert_eq!(scale(1000, 50, 0), 0);
        assert_eq!(scale(1000, 50, -1), 0);
    }

    #[test]
    fn range_checks() {
        assert_eq!(check_range("rods", 0, 0, 100), Ok(0));
        assert_eq!(check_range("rods", 100, 0, 100), Ok(100));
        assert_eq!(
            check_range("rods", 101, 0, 100),
            Err(PlError::OutOfRange {
                what: "rods",
                value: 101,
                min: 0,
                max: 100
            })
        );
        assert_eq!(check_non_negative("volume", 0), Ok(0));
        assert_eq!(
            check_non_negative("volume", -1),
            Err(PlError::InvalidArg { what: "volume" })
        );
    }

    #[test]
    fn percent_fraction() {
        assert_eq!(percent(100), 1.0);
        assert_eq!(percent(25), 0.25);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_half_up_is_within_half(v in -1.0e6_f64..1.0e6_f64) {
            let r = round_half_up(v) as f64;
            prop_assert!((r - v).abs() <= 0.5);
        }

        #[test]
        fn scale_is_monotonic_in_numerator(a in 0_i64..1000, b in 0_i64..1000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(scale(400, lo, 1000) <= scale(400, hi, 1000));
        }

        #[test]
        fn scale_never_exceeds_max_within_range(n in 0_i64..=1000) {
            let v = scale(400, n, 1000);
            prop_assert!((0..=400).contains(&v));
        }
    }
}
