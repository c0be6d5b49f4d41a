//! Power tap (generator): power as a pure function of spinner rpm.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerTapParams {
    pub divisor: i64,
}

impl Default for PowerTapParams {
    fn default() -> Self {
        Self { divisor: 123 }
    }
}

/// Stateless generator attached to a spinner. Never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerTap {
    divisor: i64,
}

impl PowerTap {
    /// Divisors below one are treated as one.
    pub fn new(params: PowerTapParams) -> Self {
        Self {
            divisor: params.divisor.max(1),
        }
    }

    /// `rpm / divisor`, truncating.
    pub fn power(&self, rpm: i64) -> i64 {
        rpm / self.divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_truncates() {
        let tap = PowerTap::new(PowerTapParams::default());
        assert_eq!(tap.power(3500), 28);
        assert_eq!(tap.power(122), 0);
        assert_eq!(tap.power(123), 1);
    }

    #[test]
    fn zero_divisor_clamped() {
        let tap = PowerTap::new(PowerTapParams { divisor: 0 });
        assert_eq!(tap.power(7), 7);
    }
}
