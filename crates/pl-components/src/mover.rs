//! Mover (pump) component.
//!
//! A mover pushes water proportionally to its effective rpm. The rpm
//! setpoint survives breakdowns and switch-offs: only `effective_rpm` drops
//! to zero, and the setpoint takes effect again as soon as the pump is
//! repaired or switched back on.

use pl_core::{check_range, scale};
use serde::{Deserialize, Serialize};

use crate::error::{ComponentError, ComponentResult};
use crate::traits::Repairable;

/// Mover parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoverParams {
    pub max_rpm: i64,
}

impl Default for MoverParams {
    fn default() -> Self {
        Self { max_rpm: 1000 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mover {
    rpm: i64,
    pub max_rpm: i64,
    on: bool,
    operational: bool,
}

impl Mover {
    /// Create a working pump that is switched on at zero rpm.
    pub fn new(params: MoverParams) -> ComponentResult<Self> {
        if params.max_rpm <= 0 {
            return Err(ComponentError::InvalidArg {
                what: "mover max rpm must be positive",
            });
        }
        Ok(Self {
            rpm: 0,
            max_rpm: params.max_rpm,
            on: true,
            operational: true,
        })
    }

    /// The rpm setpoint, regardless of switch or failure state.
    pub fn rpm(&self) -> i64 {
        self.rpm
    }

    /// Set the rpm setpoint. A non-zero rpm switches the pump on.
    pub fn set_rpm(&mut self, rpm: i64) -> ComponentResult<()> {
        check_range("mover rpm", rpm, 0, self.max_rpm)?;
        self.rpm = rpm;
        if rpm != 0 {
            self.on = true;
        }
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    /// Rpm seen by everything downstream: zero when off or broken.
    pub fn effective_rpm(&self) -> i64 {
        if self.on && self.operational {
            self.rpm
        } else {
            0
        }
    }

    /// Water this pump adds to the sink outflow, given the per-pump maximum.
    pub fn contributed_rate(&self, max_rate: i64) -> i64 {
        scale(max_rate, self.effective_rpm(), self.max_rpm)
    }
}

impl Repairable for Mover {
    fn is_operational(&self) -> bool {
        self.operational
    }

    fn set_operational(&mut self, operational: bool) {
        self.operational = operational;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pump() -> Mover {
        Mover::new(MoverParams::default()).unwrap()
    }

    #[test]
    fn mover_rejects_bad_params() {
        assert!(Mover::new(MoverParams { max_rpm: 0 }).is_err());
    }

    #[test]
    fn set_rpm_range() {
        let mut p = pump();
        assert!(p.set_rpm(1000).is_ok());
        assert_eq!(
            p.set_rpm(1001),
            Err(ComponentError::OutOfRange {
                what: "mover rpm",
                value: 1001,
                min: 0,
                max: 1000
            })
        );
        assert!(p.set_rpm(-1).is_err());
        // rejected values leave the setpoint alone
        assert_eq!(p.rpm(), 1000);
    }

    #[test]
    fn effective_rpm_follows_switch_and_failure() {
        let mut p = pump();
        p.set_rpm(600).unwrap();
        assert_eq!(p.effective_rpm(), 600);

        p.set_operational(false);
        assert_eq!(p.effective_rpm(), 0);
        assert_eq!(p.rpm(), 600);

        p.set_operational(true);
        p.set_on(false);
        assert_eq!(p.effective_rpm(), 0);

        // non-zero rpm switches the pump back on
        p.set_rpm(500).unwrap();
        assert!(p.is_on());
        assert_eq!(p.effective_rpm(), 500);

        // zero does not
        p.set_on(false);
        p.set_rpm(0).unwrap();
        assert!(!p.is_on());
    }

    #[test]
    fn contributed_rate_scales_with_rpm() {
        let mut p = pump();
        p.set_rpm(500).unwrap();
        assert_eq!(p.contributed_rate(400), 200);
        p.set_rpm(333).unwrap();
        // 133.2 rounds down
        assert_eq!(p.contributed_rate(400), 133);
        p.set_operational(false);
        assert_eq!(p.contributed_rate(400), 0);
    }
}
