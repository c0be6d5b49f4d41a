//! Shared behaviour of plant components.

use crate::vessel::VesselState;

/// A component that can break down and be repaired.
///
/// Consumers read `is_operational` fresh every step; flipping it between
/// steps needs no other bookkeeping.
pub trait Repairable {
    fn is_operational(&self) -> bool;

    fn set_operational(&mut self, operational: bool);
}

/// A pressurized boundary vessel (reactor or condenser).
pub trait PressureVessel {
    /// Current thermodynamic state.
    fn vessel(&self) -> &VesselState;

    fn temperature(&self) -> i64 {
        self.vessel().temperature
    }

    fn pressure(&self) -> i64 {
        self.vessel().pressure
    }

    fn water_volume(&self) -> i64 {
        self.vessel().water_volume
    }

    fn steam_volume(&self) -> i64 {
        self.vessel().steam_volume
    }

    fn health(&self) -> i64 {
        self.vessel().health
    }

    /// True once health has reached zero or below.
    fn has_failed(&self) -> bool {
        self.vessel().health <= 0
    }
}
