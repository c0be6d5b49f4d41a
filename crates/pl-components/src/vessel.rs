//! State shared by the two pressurized vessels.

use pl_core::round_half_up;
use serde::{Deserialize, Serialize};

/// Temperature, pressure, volumes and health of a vessel.
///
/// Volumes never go negative; pressure is always derived from the steam
/// volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselState {
    pub temperature: i64,
    pub pressure: i64,
    pub water_volume: i64,
    pub steam_volume: i64,
    pub health: i64,
}

impl VesselState {
    /// Fresh vessel with no steam and no pressure.
    pub fn new(water_volume: i64, temperature: i64, health: i64) -> Self {
        Self {
            temperature,
            pressure: 0,
            water_volume,
            steam_volume: 0,
            health,
        }
    }

    /// `pressure = round(steam * pressure_constant)`.
    pub fn update_pressure(&mut self, pressure_constant: f64) {
        self.pressure = round_half_up(self.steam_volume as f64 * pressure_constant);
    }

    pub fn damage(&mut self, amount: i64) {
        self.health -= amount;
    }

    /// Turn `water` units of water into `water * ratio` units of steam.
    pub fn boil(&mut self, water: i64, ratio: i64) {
        self.water_volume -= water;
        self.steam_volume += water * ratio;
    }

    /// Turn `water * ratio` units of steam back into `water` units of water.
    pub fn condense(&mut self, water: i64, ratio: i64) {
        self.steam_volume -= water * ratio;
        self.water_volume += water;
    }
}
