//! Condenser: the water-producing pressurized vessel.
//!
//! Steam arriving from the core heats the condenser, a detached coolant pump
//! cools it, and whatever the temperature headroom allows is condensed back
//! into water.

use pl_core::{ceil_to_i64, check_non_negative, check_range, scale};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ComponentError, ComponentResult};
use crate::traits::PressureVessel;
use crate::vessel::VesselState;

/// Condenser constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CondenserParams {
    pub initial_water: i64,
    pub initial_temperature: i64,
    pub initial_health: i64,
    pub max_temperature: i64,
    pub max_pressure: i64,
    /// Temperature of the incoming coolant; cooldown never goes below it.
    pub coolant_temperature: i64,
    pub max_cooldown_per_step: i64,
    pub cond_multiplier: f64,
    pub water_steam_ratio: i64,
    pub pressure_constant: f64,
    pub damage_per_violation: i64,
}

impl Default for CondenserParams {
    fn default() -> Self {
        Self {
            initial_water: 2000,
            initial_temperature: 50,
            initial_health: 100,
            max_temperature: 2000,
            max_pressure: 2000,
            coolant_temperature: 20,
            max_cooldown_per_step: 500,
            cond_multiplier: 2.0,
            water_steam_ratio: 2,
            pressure_constant: 0.15,
            damage_per_violation: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condenser {
    params: CondenserParams,
    state: VesselState,
    steam_in: i64,
    inflow_temperature: i64,
    last_condensed: i64,
}

impl Condenser {
    pub fn new(params: CondenserParams) -> ComponentResult<Self> {
        check_non_negative("condenser initial water", params.initial_water)?;
        if params.water_steam_ratio <= 0 {
            return Err(ComponentError::InvalidArg {
                what: "water:steam ratio must be positive",
            });
        }
        Ok(Self {
            state: VesselState::new(
                params.initial_water,
                params.initial_temperature,
                params.initial_health,
            ),
            steam_in: 0,
            inflow_temperature: 0,
            last_condensed: 0,
            params,
        })
    }

    pub fn params(&self) -> &CondenserParams {
        &self.params
    }

    /// Receive steam from the core side at the given temperature.
    ///
    /// Call at most once per step: the amount feeds the next heating term.
    pub fn add_steam(&mut self, volume: i64, temperature: i64) -> ComponentResult<()> {
        check_non_negative("steam volume in", volume)?;
        self.steam_in = volume;
        self.inflow_temperature = temperature;
        self.state.steam_volume += volume;
        Ok(())
    }

    /// Send water back towards the core.
    pub fn pump_out_water(&mut self, volume: i64) -> ComponentResult<()> {
        check_range("pumped-out water volume", volume, 0, self.state.water_volume)?;
        self.state.water_volume -= volume;
        Ok(())
    }

    pub fn set_temperature(&mut self, temperature: i64) {
        self.state.temperature = temperature;
    }

    pub fn set_water_volume(&mut self, volume: i64) -> ComponentResult<()> {
        check_non_negative("condenser water volume", volume)?;
        self.state.water_volume = volume;
        Ok(())
    }

    pub fn set_steam_volume(&mut self, volume: i64) -> ComponentResult<()> {
        check_non_negative("condenser steam volume", volume)?;
        self.state.steam_volume = volume;
        Ok(())
    }

    /// Overwrite the health; zero or below counts as failed.
    pub fn set_health(&mut self, health: i64) {
        self.state.health = health;
    }

    /// Water created by condensation in the last update.
    pub fn last_condensed(&self) -> i64 {
        self.last_condensed
    }

    /// Advance by one step, cooled by a pump running at `coolant_rpm` of `coolant_max_rpm`.
    pub fn update_state(&mut self, coolant_rpm: i64, coolant_max_rpm: i64) {
        let heating = self.heating();
        let cooldown = self.cooldown(coolant_rpm, coolant_max_rpm);
        self.state.temperature += heating - cooldown;
        self.last_condensed = self.condense();
        self.state.update_pressure(self.params.pressure_constant);
        self.check_damage();
        self.steam_in = 0;

        trace!(
            heating,
            cooldown,
            temperature = self.state.temperature,
            condensed = self.last_condensed,
            pressure = self.state.pressure,
            "condenser update"
        );
    }

    /// Integer fraction: full difference whenever any steam arrived.
    fn heating(&self) -> i64 {
        let steam = self.state.steam_volume;
        if steam < 1 || self.steam_in == 0 {
            return 0;
        }
        let diff = self.inflow_temperature - self.state.temperature;
        diff * (1 - (steam - self.steam_in) / steam)
    }

    fn cooldown(&self, coolant_rpm: i64, coolant_max_rpm: i64) -> i64 {
        let per_step = scale(self.params.max_cooldown_per_step, coolant_rpm, coolant_max_rpm);
        if self.state.temperature - per_step > self.params.coolant_temperature {
            per_step
        } else {
            self.state.temperature - self.params.coolant_temperature
        }
    }

    fn condense(&mut self) -> i64 {
        let ratio = self.params.water_steam_ratio;
        let headroom = self.params.max_temperature - self.state.temperature;
        let steam = if headroom > 0 {
            ceil_to_i64(headroom as f64 * self.params.cond_multiplier)
                .clamp(0, self.state.steam_volume)
        } else {
            0
        };
        let mut water = ceil_to_i64(steam as f64 / ratio as f64);
        if water * ratio > self.state.steam_volume {
            water = self.state.steam_volume / ratio;
        }
        self.state.condense(water, ratio);
        water
    }

    fn check_damage(&mut self) {
        let amount = self.params.damage_per_violation;
        if self.state.temperature >= self.params.max_temperature {
            self.state.damage(amount);
        }
        if self.state.pressure >= self.params.max_pressure {
            self.state.damage(amount);
        }
    }
}

impl PressureVessel for Condenser {
    fn vessel(&self) -> &VesselState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condenser() -> Condenser {
        Condenser::new(CondenserParams::default()).unwrap()
    }

    #[test]
    fn initial_state() {
        let c = condenser();
        assert_eq!(c.water_volume(), 2000);
        assert_eq!(c.steam_volume(), 0);
        assert_eq!(c.temperature(), 50);
        assert_eq!(c.health(), 100);
    }

    #[test]
    fn coolant_never_cools_below_inlet() {
        let mut c = condenser();
        c.update_state(1000, 1000);
        assert_eq!(c.temperature(), 20);
    }

    #[test]
    fn coolant_cooldown_scales_with_rpm() {
        let mut c = condenser();
        c.set_temperature(1000);
        c.update_state(500, 1000);
        assert_eq!(c.temperature(), 750);
    }

    #[test]
    fn no_heating_without_steam_in() {
        let mut c = condenser();
        c.set_steam_volume(100).unwrap();
        c.set_temperature(1990);
        c.update_state(0, 1000);
        assert_eq!(c.temperature(), 1990);
    }

    #[test]
    fn steam_in_heats_to_inflow_temperature() {
        let mut c = condenser();
        c.add_steam(100, 300).unwrap();
        c.update_state(0, 1000);
        assert_eq!(c.temperature(), 300);
        // all 100 units fit in the headroom
        assert_eq!(c.last_condensed(), 50);
        assert_eq!(c.steam_volume(), 0);
        assert_eq!(c.water_volume(), 2050);
    }

    #[test]
    fn condensation_limited_by_headroom() {
        let mut c = condenser();
        c.set_steam_volume(500).unwrap();
        c.set_temperature(1900);
        c.update_state(0, 1000);
        // ceil(100 * 2) = 200 steam -> 100 water
        assert_eq!(c.last_condensed(), 100);
        assert_eq!(c.steam_volume(), 300);
        assert_eq!(c.water_volume(), 2100);
        assert_eq!(c.pressure(), 45);
    }

    #[test]
    fn odd_steam_never_goes_negative() {
        let mut c = condenser();
        c.set_steam_volume(101).unwrap();
        c.update_state(0, 1000);
        assert_eq!(c.last_condensed(), 50);
        assert_eq!(c.steam_volume(), 1);
        assert_eq!(c.water_volume(), 2050);
    }

    #[test]
    fn damage_at_threshold() {
        let mut c = condenser();
        c.set_temperature(2000);
        c.set_steam_volume(14_000).unwrap();
        c.update_state(0, 1000);
        // no headroom, nothing condenses; pressure 2100
        assert_eq!(c.last_condensed(), 0);
        assert_eq!(c.health(), 90);
    }

    #[test]
    fn pump_out_bounds() {
        let mut c = condenser();
        assert!(c.pump_out_water(2001).is_err());
        assert!(c.pump_out_water(-1).is_err());
        c.pump_out_water(500).unwrap();
        assert_eq!(c.water_volume(), 1500);
        assert!(c.add_steam(-1, 100).is_err());
    }
}
