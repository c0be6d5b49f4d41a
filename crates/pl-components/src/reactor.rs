//! Reactor core: the steam-producing pressurized vessel.
//!
//! Per-step update, in order:
//!
//! ```text
//! heating  = round(max_heating * m * (1 - rods/100))     m = unsafe multiplier when water <= min safe, else 1
//! cooldown = round((T - T_in) * (1 - (water - pumped_in) / water))     0 when water < 1
//! T       += heating - cooldown
//! if T > boiling point: boil min(round(T * evap_multiplier), water) water into steam
//! pressure = round(steam * pressure_constant)
//! health  -= damage for each of: T > max, pressure > max, water < min safe
//! ```

use pl_core::{ceil_to_i64, check_non_negative, check_range, percent, round_half_up};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ComponentError, ComponentResult};
use crate::traits::PressureVessel;
use crate::vessel::VesselState;

/// Reactor constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactorParams {
    pub initial_water: i64,
    pub initial_temperature: i64,
    pub initial_health: i64,
    pub max_temperature: i64,
    pub max_pressure: i64,
    pub max_heating_per_step: i64,
    pub unsafe_heating_multiplier: i64,
    pub min_safe_water: i64,
    pub boiling_point: i64,
    pub evap_multiplier: f64,
    pub water_steam_ratio: i64,
    pub pressure_constant: f64,
    pub damage_per_violation: i64,
    /// Share of the steam condensed by a quench.
    pub quench_fraction: f64,
    pub quench_temperature: i64,
    pub initial_control_rods: i64,
}

impl Default for ReactorParams {
    fn default() -> Self {
        Self {
            initial_water: 8000,
            initial_temperature: 50,
            initial_health: 100,
            max_temperature: 2865,
            max_pressure: 2000,
            max_heating_per_step: 100,
            unsafe_heating_multiplier: 2,
            min_safe_water: 2000,
            boiling_point: 285,
            evap_multiplier: 0.2,
            water_steam_ratio: 2,
            pressure_constant: 0.15,
            damage_per_violation: 10,
            quench_fraction: 0.9,
            quench_temperature: 50,
            initial_control_rods: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reactor {
    params: ReactorParams,
    state: VesselState,
    control_rods: i64,
    quench_used: bool,
    /// Water pumped in since the last update and its temperature.
    water_pumped_in: i64,
    inflow_temperature: i64,
    last_evaporated: i64,
}

impl Reactor {
    pub fn new(params: ReactorParams) -> ComponentResult<Self> {
        check_non_negative("reactor initial water", params.initial_water)?;
        check_range("control rods", params.initial_control_rods, 0, 100)?;
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
            control_rods: params.initial_control_rods,
            quench_used: false,
            water_pumped_in: 0,
            inflow_temperature: 0,
            last_evaporated: 0,
            params,
        })
    }

    pub fn params(&self) -> &ReactorParams {
        &self.params
    }

    /// How far the control rods are lowered, in percent.
    pub fn control_rods(&self) -> i64 {
        self.control_rods
    }

    /// Lower or raise the control rods. Only 0..=100 is accepted.
    pub fn set_control_rods(&mut self, percent_lowered: i64) -> ComponentResult<()> {
        check_range("control rods", percent_lowered, 0, 100)?;
        self.control_rods = percent_lowered;
        Ok(())
    }

    /// Add water returned from the sink side, at the given temperature.
    ///
    /// Call at most once per step: the amount feeds the next cooldown term.
    pub fn pump_in_water(&mut self, volume: i64, temperature: i64) -> ComponentResult<()> {
        check_non_negative("pumped-in water volume", volume)?;
        self.water_pumped_in = volume;
        self.inflow_temperature = temperature;
        self.state.water_volume += volume;
        Ok(())
    }

    /// Remove steam sent towards the sink.
    pub fn remove_steam(&mut self, volume: i64) -> ComponentResult<()> {
        check_range("removed steam volume", volume, 0, self.state.steam_volume)?;
        self.state.steam_volume -= volume;
        Ok(())
    }

    pub fn set_temperature(&mut self, temperature: i64) {
        self.state.temperature = temperature;
    }

    pub fn set_water_volume(&mut self, volume: i64) -> ComponentResult<()> {
        check_non_negative("reactor water volume", volume)?;
        self.state.water_volume = volume;
        Ok(())
    }

    /// Overwrite the steam volume; pressure follows on the next update.
    pub fn set_steam_volume(&mut self, volume: i64) -> ComponentResult<()> {
        check_non_negative("reactor steam volume", volume)?;
        self.state.steam_volume = volume;
        Ok(())
    }

    /// Overwrite the health; zero or below counts as failed.
    pub fn set_health(&mut self, health: i64) {
        self.state.health = health;
    }

    pub fn quench_available(&self) -> bool {
        !self.quench_used
    }

    /// Water boiled off in the last update.
    pub fn last_evaporated(&self) -> i64 {
        self.last_evaporated
    }

    /// Advance temperature, phase change, pressure and health by one step.
    pub fn update_state(&mut self) {
        let heating = self.heating();
        let cooldown = self.cooldown();
        self.state.temperature += heating - cooldown;
        self.last_evaporated = self.evaporate();
        self.state.update_pressure(self.params.pressure_constant);
        self.check_damage();
        self.water_pumped_in = 0;

        trace!(
            heating,
            cooldown,
            temperature = self.state.temperature,
            evaporated = self.last_evaporated,
            pressure = self.state.pressure,
            "reactor update"
        );
    }

    fn heating(&self) -> i64 {
        let mut max = self.params.max_heating_per_step;
        if self.state.water_volume <= self.params.min_safe_water {
            max *= self.params.unsafe_heating_multiplier;
        }
        round_half_up(max as f64 * (1.0 - percent(self.control_rods)))
    }

    fn cooldown(&self) -> i64 {
        let water = self.state.water_volume;
        if water < 1 {
            return 0;
        }
        let diff = self.state.temperature - self.inflow_temperature;
        let replaced = 1.0 - (water - self.water_pumped_in) as f64 / water as f64;
        round_half_up(diff as f64 * replaced)
    }

    fn evaporate(&mut self) -> i64 {
        if self.state.temperature <= self.params.boiling_point {
            return 0;
        }
        let boiled = round_half_up(self.state.temperature as f64 * self.params.evap_multiplier)
            .clamp(0, self.state.water_volume);
        self.state.boil(boiled, self.params.water_steam_ratio);
        boiled
    }

    fn check_damage(&mut self) {
        let amount = self.params.damage_per_violation;
        if self.state.temperature > self.params.max_temperature {
            self.state.damage(amount);
        }
        if self.state.pressure > self.params.max_pressure {
            self.state.damage(amount);
        }
        if self.state.water_volume < self.params.min_safe_water {
            self.state.damage(amount);
        }
    }

    /// Emergency quench, usable once per game.
    ///
    /// Condenses most of the steam back into water, drops the temperature and
    /// recomputes pressure. Returns `false` and changes nothing once used.
    pub fn quench(&mut self) -> bool {
        if self.quench_used {
            return false;
        }
        let ratio = self.params.water_steam_ratio;
        let steam = ceil_to_i64(self.state.steam_volume as f64 * self.params.quench_fraction)
            .clamp(0, self.state.steam_volume);
        self.state.condense(steam / ratio, ratio);
        self.state.temperature = self.params.quench_temperature;
        self.state.update_pressure(self.params.pressure_constant);
        self.quench_used = true;
        true
    }
}

impl PressureVessel for Reactor {
    fn vessel(&self) -> &VesselState {
        &self.state
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn update_conserves_inventory(
            water in 0_i64..10_000,
            steam in 0_i64..10_000,
            temperature in 0_i64..4000,
            rods in 0_i64..=100,
        ) {
            let mut r = Reactor::new(ReactorParams::default()).unwrap();
            r.set_water_volume(water).unwrap();
            r.set_steam_volume(steam).unwrap();
            r.set_temperature(temperature);
            r.set_control_rods(rods).unwrap();
            let before = 2 * r.water_volume() + r.steam_volume();

            r.update_state();

            prop_assert_eq!(2 * r.water_volume() + r.steam_volume(), before);
            prop_assert!(r.water_volume() >= 0);
            prop_assert_eq!(water - r.water_volume(), r.last_evaporated());
        }
    }
}
