//! Flow values carried on every node's outgoing edge.

use serde::{Deserialize, Serialize};

/// What a flow carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medium {
    Water,
    Steam,
}

/// Rate and temperature leaving a node this step.
///
/// Both quantities are non-negative. The setters silently keep the previous
/// value when handed a negative number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flow {
    rate: i64,
    temperature: i64,
    medium: Medium,
}

impl Flow {
    /// A zero flow of the given medium.
    pub fn new(medium: Medium) -> Self {
        Self {
            rate: 0,
            temperature: 0,
            medium,
        }
    }

    pub fn rate(&self) -> i64 {
        self.rate
    }

    pub fn temperature(&self) -> i64 {
        self.temperature
    }

    pub fn medium(&self) -> Medium {
        self.medium
    }

    pub fn set_rate(&mut self, rate: i64) {
        if rate >= 0 {
            self.rate = rate;
        }
    }

    pub fn set_temperature(&mut self, temperature: i64) {
        if temperature >= 0 {
            self.temperature = temperature;
        }
    }

    pub fn set_medium(&mut self, medium: Medium) {
        self.medium = medium;
    }

    /// Set rate and temperature together (each negative value is ignored).
    pub fn set(&mut self, rate: i64, temperature: i64) {
        self.set_rate(rate);
        self.set_temperature(temperature);
    }

    /// Zero rate and temperature, keeping the medium.
    pub fn reset(&mut self) {
        self.rate = 0;
        self.temperature = 0;
    }
}
