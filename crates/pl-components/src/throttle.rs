//! Throttle (valve) component.

use serde::{Deserialize, Serialize};

/// Throttle parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleParams {
    /// Maximum flow per step through a single throttle.
    pub max_throughput: i64,
}

impl Default for ThrottleParams {
    fn default() -> Self {
        Self {
            max_throughput: 300,
        }
    }
}

/// On/off valve. A closed throttle blocks its whole upstream chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Throttle {
    pub open: bool,
    pub max_throughput: i64,
}

impl Throttle {
    /// Create an open throttle.
    pub fn new(params: ThrottleParams) -> Self {
        Self {
            open: true,
            max_throughput: params.max_throughput,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_starts_open() {
        let mut valve = Throttle::new(ThrottleParams::default());
        assert!(valve.is_open());
        assert_eq!(valve.max_throughput, 300);
        valve.set_open(false);
        assert!(!valve.is_open());
    }
}
