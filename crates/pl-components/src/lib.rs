//! pl-components: component library for the reactor plant.
//!
//! Provides models for every node kind in the plant loop:
//! - `Flow` values carried on node outputs
//! - Throttles (valves), movers (pumps) and spinners (turbines)
//! - The power tap (generator) driven by a spinner
//! - The two pressurized vessels: `Reactor` and `Condenser`
//!
//! Components are plain state plus deterministic update rules. Wiring them
//! into a graph and ordering the updates is the job of `pl-sim`.
//!
//! # Example
//!
//! ```
//! use pl_components::{PressureVessel, Reactor, ReactorParams};
//!
//! let mut reactor = Reactor::new(ReactorParams::default()).unwrap();
//! reactor.set_control_rods(0).unwrap();
//! reactor.update_state();
//!
//! assert_eq!(reactor.temperature(), 150);
//! ```

pub mod condenser;
pub mod error;
pub mod flow;
pub mod mover;
pub mod power_tap;
pub mod reactor;
pub mod spinner;
pub mod throttle;
pub mod traits;
pub mod vessel;

// Re-exports
pub use condenser::{Condenser, CondenserParams};
pub use error::{ComponentError, ComponentResult};
pub use flow::{Flow, Medium};
pub use mover::{Mover, MoverParams};
pub use power_tap::{PowerTap, PowerTapParams};
pub use reactor::{Reactor, ReactorParams};
pub use spinner::{Spinner, SpinnerParams};
pub use throttle::{Throttle, ThrottleParams};
pub use traits::{PressureVessel, Repairable};
pub use vessel::VesselState;
