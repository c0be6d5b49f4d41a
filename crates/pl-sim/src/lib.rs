//! Closed-loop plant engine.
//!
//! Provides:
//! - Plant assembly from a validated topology (PlantBuilder, Plant::standard)
//! - Per-step blockage resolution, flow propagation and vessel transfer
//! - Component failure and timed repair
//! - Fixed-length runs with decimated snapshots (run_sim)
//!
//! # Example
//!
//! ```
//! use pl_sim::{Plant, PlantConfig};
//!
//! let mut plant = Plant::standard(&PlantConfig::default()).unwrap();
//! plant.set_control_rods(50).unwrap();
//! plant.advance(3).unwrap();
//! assert_eq!(plant.reactor().control_rods(), 50);
//! assert_eq!(plant.step_count(), 3);
//! ```

pub mod blockage;
pub mod config;
pub mod error;
pub mod events;
pub mod plant;
pub mod propagate;
pub mod repair;
pub mod sim;
pub mod snapshot;

mod physics;

// Re-exports for public API
pub use blockage::BlockageMap;
pub use config::{FlowParams, PlantConfig};
pub use error::{SimError, SimResult};
pub use events::{FatalFailure, VesselKind};
pub use plant::{Plant, PlantBuilder, PlantNode};
pub use repair::RepairQueue;
pub use sim::{SimOptions, SimProgress, SimRecord, run_sim, run_sim_scripted, run_sim_with_progress};
pub use snapshot::{FlowSnapshot, MoverSnapshot, PlantSnapshot, SpinnerSnapshot, ThrottleSnapshot};
