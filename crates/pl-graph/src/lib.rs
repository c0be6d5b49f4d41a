//! pl-graph: static topology of the plant.
//!
//! Provides:
//! - Node roles and upstream/downstream links (Topology, Node, Links)
//! - Incremental topology builder with validation
//! - Role index listing branch, throttle, mover and spinner nodes
//!
//! The topology is fixed once built; only per-step edge state (blockage) and
//! node state vary, and those live in the simulation crate.
//!
//! # Example
//!
//! ```
//! use pl_graph::{NodeRole, TopologyBuilder};
//!
//! let mut builder = TopologyBuilder::new();
//! let core = builder.add_node("reactor", NodeRole::Core);
//! let valve = builder.add_node("valve", NodeRole::Throttle);
//! let sink = builder.add_node("condenser", NodeRole::Sink);
//! let pump = builder.add_node("pump", NodeRole::Mover);
//! builder.connect(core, valve);
//! builder.connect(valve, sink);
//! builder.connect(sink, pump);
//! builder.connect(pump, core);
//! let topology = builder.build().unwrap();
//!
//! assert_eq!(topology.len(), 4);
//! assert_eq!(topology.downstream(core), Some(valve));
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::TopologyBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{LinkEnd, Links, Node, NodeRole, Topology};
pub use indexing::RoleIndex;
