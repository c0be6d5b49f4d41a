//! pl-core: stable foundation for plantloop.
//!
//! Contains:
//! - ids (stable compact IDs for plant nodes)
//! - numeric (integer game arithmetic shared by every component)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PlError, PlResult};
pub use ids::*;
pub use numeric::*;
