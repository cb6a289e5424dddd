//! Core network types, errors, and traits.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::TransitGraph;
pub use types::{Minutes, Result, TransitError};
