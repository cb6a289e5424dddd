//! Station graph storage and construction.

pub mod builder;
pub mod graph;

pub use builder::{
    BuildOptions, LineDefinition, LineLengthPolicy, NetworkBuilder, NetworkDefinition,
    NetworkStats, TransferDefinition,
};
pub use graph::{Network, Station};
