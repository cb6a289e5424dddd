//! # metro-transit
//!
//! Shortest-time routing over a fixed metro network.
//!
//! ## Features
//!
//! - **Name-keyed graph**: stations are identified by name, edges are undirected
//! - **Line construction**: build a network from ordered stations and segment times
//! - **Dijkstra routing**: point-to-point journeys and full shortest-path trees
//! - **Built-in data**: Busan Metro lines 1-4
//! - **Serde support**: load network definitions from JSON (optional)
//!
//! ## Example
//!
//! ```
//! use metro_transit::prelude::*;
//!
//! let definition = NetworkDefinition {
//!     lines: vec![LineDefinition::new("Line A", ["A", "B", "C"], [3, 2])],
//!     transfers: vec![TransferDefinition::interchange("B", 5)],
//! };
//!
//! let (network, _stats) = definition.build(BuildOptions::default()).unwrap();
//!
//! let journey = shortest_path(&network, "A", "C").unwrap().expect("A and C are connected");
//! assert_eq!(journey.total_minutes, 5);
//! let names: Vec<&str> = journey.stations.iter().map(|s| s.as_str()).collect();
//! assert_eq!(names, ["A", "B", "C"]);
//!
//! assert!(shortest_path(&network, "A", "Z").is_err());
//! ```

pub mod identifiers;
pub mod models;
pub mod network;
pub mod provider;
pub mod routing;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{traits::*, types::*};
    pub use crate::network::{
        BuildOptions, LineDefinition, LineLengthPolicy, Network, NetworkBuilder,
        NetworkDefinition, NetworkStats, Station, TransferDefinition,
    };
    pub use crate::routing::{shortest_path, Journey, ShortestPathTree};
}

pub use prelude::*;
