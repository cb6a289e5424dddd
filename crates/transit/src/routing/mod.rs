//! Shortest-time routing over a station graph.

pub mod dijkstra;
pub mod journey;

pub use dijkstra::{shortest_path, ShortestPathTree};
pub use journey::Journey;
