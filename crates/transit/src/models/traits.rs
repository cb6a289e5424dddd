//! Read-only graph interface consumed by the routing engine.
//!
//! The engine only needs to look stations up and walk their connections,
//! so anything that can answer those questions can be routed over.

use crate::identifiers::StationIdentifier;
use crate::models::types::Minutes;

/// A weighted, undirected station graph
pub trait TransitGraph: Send + Sync {
    /// Whether a station with this name exists
    fn contains_station(&self, name: &str) -> bool;

    /// Canonical identifier for a station name, if present
    fn station_id(&self, name: &str) -> Option<&StationIdentifier>;

    /// Neighbors of a station with the travel time to each.
    ///
    /// Yields nothing for unknown stations.
    fn neighbors<'a>(
        &'a self,
        name: &str,
    ) -> Box<dyn Iterator<Item = (&'a StationIdentifier, Minutes)> + 'a>;

    /// Number of stations in the graph
    fn station_count(&self) -> usize;
}
