//! In-memory station graph.
//!
//! Stations are keyed by name and hold a map of neighbor to travel time.
//! Edges are undirected: [`Network::connect`] is the only way to add one and
//! it always writes both directions.

use std::collections::HashMap;

use crate::identifiers::StationIdentifier;
use crate::models::{traits::TransitGraph, types::*};

// ============================================================================
// Station
// ============================================================================

/// A single station and its outgoing connections
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Station {
    id: StationIdentifier,
    connections: HashMap<StationIdentifier, Minutes>,
}

impl Station {
    fn new(id: StationIdentifier) -> Self {
        Self {
            id,
            connections: HashMap::new(),
        }
    }

    pub fn id(&self) -> &StationIdentifier {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.id.as_str()
    }

    /// Travel time to a directly connected station
    pub fn connection(&self, neighbor: &str) -> Option<Minutes> {
        self.connections.get(neighbor).copied()
    }

    pub fn connections(&self) -> impl Iterator<Item = (&StationIdentifier, Minutes)> + '_ {
        self.connections.iter().map(|(id, &minutes)| (id, minutes))
    }

    /// Number of distinct neighbors (a self-loop counts as one)
    pub fn degree(&self) -> usize {
        self.connections.len()
    }
}

// ============================================================================
// Network
// ============================================================================

/// Weighted undirected graph of stations.
///
/// Build it once, then share it by reference: queries never mutate it.
#[derive(Clone, Debug, Default)]
pub struct Network {
    stations: HashMap<StationIdentifier, Station>,
}

impl Network {
    /// Create a new empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station if it is not already present.
    ///
    /// Returns the canonical identifier either way.
    pub fn add_station(&mut self, name: &str) -> StationIdentifier {
        if let Some(station) = self.stations.get(name) {
            return station.id.clone();
        }

        let id = StationIdentifier::new(name);
        self.stations.insert(id.clone(), Station::new(id.clone()));
        id
    }

    /// Connect two existing stations in both directions.
    ///
    /// A repeated call for the same pair overwrites the earlier weight.
    /// `from == to` stores a single self-loop.
    pub fn connect(&mut self, from: &str, to: &str, minutes: Minutes) -> Result<()> {
        let from_id = self.require(from)?.id.clone();
        let to_id = self.require(to)?.id.clone();

        if minutes == 0 {
            return Err(TransitError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        // Both endpoints were checked above, so neither lookup can miss.
        if let Some(station) = self.stations.get_mut(from) {
            station.connections.insert(to_id, minutes);
        }
        if let Some(station) = self.stations.get_mut(to) {
            station.connections.insert(from_id, minutes);
        }

        Ok(())
    }

    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    /// Look up a station, failing with [`TransitError::UnknownStation`]
    pub fn require(&self, name: &str) -> Result<&Station> {
        self.stations
            .get(name)
            .ok_or_else(|| TransitError::UnknownStation(name.to_string()))
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Travel time on the direct edge between two stations
    pub fn weight(&self, from: &str, to: &str) -> Option<Minutes> {
        self.stations.get(from)?.connection(to)
    }

    /// Number of undirected edges, self-loops counted once
    pub fn connection_count(&self) -> usize {
        let mut ends = 0;
        let mut loops = 0;
        for station in self.stations.values() {
            for (neighbor, _) in station.connections() {
                if neighbor == &station.id {
                    loops += 1;
                } else {
                    ends += 1;
                }
            }
        }
        ends / 2 + loops
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl TransitGraph for Network {
    fn contains_station(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    fn station_id(&self, name: &str) -> Option<&StationIdentifier> {
        self.stations.get(name).map(|s| &s.id)
    }

    fn neighbors<'a>(
        &'a self,
        name: &str,
    ) -> Box<dyn Iterator<Item = (&'a StationIdentifier, Minutes)> + 'a> {
        match self.stations.get(name) {
            Some(station) => Box::new(station.connections()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn station_count(&self) -> usize {
        self.stations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(names: &[&str], minutes: &[Minutes]) -> Network {
        let mut network = Network::new();
        for pair in names.windows(2).zip(minutes) {
            let (stops, &m) = pair;
            network.add_station(stops[0]);
            network.add_station(stops[1]);
            network.connect(stops[0], stops[1], m).unwrap();
        }
        network
    }

    #[test]
    fn test_empty_network() {
        let network = Network::new();
        assert!(network.is_empty());
        assert_eq!(network.station_count(), 0);
        assert_eq!(network.connection_count(), 0);
    }

    #[test]
    fn test_add_station_is_idempotent() {
        let mut network = Network::new();
        let first = network.add_station("A");
        network.add_station("B");
        network.connect("A", "B", 3).unwrap();

        let again = network.add_station("A");
        assert_eq!(first, again);
        assert_eq!(network.station_count(), 2);
        // Re-insertion must not wipe existing connections
        assert_eq!(network.weight("A", "B"), Some(3));
    }

    #[test]
    fn test_connect_is_symmetric() {
        let network = line(&["A", "B", "C"], &[3, 2]);

        assert_eq!(network.weight("A", "B"), Some(3));
        assert_eq!(network.weight("B", "A"), Some(3));
        assert_eq!(network.weight("B", "C"), Some(2));
        assert_eq!(network.weight("C", "B"), Some(2));
        assert_eq!(network.weight("A", "C"), None);
        assert_eq!(network.connection_count(), 2);
    }

    #[test]
    fn test_connect_last_write_wins() {
        let mut network = line(&["A", "B"], &[3]);
        network.connect("B", "A", 7).unwrap();

        assert_eq!(network.weight("A", "B"), Some(7));
        assert_eq!(network.weight("B", "A"), Some(7));
        assert_eq!(network.connection_count(), 1);
    }

    #[test]
    fn test_connect_unknown_station() {
        let mut network = line(&["A", "B"], &[3]);

        assert_eq!(
            network.connect("A", "Z", 1),
            Err(TransitError::UnknownStation("Z".into()))
        );
        assert_eq!(
            network.connect("Y", "A", 1),
            Err(TransitError::UnknownStation("Y".into()))
        );
        // Nothing was half-inserted
        assert_eq!(network.station("A").unwrap().degree(), 1);
    }

    #[test]
    fn test_connect_rejects_zero_minutes() {
        let mut network = line(&["A", "B"], &[3]);
        assert!(matches!(
            network.connect("A", "B", 0),
            Err(TransitError::InvalidWeight { .. })
        ));
        assert_eq!(network.weight("A", "B"), Some(3));
    }

    #[test]
    fn test_self_loop_transfer() {
        let mut network = line(&["A", "M", "B"], &[2, 2]);
        network.connect("M", "M", 5).unwrap();

        let m = network.station("M").unwrap();
        assert_eq!(m.connection("M"), Some(5));
        assert_eq!(m.degree(), 3);
        assert_eq!(network.connection_count(), 3);
    }

    #[test]
    fn test_graph_trait_lookups() {
        let network = line(&["A", "B"], &[4]);

        assert!(network.contains_station("A"));
        assert!(!network.contains_station("Q"));
        assert_eq!(network.station_id("B").map(|id| id.as_str()), Some("B"));

        let neighbors: Vec<_> = network.neighbors("A").collect();
        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].0.as_str(), "B");
        assert_eq!(neighbors[0].1, 4);

        assert_eq!(network.neighbors("Q").count(), 0);
    }
}
