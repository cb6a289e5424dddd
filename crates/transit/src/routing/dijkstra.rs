//! Single-source shortest paths (Dijkstra) over a [`TransitGraph`].
//!
//! Weights are positive minutes, so a station's distance is final the first
//! time it is popped from the frontier. Frontier entries are never updated in
//! place: an improved distance pushes a fresh entry and the stale one is
//! skipped when it surfaces.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::identifiers::StationIdentifier;
use crate::models::{traits::TransitGraph, types::*};
use crate::routing::journey::Journey;

#[derive(Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    minutes: Minutes,
    station: StationIdentifier,
}

// BinaryHeap is a max-heap; flip the comparison on minutes to pop the
// closest station first. Ties fall back to the name so Ord agrees with Eq.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .minutes
            .cmp(&self.minutes)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Tentative distances and predecessors for one search
#[derive(Debug, Default)]
struct SearchState {
    distances: HashMap<StationIdentifier, Minutes>,
    previous: HashMap<StationIdentifier, StationIdentifier>,
}

/// Run Dijkstra from `source`. With a `target`, stop as soon as it is settled.
fn search<G>(graph: &G, source: &StationIdentifier, target: Option<&str>) -> SearchState
where
    G: TransitGraph + ?Sized,
{
    let mut state = SearchState::default();
    let mut frontier = BinaryHeap::new();
    let mut settled = 0usize;

    state.distances.insert(source.clone(), 0);
    frontier.push(FrontierEntry {
        minutes: 0,
        station: source.clone(),
    });

    while let Some(FrontierEntry { minutes, station }) = frontier.pop() {
        if state
            .distances
            .get(&station)
            .is_some_and(|&best| minutes > best)
        {
            continue;
        }
        settled += 1;

        if target == Some(station.as_str()) {
            break;
        }

        for (neighbor, weight) in graph.neighbors(station.as_str()) {
            let candidate = minutes.saturating_add(weight);
            let improves = state
                .distances
                .get(neighbor)
                .is_none_or(|&known| candidate < known);

            if improves {
                state.distances.insert(neighbor.clone(), candidate);
                state.previous.insert(neighbor.clone(), station.clone());
                frontier.push(FrontierEntry {
                    minutes: candidate,
                    station: neighbor.clone(),
                });
            }
        }
    }

    tracing::debug!(
        source = %source,
        settled,
        discovered = state.distances.len(),
        "search finished"
    );
    state
}

impl SearchState {
    /// Walk predecessors back from `destination`.
    ///
    /// Returns `None` when the destination was never reached or the chain
    /// does not lead back to `source`.
    fn reconstruct(&self, source: &StationIdentifier, destination: &str) -> Option<Journey> {
        let (destination, &total_minutes) = self.distances.get_key_value(destination)?;

        let mut stations = vec![destination.clone()];
        let mut current = destination;
        // A well-formed chain visits each discovered station at most once.
        let mut remaining = self.distances.len();

        while current != source {
            if remaining == 0 {
                tracing::warn!(destination = %destination, "predecessor chain does not terminate");
                return None;
            }
            remaining -= 1;

            let Some(previous) = self.previous.get(current) else {
                tracing::warn!(
                    destination = %destination,
                    broken_at = %current,
                    "predecessor chain does not reach the source"
                );
                return None;
            };
            stations.push(previous.clone());
            current = previous;
        }
        stations.reverse();

        let leg_minutes = stations
            .windows(2)
            .map(|pair| Some(self.distances.get(&pair[1])? - self.distances.get(&pair[0])?))
            .collect::<Option<Vec<_>>>()?;

        Some(Journey {
            total_minutes,
            stations,
            leg_minutes,
        })
    }
}

// ============================================================================
// Point-to-point queries
// ============================================================================

/// Minimum-time journey between two stations.
///
/// Both names are checked before any search state is allocated. `Ok(None)`
/// means the destination is not reachable from the source.
pub fn shortest_path<G>(graph: &G, source: &str, destination: &str) -> Result<Option<Journey>>
where
    G: TransitGraph + ?Sized,
{
    let source = graph
        .station_id(source)
        .ok_or_else(|| TransitError::UnknownStation(source.to_string()))?;
    let destination = graph
        .station_id(destination)
        .ok_or_else(|| TransitError::UnknownStation(destination.to_string()))?;

    if source == destination {
        return Ok(Some(Journey::stationary(source.clone())));
    }

    let state = search(graph, source, Some(destination.as_str()));
    Ok(state.reconstruct(source, destination.as_str()))
}

// ============================================================================
// Full shortest-path tree
// ============================================================================

/// Shortest distances from one station to every station reachable from it
#[derive(Debug)]
pub struct ShortestPathTree {
    source: StationIdentifier,
    state: SearchState,
}

impl ShortestPathTree {
    /// Explore the whole component containing `source`
    pub fn compute<G>(graph: &G, source: &str) -> Result<Self>
    where
        G: TransitGraph + ?Sized,
    {
        let source = graph
            .station_id(source)
            .ok_or_else(|| TransitError::UnknownStation(source.to_string()))?
            .clone();
        let state = search(graph, &source, None);
        Ok(Self { source, state })
    }

    pub fn source(&self) -> &StationIdentifier {
        &self.source
    }

    /// Shortest time to a station, `None` when unreachable or unknown
    pub fn distance_to(&self, station: &str) -> Option<Minutes> {
        self.state.distances.get(station).copied()
    }

    pub fn path_to(&self, station: &str) -> Option<Journey> {
        self.state.reconstruct(&self.source, station)
    }

    /// Reachable stations sorted by travel time, then name
    pub fn reachable(&self) -> Vec<(&StationIdentifier, Minutes)> {
        let mut reachable: Vec<_> = self
            .state
            .distances
            .iter()
            .map(|(station, &minutes)| (station, minutes))
            .collect();
        reachable.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        reachable
    }
}
