//! Query results.

use crate::identifiers::StationIdentifier;
use crate::models::types::Minutes;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One minimum-time path between two stations
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Journey {
    pub total_minutes: Minutes,
    /// Stations in travel order, origin first
    pub stations: Vec<StationIdentifier>,
    /// `leg_minutes[i]` is the time from `stations[i]` to `stations[i + 1]`
    pub leg_minutes: Vec<Minutes>,
}

impl Journey {
    /// Journey from a station to itself
    pub(crate) fn stationary(station: StationIdentifier) -> Self {
        Self {
            total_minutes: 0,
            stations: vec![station],
            leg_minutes: Vec::new(),
        }
    }

    /// First station. Journeys returned by routing are never empty.
    pub fn origin(&self) -> Option<&StationIdentifier> {
        self.stations.first()
    }

    pub fn destination(&self) -> Option<&StationIdentifier> {
        self.stations.last()
    }

    /// Number of stations passed through, including both ends
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Consecutive `(from, to, minutes)` hops
    pub fn legs(&self) -> impl Iterator<Item = (&StationIdentifier, &StationIdentifier, Minutes)> {
        self.stations
            .windows(2)
            .zip(&self.leg_minutes)
            .map(|(pair, &minutes)| (&pair[0], &pair[1], minutes))
    }
}
