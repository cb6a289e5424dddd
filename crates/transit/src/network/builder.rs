//! Network construction from line and transfer definitions.

use crate::identifiers::LineIdentifier;
use crate::models::types::*;
use crate::network::graph::Network;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Definitions
// ============================================================================

/// One line: stations in running order and the time of each segment.
///
/// `minutes[i]` is the travel time between `stations[i]` and `stations[i + 1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineDefinition {
    pub name: LineIdentifier,
    pub stations: Vec<String>,
    pub minutes: Vec<Minutes>,
}

impl LineDefinition {
    pub fn new(
        name: impl Into<LineIdentifier>,
        stations: impl IntoIterator<Item = impl Into<String>>,
        minutes: impl Into<Vec<Minutes>>,
    ) -> Self {
        Self {
            name: name.into(),
            stations: stations.into_iter().map(Into::into).collect(),
            minutes: minutes.into(),
        }
    }

    /// Segments that will actually be built: `min(stations - 1, minutes)`
    pub fn segment_count(&self) -> usize {
        self.stations.len().saturating_sub(1).min(self.minutes.len())
    }

    /// Whether station and segment-time counts disagree
    pub fn is_mismatched(&self) -> bool {
        self.stations.len().saturating_sub(1) != self.minutes.len()
    }
}

/// An explicit connection between two stations, typically an interchange
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransferDefinition {
    pub from: String,
    pub to: String,
    pub minutes: Minutes,
}

impl TransferDefinition {
    pub fn new(from: impl Into<String>, to: impl Into<String>, minutes: Minutes) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            minutes,
        }
    }

    /// A same-station interchange, stored as a self-loop
    pub fn interchange(station: impl Into<String>, minutes: Minutes) -> Self {
        let station = station.into();
        Self::new(station.clone(), station, minutes)
    }
}

/// Everything needed to build a [`Network`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkDefinition {
    pub lines: Vec<LineDefinition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub transfers: Vec<TransferDefinition>,
}

// ============================================================================
// Options & Stats
// ============================================================================

/// What to do when a line's segment times don't match its stations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineLengthPolicy {
    /// Build only the segments that have both endpoints and a time
    #[default]
    Truncate,
    /// Fail with [`TransitError::MalformedLine`]
    Reject,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BuildOptions {
    pub line_policy: LineLengthPolicy,
}

impl BuildOptions {
    pub fn strict() -> Self {
        Self {
            line_policy: LineLengthPolicy::Reject,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetworkStats {
    pub stations: usize,
    pub connections: usize,
    pub lines: usize,
    pub transfers: usize,
    /// Segments dropped because a line had too few times or stations
    pub truncated_segments: usize,
}

// ============================================================================
// Builder
// ============================================================================

/// Accumulates lines and transfers into a [`Network`]
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    options: BuildOptions,
    network: Network,
    stats: NetworkStats,
}

impl NetworkBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Add every segment of a line.
    ///
    /// Stations are only added as segment endpoints, so under
    /// [`LineLengthPolicy::Truncate`] stations past the last timed segment
    /// are left out.
    pub fn add_line(&mut self, line: &LineDefinition) -> Result<&mut Self> {
        let expected = line.stations.len().saturating_sub(1);
        let segments = line.segment_count();

        if line.is_mismatched() && self.options.line_policy == LineLengthPolicy::Reject {
            return Err(TransitError::MalformedLine {
                line: line.name.to_string(),
                stations: line.stations.len(),
                minutes: line.minutes.len(),
            });
        }

        // Validate before touching the network so a failed line leaves no trace.
        if let Some(i) = line.minutes[..segments].iter().position(|&m| m == 0) {
            return Err(TransitError::InvalidWeight {
                from: line.stations[i].clone(),
                to: line.stations[i + 1].clone(),
            });
        }

        for i in 0..segments {
            let from = &line.stations[i];
            let to = &line.stations[i + 1];
            self.network.add_station(from);
            self.network.add_station(to);
            self.network.connect(from, to, line.minutes[i])?;
        }

        if line.is_mismatched() {
            tracing::debug!(
                line = %line.name,
                stations = line.stations.len(),
                minutes = line.minutes.len(),
                "line has mismatched segment times, built {} segments",
                segments
            );
            self.stats.truncated_segments += expected.saturating_sub(line.minutes.len());
        }

        tracing::debug!(line = %line.name, segments, "added line");
        self.stats.lines += 1;
        Ok(self)
    }

    /// Connect two stations that must already be on some line
    pub fn add_transfer(&mut self, transfer: &TransferDefinition) -> Result<&mut Self> {
        self.network.connect(&transfer.from, &transfer.to, transfer.minutes)?;
        self.stats.transfers += 1;
        Ok(self)
    }

    pub fn build(mut self) -> (Network, NetworkStats) {
        use crate::models::traits::TransitGraph;

        self.stats.stations = self.network.station_count();
        self.stats.connections = self.network.connection_count();
        (self.network, self.stats)
    }
}

impl NetworkDefinition {
    /// Build lines first, then transfers, in definition order
    pub fn build(&self, options: BuildOptions) -> Result<(Network, NetworkStats)> {
        let mut builder = NetworkBuilder::new(options);
        for line in &self.lines {
            builder.add_line(line)?;
        }
        for transfer in &self.transfers {
            builder.add_transfer(transfer)?;
        }
        Ok(builder.build())
    }

    /// Every station name mentioned by a line, in definition order, without repeats
    pub fn station_names(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.lines
            .iter()
            .flat_map(|line| line.stations.iter())
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::traits::TransitGraph;

    #[test]
    fn test_build_simple_line() {
        let definition = NetworkDefinition {
            lines: vec![LineDefinition::new("L", ["A", "B", "C"], [3, 2])],
            transfers: vec![],
        };

        let (network, stats) = definition.build(BuildOptions::default()).unwrap();
        assert_eq!(network.station_count(), 3);
        assert_eq!(network.weight("A", "B"), Some(3));
        assert_eq!(network.weight("C", "B"), Some(2));
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.connections, 2);
        assert_eq!(stats.truncated_segments, 0);
    }

    #[test]
    fn test_truncates_missing_times() {
        let line = LineDefinition::new("L", ["A", "B", "C", "D"], [1, 1]);
        assert_eq!(line.segment_count(), 2);

        let mut builder = NetworkBuilder::new(BuildOptions::default());
        builder.add_line(&line).unwrap();
        let (network, stats) = builder.build();

        assert!(network.contains_station("C"));
        assert!(!network.contains_station("D"));
        assert_eq!(stats.truncated_segments, 1);
    }

    #[test]
    fn test_ignores_extra_times() {
        let line = LineDefinition::new("L", ["A", "B"], [4, 9, 9]);
        let mut builder = NetworkBuilder::new(BuildOptions::default());
        builder.add_line(&line).unwrap();
        let (network, stats) = builder.build();

        assert_eq!(network.weight("A", "B"), Some(4));
        assert_eq!(stats.connections, 1);
        assert_eq!(stats.truncated_segments, 0);
    }

    #[test]
    fn test_strict_rejects_mismatch() {
        let line = LineDefinition::new("L", ["A", "B", "C"], [1]);
        let mut builder = NetworkBuilder::new(BuildOptions::strict());

        assert_eq!(
            builder.add_line(&line).err(),
            Some(TransitError::MalformedLine {
                line: "L".into(),
                stations: 3,
                minutes: 1,
            })
        );
    }

    #[test]
    fn test_failed_line_leaves_builder_untouched() {
        let mut builder = NetworkBuilder::new(BuildOptions::default());
        builder
            .add_line(&LineDefinition::new("L1", ["X", "Y"], [2]))
            .unwrap();

        let bad = LineDefinition::new("L2", ["A", "B", "C", "D"], [1, 0]);
        assert_eq!(
            builder.add_line(&bad).err(),
            Some(TransitError::InvalidWeight {
                from: "B".into(),
                to: "C".into(),
            })
        );

        let (network, stats) = builder.build();
        assert_eq!(network.station_count(), 2);
        assert!(!network.contains_station("A"));
        assert_eq!(network.weight("A", "B"), None);
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.truncated_segments, 0);
        assert_eq!(stats.connections, 1);
    }

    #[test]
    fn test_single_station_line_adds_nothing() {
        let line = LineDefinition::new("L", ["A"], Vec::<Minutes>::new());
        let mut builder = NetworkBuilder::new(BuildOptions::strict());
        builder.add_line(&line).unwrap();
        let (network, _) = builder.build();
        assert!(network.is_empty());
    }

    #[test]
    fn test_transfer_requires_known_stations() {
        let definition = NetworkDefinition {
            lines: vec![LineDefinition::new("L", ["A", "B"], [3])],
            transfers: vec![TransferDefinition::interchange("Z", 5)],
        };

        assert_eq!(
            definition.build(BuildOptions::default()).err(),
            Some(TransitError::UnknownStation("Z".into()))
        );
    }

    #[test]
    fn test_overlapping_lines_last_write_wins() {
        let definition = NetworkDefinition {
            lines: vec![
                LineDefinition::new("L1", ["A", "B"], [3]),
                LineDefinition::new("L2", ["B", "A"], [6]),
            ],
            transfers: vec![TransferDefinition::interchange("A", 5)],
        };

        let (network, stats) = definition.build(BuildOptions::default()).unwrap();
        assert_eq!(network.weight("A", "B"), Some(6));
        assert_eq!(network.weight("A", "A"), Some(5));
        assert_eq!(stats.connections, 2);
        assert_eq!(stats.transfers, 1);
    }

    #[test]
    fn test_station_names_in_order() {
        let definition = NetworkDefinition {
            lines: vec![
                LineDefinition::new("L1", ["A", "B"], [1]),
                LineDefinition::new("L2", ["B", "C"], [1]),
            ],
            transfers: vec![],
        };
        assert_eq!(definition.station_names(), vec!["A", "B", "C"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_definition_from_json() {
        let json = r#"{
            "lines": [{ "name": "L", "stations": ["A", "B"], "minutes": [2] }]
        }"#;
        let definition: NetworkDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(definition.lines[0].name.as_str(), "L");
        assert!(definition.transfers.is_empty());
    }
}
