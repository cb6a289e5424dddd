use anyhow::Result;
use metro_transit::network::NetworkStats;
use metro_transit::routing::{Journey, ShortestPathTree};
use metro_transit::Minutes;
use serde::Serialize;

/// Human-readable journey: the path on one line, the total on the next
pub fn format_journey(journey: &Journey) -> String {
    let path: Vec<&str> = journey.stations.iter().map(|s| s.as_str()).collect();
    format!(
        "Path: {}\nShortest time: {} min",
        path.join(" -> "),
        journey.total_minutes
    )
}

pub fn journey_json(journey: &Journey) -> Result<String> {
    Ok(serde_json::to_string_pretty(journey)?)
}

#[derive(Serialize)]
struct Reachable<'a> {
    station: &'a str,
    minutes: Minutes,
}

#[derive(Serialize)]
struct TreeReport<'a> {
    origin: &'a str,
    reachable: Vec<Reachable<'a>>,
}

/// One `minutes<TAB>station` row per reachable station, closest first
pub fn format_tree(tree: &ShortestPathTree) -> String {
    tree.reachable()
        .into_iter()
        .map(|(station, minutes)| format!("{minutes:>4}\t{station}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn tree_json(tree: &ShortestPathTree) -> Result<String> {
    let report = TreeReport {
        origin: tree.source().as_str(),
        reachable: tree
            .reachable()
            .into_iter()
            .map(|(station, minutes)| Reachable {
                station: station.as_str(),
                minutes,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn log_network_summary(stats: &NetworkStats) {
    log::info!("=== Network Statistics ===");
    log::info!("Lines: {}", stats.lines);
    log::info!("Stations: {}", stats.stations);
    log::info!("Connections: {}", stats.connections);
    log::info!("Transfers: {}", stats.transfers);
    if stats.truncated_segments > 0 {
        log::warn!(
            "Segments dropped (missing travel times): {}",
            stats.truncated_segments
        );
    }
}
