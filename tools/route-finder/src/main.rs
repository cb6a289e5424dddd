use anyhow::{bail, Context, Result};
use clap::Parser;
use metro_transit::network::{BuildOptions, Network};
use metro_transit::routing::{shortest_path, ShortestPathTree};
use metro_transit::TransitGraph;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod input;
mod output;

use input::{load_definition, prompt_station, write_definition};
use output::{format_journey, format_tree, journey_json, log_network_summary, tree_json};

#[derive(Parser, Debug)]
#[command(
    name = "route-finder",
    author,
    version,
    about = "Find the fastest metro journey between two stations",
    long_about = "Builds the metro network from its line tables and finds the minimum \
                  travel time between two stations.\n\n\
                  Stations missing from the command line are asked for on stdin. \
                  The built-in Busan Metro network is used unless --network points \
                  to a JSON network definition."
)]
struct Args {
    /// Origin station
    #[arg(short, long)]
    from: Option<String>,

    /// Destination station
    #[arg(short, long, conflicts_with = "all")]
    to: Option<String>,

    /// Print travel times from the origin to every reachable station
    #[arg(long)]
    all: bool,

    /// JSON network definition to use instead of the built-in network
    #[arg(short, long)]
    network: Option<PathBuf>,

    /// Reject lines whose segment times don't match their stations
    /// (by default extra stations are dropped)
    #[arg(long)]
    strict: bool,

    /// Write the network definition as JSON to this file and exit
    #[arg(long)]
    dump_network: Option<PathBuf>,

    /// List every station in the network and exit
    #[arg(long)]
    list_stations: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

/// Reject unknown names before any routing happens
fn ensure_known(network: &Network, name: &str) -> Result<()> {
    if !network.contains_station(name) {
        bail!("Unknown station: {name} (use --list-stations to see valid names)");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "warn" }),
    )
    .format_timestamp(None)
    .init();

    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = io::stdout().lock();
    run(args, &mut stdin, &mut stdout)
}

/// Everything after logging setup; results are written to `output`
fn run<R: BufRead, W: Write>(args: Args, input: &mut R, output: &mut W) -> Result<()> {
    let definition = load_definition(args.network.as_deref())?;

    if let Some(path) = &args.dump_network {
        write_definition(&definition, path).context("Failed to write network definition")?;
        log::info!("Wrote network definition to {}", path.display());
        return Ok(());
    }

    let options = if args.strict {
        BuildOptions::strict()
    } else {
        BuildOptions::default()
    };
    let (network, stats) = definition.build(options).context("Failed to build network")?;
    log_network_summary(&stats);

    if args.list_stations {
        for name in definition.station_names() {
            if network.contains_station(name) {
                writeln!(output, "{name}")?;
            }
        }
        return Ok(());
    }

    let from = match args.from {
        Some(from) => from,
        None => prompt_station("Origin", input, output)?,
    };
    ensure_known(&network, &from)?;

    if args.all {
        let tree = ShortestPathTree::compute(&network, &from)?;
        let rendered = if args.json {
            tree_json(&tree)?
        } else {
            format_tree(&tree)
        };
        writeln!(output, "{rendered}")?;
        return Ok(());
    }

    let to = match args.to {
        Some(to) => to,
        None => prompt_station("Destination", input, output)?,
    };
    ensure_known(&network, &to)?;

    log::debug!("Routing {from} -> {to}");
    let Some(journey) = shortest_path(&network, &from, &to)? else {
        bail!("No route from {from} to {to}");
    };

    let rendered = if args.json {
        journey_json(&journey)?
    } else {
        format_journey(&journey)
    };
    writeln!(output, "{rendered}")?;

    Ok(())
}
