use clap::{Parser, Subcommand};
use pl_graph::{Links, Topology};
use pl_sim::{Plant, PlantConfig, PlantSnapshot, SimOptions};
use std::path::{Path, PathBuf};
use tracing::info;

mod error;
mod scenario;

use error::CliResult;
use scenario::Scenario;

#[derive(Parser)]
#[command(name = "pl-cli")]
#[command(about = "PlantLoop CLI - closed-loop reactor plant simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference plant for a number of steps
    Run {
        /// Plant configuration YAML (defaults to the reference plant)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Scenario YAML with timed operator actions
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// Number of steps to run
        #[arg(long, default_value_t = 100)]
        steps: u64,
        /// Print every N-th step
        #[arg(long, default_value_t = 10)]
        record_every: u64,
        /// Print snapshots as JSON
        #[arg(long)]
        json: bool,
    },
    /// List nodes and links of the reference plant
    Topology,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            scenario,
            steps,
            record_every,
            json,
        } => cmd_run(
            config.as_deref(),
            scenario.as_deref(),
            SimOptions {
                steps,
                record_every,
            },
            json,
        ),
        Commands::Topology => cmd_topology(),
    }
}

fn cmd_run(
    config_path: Option<&Path>,
    scenario_path: Option<&Path>,
    opts: SimOptions,
    json: bool,
) -> CliResult<()> {
    let config = match config_path {
        Some(path) => PlantConfig::from_yaml_path(path)?,
        None => PlantConfig::default(),
    };
    let scenario = match scenario_path {
        Some(path) => Scenario::from_yaml_path(path)?,
        None => Scenario::default(),
    };
    info!(
        steps = opts.steps,
        actions = scenario.actions.len(),
        "starting run"
    );

    let mut plant = Plant::standard(&config)?;
    let record = scenario::play(&mut plant, &scenario, &opts)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record.snapshots)?);
    } else {
        for snap in &record.snapshots {
            print_snapshot(snap);
        }
    }

    match record.failure {
        Some(failure) => println!("✗ Game over: {}", failure),
        None => println!(
            "✓ Ran {} steps, final score {}",
            record.steps_run,
            plant.score()
        ),
    }
    Ok(())
}

fn print_snapshot(snap: &PlantSnapshot) {
    let (r, c) = (&snap.reactor, &snap.condenser);
    println!(
        "step {:>5}  power {:>3}  score {:>7}  rods {:>3}%",
        snap.step, snap.power, snap.score, snap.control_rods
    );
    println!(
        "  reactor    T={:>5} P={:>5} water={:>6} steam={:>6} health={:>4}",
        r.temperature, r.pressure, r.water_volume, r.steam_volume, r.health
    );
    println!(
        "  condenser  T={:>5} P={:>5} water={:>6} steam={:>6} health={:>4}",
        c.temperature, c.pressure, c.water_volume, c.steam_volume, c.health
    );
    if !snap.failed.is_empty() {
        println!("  failed: {}", snap.failed.join(", "));
    }
}

fn cmd_topology() -> CliResult<()> {
    let plant = Plant::standard(&PlantConfig::default())?;
    let topology = plant.topology();

    println!("Nodes:");
    for node in topology.nodes() {
        let (inputs, outputs) = match &node.links {
            Links::Single {
                upstream,
                downstream,
            } => (
                names(topology, upstream.iter().copied()),
                names(topology, downstream.iter().copied()),
            ),
            Links::Branch {
                upstream,
                downstream,
            } => (
                names(topology, upstream.iter().copied()),
                names(topology, downstream.iter().copied()),
            ),
        };
        println!(
            "  {:>2} {:<13} {:<9} in: [{}]  out: [{}]",
            node.id.index(),
            node.name,
            format!("{:?}", node.role),
            inputs,
            outputs
        );
    }
    println!("\nCoolant: {}", topology.name(plant.coolant()));
    Ok(())
}

fn names(topology: &Topology, ids: impl Iterator<Item = pl_core::NodeId>) -> String {
    ids.map(|id| topology.name(id))
        .collect::<Vec<_>>()
        .join(", ")
}
