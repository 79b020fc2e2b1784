//! Wraithwood - Entry Point
//!
//! Sets up logging, builds the default manor, collects the hunter roster,
//! runs the hunt to completion, and prints the final results.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use wraithwood::core::config::SimConfig;
use wraithwood::core::error::Result;
use wraithwood::core::types::HunterId;
use wraithwood::house::build_manor;
use wraithwood::simulation::{Simulation, SimulationReport};

#[derive(Parser, Debug)]
#[command(name = "wraithwood")]
#[command(about = "Multithreaded ghost hunt simulation")]
struct Args {
    /// Hunter name; repeat for a full team. Read from stdin when omitted.
    #[arg(long = "hunter", value_name = "NAME")]
    hunters: Vec<String>,

    /// Random seed for reproducible actor decision streams
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding the default simulation constants
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the full event log as JSON after the run
    #[arg(long)]
    dump_events: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wraithwood=info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimConfig::from_toml(&fs::read_to_string(path)?)?,
        None => SimConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("base seed: {}", seed);

    let house = build_manor(&config)?;

    println!("=== Wraithwood Ghost Hunt ===\n");
    println!("House ready with {} rooms", house.room_count());

    let names = if args.hunters.is_empty() {
        read_roster()?
    } else {
        args.hunters.clone()
    };

    let mut sim = Simulation::new(house, config, seed);
    for (i, name) in names.iter().enumerate() {
        sim.add_hunter(name, HunterId(i as u32));
    }

    println!("\n=== Starting the hunt ===");
    println!("Hunters: {}\n", sim.hunter_count());

    let report = sim.run();
    print_report(&report);

    if args.dump_events {
        println!("{}", serde_json::to_string_pretty(&report.events.snapshot())?);
    }

    Ok(())
}

/// Read hunter names from stdin until `done` or end of input
fn read_roster() -> Result<Vec<String>> {
    println!("Enter hunter names, one per line ('done' to finish):");
    let stdin = io::stdin();
    let mut names = Vec::new();
    loop {
        print!("Hunter name: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        if name == "done" {
            break;
        }
        names.push(name.to_string());
        println!("Added hunter: {}", name);
    }
    Ok(names)
}

fn print_report(report: &SimulationReport) {
    println!("\n=== Hunt Complete ===\n");

    println!("Hunter results:");
    for outcome in &report.hunters {
        println!(
            "  {} (ID: {}): {}",
            outcome.name,
            outcome.id.0,
            outcome.reason.label()
        );
    }

    println!("\nEvidence collected: {}", report.collected);
    println!("Actual ghost: {}", report.ghost.label());
    match report.suggested {
        Some(ghost) => println!("Evidence suggests: {}", ghost.label()),
        None => println!("Evidence suggests: inconclusive"),
    }
    if report.solved {
        println!("\nThe case was solved!");
    } else {
        println!("\nThe ghost got away...");
    }
}
