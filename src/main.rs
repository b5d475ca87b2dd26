use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use tunnel_search::io;
use tunnel_search::search::{self, Outcome};
use tunnel_search::tunnel::Tunnel;

/// Search a 3D tunnel for the cheapest path between two points.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Tunnel description to load.
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// File the search result is written to.
    #[arg(default_value = "output.txt")]
    output: PathBuf,

    /// Print the result as JSON on stdout instead of writing the output file.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = io::load(&cli.input)
        .with_context(|| format!("failed to load tunnel from {}", cli.input.display()))?;
    info!(
        "loaded {} declared points, algorithm {}",
        config.points.len(),
        config.algorithm
    );

    let tunnel = Tunnel::from_config(config)?;
    let outcome = search::search(&tunnel)?;
    match &outcome {
        Outcome::Found(report) => println!(
            "Found a path of cost {} through {} points",
            report.total_cost,
            report.path_len()
        ),
        Outcome::Failed => println!(
            "No path from {:?} to {:?}",
            tunnel.start, tunnel.goal
        ),
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        io::save(&cli.output, &outcome)
            .with_context(|| format!("failed to write result to {}", cli.output.display()))?;
    }
    Ok(())
}
