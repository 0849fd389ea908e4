//! zoneplan CLI — solve an enclosure instance from stdin or a file

mod render;

use std::io::Read;
use std::time::Instant;

use clap::Parser;
use zoneplan::{io, solve, SolverConfig};

#[derive(Parser)]
#[command(name = "zoneplan")]
#[command(about = "Minimum-cost rectilinear enclosure of weighted points")]
struct Cli {
    /// Instance file (reads stdin when omitted)
    input: Option<String>,
    /// Master seed for the trial sweep
    #[arg(short, long, default_value = "12345")]
    seed: u64,
    /// JSON file overriding solver parameters
    #[arg(short, long)]
    config: Option<String>,
    /// Render the result to a PNG file
    #[arg(short, long)]
    render: Option<String>,
    /// Suppress the stderr summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let (points, k) = io::parse_instance(&text)?;

    let cfg = match &cli.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };

    let start = Instant::now();
    let solution = solve(&points, k, &cfg, cli.seed)?;
    let elapsed = start.elapsed();

    print!("{}", io::format_solution(&solution));

    if let Some(path) = &cli.render {
        render::save_png(&render::render_solution(&points, &solution), path)?;
        if !cli.quiet {
            eprintln!("Saved render to {}", path);
        }
    }
    if !cli.quiet {
        eprintln!(
            "cost {:.6} | enclosed {} | edges {} | {:.2?}",
            solution.cost,
            solution.enclosed,
            solution.edges.len(),
            elapsed
        );
    }

    Ok(())
}
