//! Analyze a chart described in JSON and print the result as JSON.
//!
//! The input document has the shape
//! `{"positions": [{"body": "sun", "longitude": 10.5, "speed": 0.98}, ...],
//!   "cusps": [12 longitudes]}`.

use anyhow::Context;
use aphrodite_engine::{ChartEngine, ChartInput, EngineSettings};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Chart document (positions and house cusps) in JSON.
    chart: PathBuf,

    /// Engine settings in TOML; missing keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print single-line JSON instead of pretty output.
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => EngineSettings::load_from_file(path)?,
        None => EngineSettings::default(),
    };
    let engine = ChartEngine::new(settings)?;

    let text = fs::read_to_string(&args.chart)
        .with_context(|| format!("reading {}", args.chart.display()))?;
    let input: ChartInput = serde_json::from_str(&text)
        .with_context(|| format!("parsing chart {}", args.chart.display()))?;

    let mut analysis = engine.analyze(&input)?;
    analysis.dominance = analysis.dominance.rounded(2);

    let out = if args.compact {
        serde_json::to_string(&analysis)?
    } else {
        serde_json::to_string_pretty(&analysis)?
    };
    println!("{out}");
    Ok(())
}
