use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use tracing::info;

use closest_point::points_csv::{self, Columns};
use closest_point::{closest_points, logger, Format, Metric, REFERENCE_NAMES, REFERENCE_POINTS};

#[derive(Parser, Debug)]
#[command(name = "closest-csv")]
#[command(about = "Match every point of a CSV file against the reference cities.", long_about = None)]
struct Cli {
    /// Path to the .csv file of query points (with a header row)
    #[arg(short, long)]
    input: String,

    /// "decimal": one column per axis. "dms": <col>_deg, <col>_min, <col>_sec, <col>_dir per axis
    #[arg(short, long, default_value_t = String::from("decimal"))]
    format: String,

    #[arg(short, long, default_value_t = String::from("haversine"))]
    metric: String,

    /// Latitude column (or column prefix for dms)
    #[arg(long, default_value_t = String::from("latitude"))]
    lat_col: String,

    /// Longitude column (or column prefix for dms)
    #[arg(long, default_value_t = String::from("longitude"))]
    lon_col: String,

    /// Output CSV of matches. If omitted, prints a summary to stdout.
    #[arg(short, long)]
    out: Option<String>,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let metric = Metric::from(&cli.metric)?;
    let columns = Columns {
        lat_col: cli.lat_col,
        lon_col: cli.lon_col,
        format: Format::from(&cli.format)?,
    };

    let queries = points_csv::read_points_from_path(&cli.input, &columns)
        .with_context(|| format!("reading points from {}", &cli.input))?;
    info!(count = queries.len(), "loaded query points");

    let matches = closest_points(&queries, &REFERENCE_POINTS, metric)?;

    if let Some(out_path) = cli.out {
        let file = File::create(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        points_csv::write_matches(file, &matches).with_context(|| format!("writing CSV {}", &out_path))?;
        println!("Wrote matches for {} points to {}", matches.len(), out_path);
    } else {
        println!("Points: {}", matches.len());
        let mut hits = [0usize; REFERENCE_POINTS.len()];
        for m in &matches {
            hits[m.nearest.index] += 1;
        }
        for (name, count) in REFERENCE_NAMES.iter().zip(hits) {
            println!("{}: {}", name, count);
        }
        if let Some(maxd) = matches.iter().map(|m| m.nearest.distance).reduce(f32::max) {
            println!("Max distance ({}): {:.2}", metric.unit(), maxd);
        }
    }

    Ok(())
}
