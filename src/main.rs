use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

use closest_point::dms::Dms;
use closest_point::{closest_point, input, logger, Format, Metric, REFERENCE_NAMES, REFERENCE_POINTS};

#[derive(Parser, Debug)]
#[command(name = "closest")]
#[command(about = "Read a coordinate from stdin and print the closest of the reference cities.", long_about = None)]
struct Cli {
    /// Input notation: "decimal" (lat lon) or "dms" (deg min sec dir, twice)
    #[arg(short, long, default_value_t = String::from("decimal"))]
    format: String,

    /// Distance used to rank candidates: "haversine" or "euclidean"
    #[arg(short, long, default_value_t = String::from("haversine"))]
    metric: String,

    /// Log debug details to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let format = Format::from(&cli.format)?;
    let metric = Metric::from(&cli.metric)?;

    let mut stdout = io::stdout();
    write!(stdout, "{}", format.prompt())?;
    stdout.flush()?;

    let query = input::read_coordinate(&mut io::stdin().lock(), format)
        .context("reading the query point from stdin")?;

    let nearest = closest_point(query, &REFERENCE_POINTS, metric)?;
    info!(
        city = REFERENCE_NAMES[nearest.index],
        dms = %format!("{} {}", Dms::from_decimal(nearest.point.lat), Dms::from_longitude(nearest.point.lon)),
        distance = nearest.distance,
        unit = metric.unit(),
        "matched"
    );
    println!("Closest point: {}", nearest.point);

    Ok(())
}
