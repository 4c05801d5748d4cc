use std::path::PathBuf;

use clap::Parser;
use fire_proximity::{
    formats::read_ring, logging::init_logger, shortest_distance_from_place_to_fire_perimeter,
    GeographicCoordinate, Result,
};
use tracing::info;

/// Shortest distance from a place to a fire perimeter
#[derive(Debug, Parser)]
#[command(name = "fire-proximity", version)]
struct Args {
    /// Latitude of the place (EPSG:4326 degrees)
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude of the place (EPSG:4326 degrees)
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Perimeter ring in ESRI:102008 (.csv with x,y columns or .json array of [x, y])
    #[arg(long)]
    ring: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let ring = read_ring(&args.ring)?;
    info!(path = %args.ring.display(), vertices = ring.len(), "loaded perimeter");

    let place = GeographicCoordinate::new(args.lat, args.lon);
    let proximity = shortest_distance_from_place_to_fire_perimeter(place, &ring)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&proximity)?);
        return Ok(());
    }

    match proximity {
        Some(found) => {
            println!("Place:          ({}, {})", place.latitude, place.longitude);
            println!("Nearest vertex: ({}, {})", found.nearest.latitude, found.nearest.longitude);
            println!("Distance:       {:.3} miles", found.distance_miles);
        }
        None => println!("Perimeter has no vertices; no distance computed"),
    }

    Ok(())
}
