//! GeoTIFF simulator.
//!
//! Loads a georeferenced raster and attaches WGS84 geodesic lat/lon
//! coordinates computed against a fixed reference point:
//! - prints the affine transform and a summary of the raster
//! - solves the geodesic problem for each zipped (x, y) axis pair in parallel
//! - attaches the results as `lat`/`lon` coordinates and prints the summary again
//!
//! With no arguments the built-in defaults are used. Logs go to stderr so
//! stdout only carries the diagnostic blocks.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use geotiff_simulator::{pipeline, SimulatorConfig};

#[derive(Parser, Debug)]
#[command(name = "geotiff-simulator")]
#[command(about = "Attach WGS84 geodesic lat/lon coordinates to a GeoTIFF")]
struct Args {
    /// GeoTIFF to analyse (default: mosaic8mm.tiff, or RASTER_PATH)
    #[arg(long)]
    raster: Option<PathBuf>,

    /// Reference latitude in degrees (default: 44.571, or REFERENCE_LATITUDE)
    #[arg(long, allow_negative_numbers = true)]
    ref_lat: Option<f64>,

    /// Reference longitude in degrees (default: -125.149, or REFERENCE_LONGITUDE)
    #[arg(long, allow_negative_numbers = true)]
    ref_lon: Option<f64>,

    /// Geodesic worker threads (default: 4, or SIMULATOR_WORKERS)
    #[arg(long)]
    workers: Option<usize>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Args {
    /// Environment first, then explicit flags on top.
    fn into_config(self) -> SimulatorConfig {
        let mut config = SimulatorConfig::from_env();

        if let Some(raster) = self.raster {
            config.raster_path = raster;
        }
        if let Some(lat) = self.ref_lat {
            config.reference.latitude = lat;
        }
        if let Some(lon) = self.ref_lon {
            config.reference.longitude = lon;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }

        config
    }
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = args.into_config();
    info!(
        raster = %config.raster_path.display(),
        ref_lat = config.reference.latitude,
        ref_lon = config.reference.longitude,
        workers = config.workers,
        "Starting geotiff simulator"
    );

    let raster = pipeline::run(&config)
        .with_context(|| format!("failed to process {}", config.raster_path.display()))?;

    info!(
        rows = raster.height(),
        cols = raster.width(),
        coords = raster.coord_names().count(),
        "Simulation complete"
    );
    Ok(())
}
