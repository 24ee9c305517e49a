//! Sky Position Tool
//!
//! Prints the Julian Date and sidereal times for an observer, and optionally
//! where a target (or every source of a catalog JSON file) sits in the local
//! sky.
//!
//! Usage:
//!   cargo run --bin sky_position -- --lat 38.433 --lon -79.840 --ra-hours 19.991 --dec 40.734
//!   cargo run --bin sky_position -- --lat 52.0 --lon 4.0 --catalog sources.json
//!
//! Set `RUST_LOG=debug` for diagnostic output.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser};
use serde_json::json;
use skypoint::{
    greenwich_mean_sidereal_time, julian_date, local_sidereal_time, observe, rank_by_visibility,
    CatalogSource, CelestialObject, EquatorialCoordinate, GeoLocation, Hms, Timestamp, ToUtc,
    VisibilitySummary,
};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Sky Position Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes Julian date, sidereal time and alt/az for an observer",
    long_about = None
)]
struct Args {
    /// Observation time; RFC 3339, or ISO 8601 without offset (taken as UTC). Defaults to now
    #[arg(short, long)]
    time: Option<String>,

    /// Observer latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Observer longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Target right ascension in hours
    #[arg(long, requires = "dec", allow_negative_numbers = true)]
    ra_hours: Option<f64>,

    /// Target declination in degrees
    #[arg(long, requires = "ra_hours", allow_negative_numbers = true)]
    dec: Option<f64>,

    /// Catalog JSON file (array of records with name, ra_deg, dec_deg) to rank
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Minimum elevation in degrees for a target to count as visible
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    min_elevation: f64,

    /// Emit JSON instead of text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl std::fmt::Display) {
    println!("{:<22}{}", format!("{}:", name), value);
}

fn resolve_time(arg: Option<&str>) -> Result<DateTime<Utc>> {
    match arg {
        Some(text) => {
            let timestamp: Timestamp = text.parse()?;
            if timestamp.is_naive() {
                log::info!("no UTC offset in '{}', treating it as UTC", text);
            }
            Ok(timestamp.to_utc())
        }
        None => Ok(Utc::now()),
    }
}

fn load_catalog(path: &Path) -> Result<Vec<CatalogSource>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read catalog {}: {}", path.display(), e))?;
    let sources: Vec<CatalogSource> = serde_json::from_str(&text)?;
    log::debug!("loaded {} sources from {}", sources.len(), path.display());
    Ok(sources)
}

fn main() -> Result<()> {
    // Initialize logging from environment variables
    env_logger::init();

    let args = Args::parse();

    let location = GeoLocation::checked(args.lat, args.lon)?;
    let utc = resolve_time(args.time.as_deref())?;

    let jd = julian_date(utc);
    let gmst = greenwich_mean_sidereal_time(utc);
    let lst = local_sidereal_time(utc, &location);

    let target = match (args.ra_hours, args.dec) {
        (Some(ra), Some(dec)) => Some(EquatorialCoordinate::checked(ra, dec)?),
        _ => None,
    };
    let observation = target.map(|t| observe(&t, utc, &location, args.min_elevation));

    let catalog = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => Vec::new(),
    };
    let ranked = rank_by_visibility(&catalog, utc, &location, args.min_elevation);

    if args.json {
        let output = json!({
            "utc": utc,
            "location": location,
            "julian_date": jd,
            "gmst_hours": gmst,
            "lst_hours": lst,
            "lst_hms": Hms::from_hours(lst).to_string(),
            "target": target.zip(observation).map(|(t, o)| json!({
                "equatorial": t,
                "observation": o,
            })),
            "catalog": ranked,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_section_header("Time");
    print_named_value("UTC", utc.to_rfc3339());
    print_named_value("Julian date", format!("{:.6}", jd));
    print_named_value("GMST", format!("{} ({:.6} h)", Hms::from_hours(gmst), gmst));
    print_named_value("LST", format!("{} ({:.6} h)", Hms::from_hours(lst), lst));

    if let (Some(t), Some(o)) = (target, observation) {
        print_section_header("Target");
        print_named_value("RA / Dec", format!("{:.4} h / {:+.4}°", t.ra_hours, t.dec_deg));
        print_named_value("Altitude", format!("{:.2}°", o.horizontal.altitude_deg));
        print_named_value("Azimuth", format!("{:.2}°", o.horizontal.azimuth_deg));
        print_named_value("Hour angle", format!("{:.4} h", o.hour_angle_hours));
        print_named_value("Visible", o.visible);
        print_named_value(
            "Next transit",
            format!(
                "{} (in {:.2} h)",
                o.transit_time.format("%Y-%m-%d %H:%M:%S UTC"),
                o.hours_until_transit
            ),
        );
    }

    if args.catalog.is_some() {
        print_section_header("Catalog");
        println!(
            "{:<28} {:>8} {:>8} {:>10}  {}",
            "Name", "Alt", "Az", "Transit", "Status"
        );
        for entry in &ranked {
            let o = &entry.observation;
            println!(
                "{:<28} {:>7.1}° {:>7.0}° {:>10}  {}",
                entry.target.name(),
                o.horizontal.altitude_deg,
                o.horizontal.azimuth_deg,
                o.transit_time.format("%H:%M"),
                if o.visible { "Visible" } else { "Below limit" }
            );
        }
        println!("\n{}", VisibilitySummary::from_ranked(&ranked, args.min_elevation));
    }

    Ok(())
}
