//! Classify command implementation.
//!
//! Reads externally produced sample points from stdin ("x y" per line,
//! comma or whitespace separated) and feeds them through the same
//! classification contract the Monte Carlo stream uses. Handy for manual
//! exploration of a layout: pipe in pointer coordinates and watch where
//! they land.

use std::io::{self, BufRead};

use microlens::{Outcome, Point, Session};

use super::common::{place_cluster, SimArgs};

/// Execute the classify command.
pub fn cmd_classify(args: &[String]) {
    let mut sim = SimArgs::default();

    let mut i = 0;
    while i < args.len() {
        if sim.parse_flag(args, &mut i) {
            i += 1;
            continue;
        }
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            unknown => {
                eprintln!("Unknown option: {}", unknown);
            }
        }
        i += 1;
    }

    let (cluster, placed) = place_cluster(&sim);
    eprintln!(
        "Placed {} hexagons, {:.1} px/arcsec. Reading points from stdin...",
        placed.len(),
        cluster.conversion()
    );

    let mut session = Session::new(placed);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.expect("Failed to read from stdin");
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some(point) = parse_point(trimmed) else {
            eprintln!("Skipping unparseable line: {}", trimmed);
            continue;
        };

        match session.classify(point) {
            Outcome::Hit { hexagon } => {
                println!("Inside hexagon {}, hits: {}", hexagon, session.tally().hits);
            }
            Outcome::Miss => {
                println!("Misses: {}", session.tally().misses);
            }
        }
    }

    let tally = session.tally();
    match tally.filling_factor() {
        Some(factor) => println!(
            "Classified {} points: {} hits, {} misses, filling factor {:.4}",
            tally.total(),
            tally.hits,
            tally.misses,
            factor
        ),
        None => println!("No points classified."),
    }
}

/// Parse "x y" or "x,y" into a point.
fn parse_point(line: &str) -> Option<Point> {
    let mut parts = line.split(|c: char| c.is_whitespace() || c == ',').filter(|s| !s.is_empty());
    let x: f64 = parts.next()?.parse().ok()?;
    let y: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Point::new(x, y))
}

fn print_usage() {
    eprintln!("Usage: microlens classify [options] < points.txt");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --profile <name>    Microlens profile (default: standard)");
    eprintln!("  --padding <arcsec>      Padding between hexagons (default: 0.04)");
    eprintln!("  --size <px>             Sampling square size (default: 900)");
    eprintln!("  --margin <px>           Outer margin (default: 100)");
    eprintln!();
    eprintln!("Each input line is one point in pixel coordinates: 'x y' or 'x,y'.");
}
