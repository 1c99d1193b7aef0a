//! Simulate command implementation.

use std::time::Instant;

use serde::Serialize;

use microlens::{Rng, SampleStream, Session};

use super::common::{cluster_to_svg, place_cluster, write_output, OutputFormat, SimArgs};

/// Simulation report in JSON output format.
#[derive(Serialize)]
struct JsonReport {
    profile: &'static str,
    side: f64,
    padding: f64,
    samples: u64,
    seed: u64,
    size: f64,
    margin: f64,
    conversion: f64,
    hexagon_pixel_radius: f64,
    hits: u64,
    misses: u64,
    filling_factor: Option<f64>,
    target_filling_factor: f64,
}

/// Execute the simulate command.
pub fn cmd_simulate(args: &[String]) {
    let mut sim = SimArgs::default();
    let mut format = OutputFormat::Text;
    let mut output_path: Option<&str> = None;
    let mut svg_path: Option<&str> = None;

    let mut i = 0;
    while i < args.len() {
        if sim.parse_flag(args, &mut i) {
            i += 1;
            continue;
        }
        match args[i].as_str() {
            "--json" => {
                format = OutputFormat::Json;
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(&args[i]);
                }
            }
            "--svg" => {
                i += 1;
                if i < args.len() {
                    svg_path = Some(&args[i]);
                }
            }
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

    let seed = sim.resolve_seed();
    let (cluster, placed) = place_cluster(&sim);

    eprintln!(
        "Placed {} hexagons, {:.1} px/arcsec, pixel radius {:.1}",
        placed.len(),
        cluster.conversion(),
        cluster.pixel_radius()
    );

    if let Some(path) = svg_path {
        let svg = cluster_to_svg(&placed, sim.size, sim.margin);
        write_output(Some(path), &svg);
    }

    let mut session = Session::new(placed);
    let stream = SampleStream::new(sim.sample_region(), Rng::new(seed));

    let start = Instant::now();
    for point in stream.take(sim.samples) {
        session.classify(point);
    }
    let elapsed = start.elapsed();

    let tally = session.tally();
    eprintln!("Classified {} samples in {:?}", tally.total(), elapsed);

    match format {
        OutputFormat::Json => {
            let report = JsonReport {
                profile: sim.profile.name(),
                side: sim.profile.side(),
                padding: sim.padding,
                samples: tally.total(),
                seed,
                size: sim.size,
                margin: sim.margin,
                conversion: cluster.conversion(),
                hexagon_pixel_radius: cluster.pixel_radius(),
                hits: tally.hits,
                misses: tally.misses,
                filling_factor: tally.filling_factor(),
                target_filling_factor: sim.profile.target_filling_factor(),
            };
            let json = serde_json::to_string(&report).expect("Failed to serialize JSON");
            write_output(output_path, &json);
        }
        OutputFormat::Text => {
            let target = sim.profile.target_filling_factor();

            println!("═══════════════════════════════════════════════");
            println!("  FILLING FACTOR: {}", sim.profile.name().to_uppercase());
            println!("═══════════════════════════════════════════════");
            println!("  Side: {:.4} arcsec", sim.profile.side());
            println!("  Padding: {:.4} arcsec", sim.padding);
            println!("  Conversion: {:.2} px/arcsec", cluster.conversion());
            println!("  Samples: {} (seed {})", tally.total(), seed);
            println!("  Hits: {}", tally.hits);
            println!("  Misses: {}", tally.misses);
            match tally.filling_factor() {
                Some(factor) => {
                    println!("  Filling factor: {:.4}", factor);
                    println!("  Target: {:.2} (delta {:+.4})", target, factor - target);
                }
                None => println!("  Filling factor: no data"),
            }
            println!("═══════════════════════════════════════════════");
        }
    }
}

fn print_usage() {
    eprintln!("Usage: microlens simulate [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --profile <name>    Microlens profile (default: standard)");
    eprintln!("  --padding <arcsec>      Padding between hexagons (default: 0.04)");
    eprintln!("  -n, --samples <count>   Number of Monte Carlo samples (default: 100000)");
    eprintln!("  --seed <u64>            RNG seed (default: entropy; always reported)");
    eprintln!("  --size <px>             Sampling square size (default: 900)");
    eprintln!("  --margin <px>           Outer margin around the square (default: 100)");
    eprintln!("  --json                  Output the report as JSON");
    eprintln!("  -o, --output <file>     Report destination (default: stdout)");
    eprintln!("  --svg <file>            Also write the cluster SVG");
}
