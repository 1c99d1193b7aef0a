//! Sweep command implementation.
//!
//! Measures the filling factor for a series of padding values so a designer
//! can read off which padding lands closest to a profile's target. This is
//! measurement only: each padding gets an independent estimate, and no
//! root-finding is attempted.

use std::fs;

use serde::{Deserialize, Serialize};

use microlens::{compute_cluster, IdCounter, MicrolensProfile, Point, Rect, Rng, SampleStream, Session};

use super::common::{write_output, OutputFormat, SimArgs};

/// A declarative sweep plan loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct SweepPlan {
    /// Plan name/title
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Profile name (e.g. "standard", "high")
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Padding values to measure, in arcseconds
    pub paddings: Vec<f64>,

    /// Samples per padding value
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Base RNG seed (each padding offsets it by its index)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Sampling square size in pixels
    #[serde(default = "default_size")]
    pub size: f64,

    /// Outer margin in pixels
    #[serde(default = "default_margin")]
    pub margin: f64,
}

fn default_profile() -> String {
    "standard".to_string()
}

fn default_samples() -> usize {
    100_000
}

fn default_size() -> f64 {
    900.0
}

fn default_margin() -> f64 {
    100.0
}

/// One measured padding value in JSON output.
#[derive(Serialize)]
struct JsonRow {
    padding: f64,
    conversion: f64,
    hits: u64,
    misses: u64,
    filling_factor: Option<f64>,
}

/// Sweep summary in JSON output.
#[derive(Serialize)]
struct JsonSweep {
    profile: &'static str,
    target_filling_factor: f64,
    samples: usize,
    seed: u64,
    rows: Vec<JsonRow>,
    closest_padding: Option<f64>,
}

/// Execute the sweep command.
pub fn cmd_sweep(args: &[String]) {
    let mut sim = SimArgs::default();
    let mut format = OutputFormat::Text;
    let mut output_path: Option<&str> = None;
    let mut plan_path: Option<&str> = None;
    let mut from = 0.0_f64;
    let mut to = 0.1_f64;
    let mut step = 0.01_f64;

    let mut i = 0;
    while i < args.len() {
        if sim.parse_flag(args, &mut i) {
            i += 1;
            continue;
        }
        match args[i].as_str() {
            "--from" => {
                i += 1;
                if i < args.len() {
                    from = args[i].parse().unwrap_or(0.0);
                }
            }
            "--to" => {
                i += 1;
                if i < args.len() {
                    to = args[i].parse().unwrap_or(0.1);
                }
            }
            "--step" => {
                i += 1;
                if i < args.len() {
                    step = args[i].parse().unwrap_or(0.01);
                }
            }
            "--json" => {
                format = OutputFormat::Json;
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(&args[i]);
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            path if !path.starts_with('-') => {
                if plan_path.is_none() {
                    plan_path = Some(path);
                }
            }
            unknown => {
                eprintln!("Unknown option: {}", unknown);
            }
        }
        i += 1;
    }

    // A plan file, when given, defines the whole sweep.
    let paddings: Vec<f64> = if let Some(path) = plan_path {
        let content = fs::read_to_string(path).expect("Failed to read plan file");
        let plan: SweepPlan = serde_yaml::from_str(&content).unwrap_or_else(|e| {
            eprintln!("Invalid sweep plan: {}", e);
            std::process::exit(1);
        });

        eprintln!("Plan: {}", plan.name);
        if let Some(description) = &plan.description {
            eprintln!("  {}", description);
        }

        sim.profile = MicrolensProfile::from_name(&plan.profile).unwrap_or_else(|| {
            eprintln!("Unknown profile in plan: {}", plan.profile);
            std::process::exit(1);
        });
        sim.samples = plan.samples;
        sim.seed = plan.seed;
        sim.size = plan.size;
        sim.margin = plan.margin;
        plan.paddings
    } else {
        if step <= 0.0 {
            eprintln!("Error: --step must be positive, got {}", step);
            std::process::exit(1);
        }
        let mut paddings = Vec::new();
        let mut padding = from;
        while padding <= to + 1e-12 {
            paddings.push(padding);
            padding += step;
        }
        paddings
    };

    if paddings.is_empty() {
        eprintln!("Error: sweep has no padding values");
        std::process::exit(1);
    }

    let seed = sim.resolve_seed();
    let target = sim.profile.target_filling_factor();
    eprintln!(
        "Sweeping {} padding values, {} samples each (seed {})",
        paddings.len(),
        sim.samples,
        seed
    );

    let mut rows = Vec::with_capacity(paddings.len());
    for (index, &padding) in paddings.iter().enumerate() {
        let cluster = compute_cluster(sim.profile.side(), padding, sim.size).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

        let mut ids = IdCounter::new();
        let placed = cluster.place(Point::new(sim.margin, sim.margin), &mut ids);
        let mut session = Session::new(placed);

        let region = Rect::square(sim.margin, sim.size);
        let stream = SampleStream::new(region, Rng::new(seed.wrapping_add(index as u64)));
        for point in stream.take(sim.samples) {
            session.classify(point);
        }

        let tally = session.tally();
        rows.push(JsonRow {
            padding,
            conversion: cluster.conversion(),
            hits: tally.hits,
            misses: tally.misses,
            filling_factor: tally.filling_factor(),
        });
    }

    // The measured padding whose estimate lands closest to the target.
    let closest = rows
        .iter()
        .filter_map(|r| r.filling_factor.map(|f| (r.padding, f)))
        .min_by(|a, b| {
            (a.1 - target)
                .abs()
                .partial_cmp(&(b.1 - target).abs())
                .expect("filling factors are finite")
        });

    match format {
        OutputFormat::Json => {
            let sweep = JsonSweep {
                profile: sim.profile.name(),
                target_filling_factor: target,
                samples: sim.samples,
                seed,
                closest_padding: closest.map(|(padding, _)| padding),
                rows,
            };
            let json = serde_json::to_string(&sweep).expect("Failed to serialize JSON");
            write_output(output_path, &json);
        }
        OutputFormat::Text => {
            println!(
                "{:>10}  {:>12}  {:>10}  {:>10}  {:>14}",
                "padding", "px/arcsec", "hits", "misses", "filling factor"
            );
            for row in &rows {
                let factor = row
                    .filling_factor
                    .map(|f| format!("{:.4}", f))
                    .unwrap_or_else(|| "no data".to_string());
                println!(
                    "{:>10.4}  {:>12.2}  {:>10}  {:>10}  {:>14}",
                    row.padding, row.conversion, row.hits, row.misses, factor
                );
            }
            println!();
            match closest {
                Some((padding, factor)) => println!(
                    "Closest to target {:.2}: padding {:.4} (measured {:.4})",
                    target, padding, factor
                ),
                None => println!("No data collected."),
            }
        }
    }
}

fn print_usage() {
    eprintln!("Usage: microlens sweep [plan.yaml] [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --profile <name>    Microlens profile (default: standard)");
    eprintln!("  --from <arcsec>         First padding value (default: 0)");
    eprintln!("  --to <arcsec>           Last padding value (default: 0.1)");
    eprintln!("  --step <arcsec>         Padding increment (default: 0.01)");
    eprintln!("  -n, --samples <count>   Samples per padding value (default: 100000)");
    eprintln!("  --seed <u64>            Base RNG seed (default: entropy)");
    eprintln!("  --size <px>             Sampling square size (default: 900)");
    eprintln!("  --margin <px>           Outer margin (default: 100)");
    eprintln!("  --json                  Output as JSON");
    eprintln!("  -o, --output <file>     Output destination (default: stdout)");
    eprintln!();
    eprintln!("A plan file, when given, defines the profile, padding list and");
    eprintln!("sampling parameters declaratively.");
}
