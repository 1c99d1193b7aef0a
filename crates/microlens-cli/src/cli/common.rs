//! Common utilities shared across CLI commands.

use std::fs;

use microlens::{
    compute_cluster, HoneycombCluster, IdCounter, MicrolensProfile, PlacedHexagon, Point, Rect,
};

/// Output format for simulation reports.
#[derive(Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Geometry and sampling arguments shared by the simulation commands.
pub struct SimArgs {
    pub profile: MicrolensProfile,
    pub padding: f64,
    pub samples: usize,
    pub seed: Option<u64>,
    pub size: f64,
    pub margin: f64,
}

impl Default for SimArgs {
    fn default() -> Self {
        Self {
            profile: MicrolensProfile::StandardResolution,
            padding: 0.04,
            samples: 100_000,
            seed: None,
            size: 900.0,
            margin: 100.0,
        }
    }
}

impl SimArgs {
    /// Try to consume the shared flag at `args[*i]`, advancing `i` past any
    /// flag value. Returns false when the flag belongs to the caller.
    pub fn parse_flag(&mut self, args: &[String], i: &mut usize) -> bool {
        match args[*i].as_str() {
            "-p" | "--profile" => {
                *i += 1;
                if *i < args.len() {
                    self.profile = MicrolensProfile::from_name(&args[*i]).unwrap_or_else(|| {
                        eprintln!(
                            "Unknown profile: {}. Use 'microlens profiles' to list available.",
                            args[*i]
                        );
                        std::process::exit(1);
                    });
                }
            }
            "--padding" => {
                *i += 1;
                if *i < args.len() {
                    self.padding = args[*i].parse().unwrap_or(0.04);
                }
            }
            "-n" | "--samples" => {
                *i += 1;
                if *i < args.len() {
                    self.samples = args[*i].parse().unwrap_or(100_000);
                }
            }
            "--seed" => {
                *i += 1;
                if *i < args.len() {
                    self.seed = args[*i].parse().ok();
                }
            }
            "--size" => {
                *i += 1;
                if *i < args.len() {
                    self.size = args[*i].parse().unwrap_or(900.0);
                }
            }
            "--margin" => {
                *i += 1;
                if *i < args.len() {
                    self.margin = args[*i].parse().unwrap_or(100.0);
                }
            }
            _ => return false,
        }
        true
    }

    /// The seed to run with: the explicit one, or fresh entropy. Always
    /// reported in output so any run can be reproduced.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random::<u64>)
    }

    /// The square pixel region samples are drawn from.
    pub fn sample_region(&self) -> Rect {
        Rect::square(self.margin, self.size)
    }
}

/// Compute the cluster for the given arguments and place it at the margin
/// origin, exiting with a descriptive message on invalid configuration.
pub fn place_cluster(args: &SimArgs) -> (HoneycombCluster, Vec<PlacedHexagon>) {
    let cluster = compute_cluster(args.profile.side(), args.padding, args.size)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    let mut ids = IdCounter::new();
    let placed = cluster.place(Point::new(args.margin, args.margin), &mut ids);
    (cluster, placed)
}

/// Render the placed cluster as a standalone SVG document.
///
/// Black canvas, the sampling square outlined in cyan, and each hexagon
/// stroked in its palette color.
pub fn cluster_to_svg(placed: &[PlacedHexagon], size: f64, margin: f64) -> String {
    let canvas = size + 2.0 * margin;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">
<rect width="100%" height="100%" fill="black"/>
<rect x="{}" y="{}" width="{}" height="{}" stroke="cyan" fill="none"/>
"#,
        canvas, canvas, margin, margin, size, size
    ));

    for hexagon in placed {
        let points: String = hexagon
            .vertices()
            .iter()
            .map(|v| format!("{:.2},{:.2}", v.x, v.y))
            .collect::<Vec<_>>()
            .join(" ");

        svg.push_str(&format!(
            "  <polygon points=\"{}\" stroke=\"{}\" stroke-width=\"1\" fill=\"none\"/>\n",
            points,
            hexagon.color()
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write to stdout or to a file, matching the `-o` convention.
pub fn write_output(output_path: Option<&str>, content: &str) {
    match output_path {
        Some("-") | None => {
            println!("{}", content);
        }
        Some(path) => {
            fs::write(path, content).expect("Failed to write output file");
            eprintln!("Wrote: {}", path);
        }
    }
}
