//! Layout command implementation.

use super::common::{cluster_to_svg, place_cluster, write_output, SimArgs};

/// Execute the layout command.
pub fn cmd_layout(args: &[String]) {
    let mut sim = SimArgs::default();
    let mut output_path: Option<&str> = None;

    let mut i = 0;
    while i < args.len() {
        if sim.parse_flag(args, &mut i) {
            i += 1;
            continue;
        }
        match args[i].as_str() {
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
            unknown => {
                eprintln!("Unknown option: {}", unknown);
            }
        }
        i += 1;
    }

    let (cluster, placed) = place_cluster(&sim);
    eprintln!(
        "Placed {} hexagons, {:.1} px/arcsec, pixel radius {:.1}",
        placed.len(),
        cluster.conversion(),
        cluster.pixel_radius()
    );

    let svg = cluster_to_svg(&placed, sim.size, sim.margin);
    write_output(output_path, &svg);
}

fn print_usage() {
    eprintln!("Usage: microlens layout [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --profile <name>    Microlens profile (default: standard)");
    eprintln!("  --padding <arcsec>      Padding between hexagons (default: 0.04)");
    eprintln!("  --size <px>             Sampling square size (default: 900)");
    eprintln!("  --margin <px>           Outer margin (default: 100)");
    eprintln!("  -o, --output <file>     Output file (default: stdout)");
    eprintln!();
    eprintln!("Emits an SVG of the placed cluster with per-hexagon palette colors.");
}
