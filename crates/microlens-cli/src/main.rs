//! microlens - Monte Carlo filling-factor simulation for microlens arrays
//!
//! Usage:
//!   microlens simulate [options]       Run a Monte Carlo estimate
//!   microlens sweep [plan.yaml]        Measure a range of padding values
//!   microlens layout [options]         Emit an SVG of the placed cluster
//!   microlens classify [options]       Classify points read from stdin
//!   microlens profiles                 List available microlens profiles

use std::env;

mod cli;

use cli::{cmd_classify, cmd_layout, cmd_simulate, cmd_sweep};
use microlens::MicrolensProfile;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 {
        match args[1].as_str() {
            "simulate" => {
                cmd_simulate(&args[2..]);
                return;
            }
            "sweep" => {
                cmd_sweep(&args[2..]);
                return;
            }
            "layout" => {
                cmd_layout(&args[2..]);
                return;
            }
            "classify" => {
                cmd_classify(&args[2..]);
                return;
            }
            "profiles" => {
                cmd_profiles();
                return;
            }
            "help" | "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            unknown => {
                eprintln!("Unknown command: {}", unknown);
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    print_usage(&args[0]);
    std::process::exit(1);
}

fn cmd_profiles() {
    println!("Available profiles:");
    for profile in MicrolensProfile::all() {
        println!(
            "  {:<10} side {:.4} arcsec, target filling factor {:.0}%, {} rings",
            profile.name(),
            profile.side(),
            profile.target_filling_factor() * 100.0,
            profile.rings()
        );
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  simulate    Run a Monte Carlo filling-factor estimate");
    eprintln!("  sweep       Measure the filling factor across a padding range");
    eprintln!("  layout      Emit an SVG visualization of the placed cluster");
    eprintln!("  classify    Classify points read from stdin (x y per line)");
    eprintln!("  profiles    List available microlens profiles");
    eprintln!("  help        Show this message");
    eprintln!();
    eprintln!("Run '{} <command> --help' for command options.", program);
}
