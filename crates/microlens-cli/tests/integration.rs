//! Integration tests for microlens CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use microlens::{compute_cluster, IdCounter, Point, CENTER_INDEX};

/// Get the path to the microlens binary from the workspace root.
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // Go up from microlens-cli to crates
    path.pop(); // Go up from crates to the workspace root

    // Try release first, then debug
    let release = path.join("target/release/microlens");
    if release.exists() {
        return release;
    }
    path.join("target/debug/microlens")
}

#[test]
fn profiles_command_lists_presets() {
    let output = Command::new(binary_path())
        .arg("profiles")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("standard"), "Should list 'standard' profile");
    assert!(stdout.contains("high"), "Should list 'high' profile");
    assert!(stdout.contains("0.2272"), "Should show the standard side length");
    assert!(stdout.contains("0.1365"), "Should show the high-resolution side length");
}

#[test]
fn simulate_produces_json_report() {
    let output = Command::new(binary_path())
        .args(["simulate", "-n", "2000", "--seed", "42", "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("\"filling_factor\""), "Should have filling_factor key");
    assert!(stdout.contains("\"hits\""), "Should have hits key");
    assert!(stdout.contains("\"misses\""), "Should have misses key");
    assert!(stdout.contains("\"seed\":42"), "Should echo the seed");
    assert!(stdout.contains("\"samples\":2000"), "Should count all samples");
}

#[test]
fn simulate_is_reproducible_for_a_seed() {
    let run = |seed: &str| {
        let output = Command::new(binary_path())
            .args(["simulate", "-n", "5000", "--seed", seed, "--json"])
            .output()
            .expect("Failed to execute command");
        String::from_utf8_lossy(&output.stdout).to_string()
    };

    let first = run("7");
    let second = run("7");
    assert_eq!(first, second, "Same seed should reproduce the report");

    let other = run("8");
    assert_ne!(first, other, "Different seeds should differ");
}

#[test]
fn layout_emits_seven_hexagon_polygons() {
    let output = Command::new(binary_path())
        .args(["layout", "-p", "high", "--padding", "0.02"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("<?xml"), "Should have XML declaration");
    assert!(stdout.contains("<svg"), "Should have SVG element");
    assert!(stdout.contains("</svg>"), "Should close SVG element");
    assert_eq!(
        stdout.matches("<polygon").count(),
        7,
        "Should draw exactly 7 hexagons"
    );
    assert!(stdout.contains("stroke=\"cyan\""), "Should outline the sampling square");
}

#[test]
fn sweep_reports_the_closest_padding() {
    let output = Command::new(binary_path())
        .args([
            "sweep", "-p", "standard", "--from", "0", "--to", "0.08", "--step", "0.04",
            "-n", "2000", "--seed", "1",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("padding"), "Should print the table header");
    assert!(stdout.contains("filling factor"), "Should print the factor column");
    assert!(stdout.contains("Closest to target"), "Should report the closest padding");
}

#[test]
fn sweep_runs_from_a_yaml_plan() {
    let plan = "\
name: coarse standard sweep
profile: standard
paddings: [0.0, 0.05]
samples: 1500
seed: 9
";
    let plan_path = std::env::temp_dir().join("microlens_sweep_plan.yaml");
    std::fs::write(&plan_path, plan).expect("Failed to write plan file");

    let output = Command::new(binary_path())
        .args(["sweep", plan_path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stderr.contains("coarse standard sweep"), "Should announce the plan name");
    assert!(stdout.contains("\"rows\""), "Should list measured rows");
    assert!(stdout.contains("\"seed\":9"), "Should use the plan's seed");
    assert_eq!(stdout.matches("\"padding\":").count(), 2, "Should measure both paddings");
}

#[test]
fn classify_center_point_hits_the_center_hexagon() {
    // Recompute the CLI's default placement to find the center hexagon's
    // pixel-space center: standard profile, padding 0.04, 900 px square at
    // a 100 px margin.
    let cluster = compute_cluster(0.2272, 0.04, 900.0).unwrap();
    let placed = cluster.place(Point::new(100.0, 100.0), &mut IdCounter::new());
    let probe = placed[CENTER_INDEX].center();

    let mut child = Command::new(binary_path())
        .arg("classify")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    let input = format!("{} {}\n5 5\n", probe.x, probe.y);
    child
        .stdin
        .as_mut()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write to stdin");

    let output = child.wait_with_output().expect("Failed to wait for command");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains(&format!("Inside hexagon {}", CENTER_INDEX)),
        "Center point should hit the center hexagon, got: {}",
        stdout
    );
    assert!(stdout.contains("Misses: 1"), "The far corner point should miss");
    assert!(stdout.contains("filling factor 0.5000"), "Should report the running factor");
}

#[test]
fn invalid_configuration_is_rejected() {
    let output = Command::new(binary_path())
        .args(["simulate", "--padding", "-1"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Negative padding should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("padding"), "Should explain the failure: {}", stderr);
}

#[test]
fn help_command_shows_usage() {
    let output = Command::new(binary_path())
        .arg("help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let combined = format!("{}{}", stdout, stderr);

    assert!(combined.contains("simulate"), "Should mention simulate command");
    assert!(combined.contains("sweep"), "Should mention sweep command");
    assert!(combined.contains("layout"), "Should mention layout command");
    assert!(combined.contains("classify"), "Should mention classify command");
    assert!(combined.contains("profiles"), "Should mention profiles command");
}
