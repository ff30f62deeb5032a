//! End-to-end runs of the `steamsense` binary.

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

const STEAM_CSV: &str = "\
appid,name,developer,publisher,genres,price,owners,positive_ratings,negative_ratings
10,Counter-Strike,Valve,Valve,Action,7.19,10000000-20000000,124534,3339
20,Team Fortress Classic,Valve,Valve,Action,3.99,5000000-10000000,3318,633
40,Puzzle Box,Tiny,Tiny,Puzzle,0,0-20000,12,30
";

const DESCRIPTIONS_CSV: &str = "\
steam_appid,short_description
10,An amazing and thrilling team shooter.
20,A fun classic team game.
40,A tedious and boring mess.
";

fn steamsense(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_steamsense"))
        .current_dir(cwd)
        .args(args)
        .env_remove("STEAMSENSE_LOG")
        .output()
        .expect("binary should start")
}

#[test]
fn score_prints_json_rows() {
    let dir = tempfile::tempdir().unwrap();
    let out = steamsense(
        dir.path(),
        &["--format", "json", "score", "a wonderful game", "an awful game"],
    );
    assert!(out.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(2));
    assert_eq!(rows[0]["level"], "very_positive");
    assert_eq!(rows[1]["level"], "very_negative");
}

#[test]
fn run_reads_data_dir_and_writes_charts() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("csv");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("steam.csv"), STEAM_CSV).unwrap();
    std::fs::write(data.join("steam_description_data.csv"), DESCRIPTIONS_CSV).unwrap();

    let out = steamsense(
        dir.path(),
        &[
            "--format",
            "json",
            "--data-dir",
            "csv",
            "--output-dir",
            "charts",
            "run",
            "--group-by",
            "publisher",
        ],
    );
    assert!(
        out.status.success(),
        "{}",
        String::from_utf8_lossy(&out.stderr)
    );

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["games"], 3);
    assert_eq!(report["group_by"], "publisher");
    assert_eq!(report["aggregates"][0]["key"], "Valve");
    assert_eq!(report["aggregates"][0]["count"], 2);
    assert!(dir.path().join("charts/group_publisher.svg").is_file());
}

#[test]
fn missing_data_dir_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = steamsense(dir.path(), &["--data-dir", "nowhere", "run", "--no-charts"]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("steamsense error:"), "{stderr}");
    assert!(stderr.contains("nowhere"), "{stderr}");
    assert!(out.stdout.is_empty());
}
