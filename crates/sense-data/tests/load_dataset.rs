//! End-to-end loading tests against CSV fixtures written to a temp directory.

use std::path::Path;

use pretty_assertions::assert_eq;
use sense_config::DataConfig;
use sense_core::MissingDescriptionPolicy;
use sense_data::{CsvLoader, DataError, load_dataset, load_joined};

const STEAM_CSV: &str = "\
appid,name,release_date,english,developer,publisher,platforms,required_age,categories,genres,steamspy_tags,achievements,positive_ratings,negative_ratings,average_playtime,median_playtime,owners,price
10,Counter-Strike,2000-11-01,1,Valve,Valve,windows;mac;linux,0,Multi-player,Action,Action;FPS,0,124534,3339,17612,317,10000000-20000000,7.19
20,Team Fortress Classic,1999-04-01,1,Valve,Valve,windows;mac;linux,0,Multi-player,Action,Action;FPS,0,3318,633,277,62,5000000-10000000,3.99
30,Day of Defeat,2003-05-01,1,Valve,Valve,windows;mac;linux,0,Multi-player,Action,FPS;World War II,0,3416,398,187,34,5000000-10000000,3.99
,Broken Row,2003-05-01,1,Nobody,Nobody,windows,0,,Casual,,0,1,1,0,0,0-20000,0.0
";

const DESCRIPTIONS_CSV: &str = "\
steam_appid,detailed_description,about_the_game,short_description
10,\"Long, detailed text\",About,\"Play the world's number 1 online action game.\"
20,Long,About,\"One of the most popular online action games of all time, with a
line break inside quotes.\"
99,Orphan,Orphan,A game that is not in the metadata table.
";

fn write_fixture(dir: &Path) -> DataConfig {
    std::fs::write(dir.join("steam.csv"), STEAM_CSV).unwrap();
    std::fs::write(dir.join("steam_description_data.csv"), DESCRIPTIONS_CSV).unwrap();
    DataConfig {
        dir: dir.to_path_buf(),
        ..DataConfig::default()
    }
}

fn loader(config: &DataConfig) -> CsvLoader {
    CsvLoader::new(&config.encodings).expect("open loader")
}

#[test]
fn loads_both_tables_with_all_columns() {
    let tmp = tempfile::tempdir().unwrap();
    let config = write_fixture(tmp.path());

    let raw = load_dataset(&loader(&config), &config).expect("dataset loads");
    assert_eq!(raw.metadata.name, "steam");
    assert_eq!(raw.metadata.width(), 18);
    assert_eq!(raw.metadata.height(), 4);
    assert_eq!(raw.descriptions.height(), 3);
    assert_eq!(raw.descriptions.columns[3], "short_description");
}

#[test]
fn joins_with_neutral_policy() {
    let tmp = tempfile::tempdir().unwrap();
    let config = write_fixture(tmp.path());

    let joined = load_joined(&loader(&config), &config).expect("joined");
    let ids: Vec<u64> = joined.records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![10, 20, 30]);

    assert_eq!(
        joined.records[0].description.as_deref(),
        Some("Play the world's number 1 online action game.")
    );
    assert!(
        joined.records[1]
            .description
            .as_deref()
            .is_some_and(|d| d.contains("line break inside quotes"))
    );
    assert_eq!(joined.records[2].description, None);

    let report = &joined.report;
    assert_eq!(report.malformed_metadata, 1);
    assert_eq!(report.orphan_descriptions, 1);
    assert_eq!(report.missing_descriptions, 1);
    assert_eq!(report.text_column.as_deref(), Some("short_description"));
}

#[test]
fn drop_policy_excludes_undescribed_games() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = write_fixture(tmp.path());
    config.missing_descriptions = MissingDescriptionPolicy::Drop;

    let joined = load_joined(&loader(&config), &config).expect("joined");
    let ids: Vec<u64> = joined.records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![10, 20]);
}

#[test]
fn missing_directory_is_a_missing_input_error() {
    let tmp = tempfile::tempdir().unwrap();
    let config = DataConfig {
        dir: tmp.path().join("data"),
        ..DataConfig::default()
    };

    let err = load_dataset(&loader(&config), &config).expect_err("should fail");
    assert!(matches!(err, DataError::MissingInput { .. }));
    let msg = err.to_string();
    assert!(msg.contains("data directory not found"), "got: {msg}");
    assert!(msg.contains("--data-dir"), "got: {msg}");
}

#[test]
fn missing_descriptions_file_is_a_missing_input_error() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("steam.csv"), STEAM_CSV).unwrap();
    let config = DataConfig {
        dir: tmp.path().to_path_buf(),
        ..DataConfig::default()
    };

    let err = load_dataset(&loader(&config), &config).expect_err("should fail");
    match err {
        DataError::MissingInput { path, .. } => {
            assert!(path.ends_with("steam_description_data.csv"));
        }
        other => panic!("expected MissingInput, got {other:?}"),
    }
}

#[test]
fn latin1_file_falls_back_to_second_encoding() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("latin.csv");
    // "Pokémon" with é as the single latin-1 byte 0xE9.
    let mut bytes = b"appid,name\n1,Pok".to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(b"mon\n");
    std::fs::write(&path, bytes).unwrap();

    let loader = CsvLoader::new(&["utf-8".to_string(), "latin-1".to_string()]).unwrap();
    let table = loader.load(&path).expect("latin-1 fallback");
    assert_eq!(table.rows[0][1].as_deref(), Some("Pokémon"));
}

#[test]
fn inspect_reports_every_csv() {
    let tmp = tempfile::tempdir().unwrap();
    let config = write_fixture(tmp.path());

    let summaries = loader(&config)
        .inspect_dir(&config.dir, 2)
        .expect("inspect");
    let files: Vec<&str> = summaries.iter().map(|s| s.file.as_str()).collect();
    assert_eq!(files, vec!["steam.csv", "steam_description_data.csv"]);
    assert_eq!(summaries[0].rows, 4);
    assert_eq!(summaries[0].head.len(), 2);
    assert!(summaries.iter().all(|s| s.error.is_none()));
}
