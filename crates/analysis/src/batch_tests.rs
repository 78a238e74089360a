use super::*;
use crate::config::AnalysisConfig;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("othello-batch-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn strict_analyzer() -> GameAnalyzer {
    GameAnalyzer::new(AnalysisConfig {
        max_depth: 2,
        swing_threshold: 0.0,
        ..Default::default()
    })
}

#[test]
fn analyzes_json_files_in_name_order() {
    let dir = scratch_dir("order");
    let moves = |m: &[&str]| m.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    GameRecord::new(moves(&["d3", "c3", "c4", "c5"]))
        .save(&dir.join("b_game.json"))
        .unwrap();
    GameRecord {
        moves: moves(&["d3"]),
        dark: Some("alice".into()),
        light: Some("bob".into()),
    }
    .save(&dir.join("a_game.json"))
    .unwrap();
    std::fs::write(dir.join("notes.txt"), "not a game").unwrap();
    std::fs::write(dir.join("c_broken.json"), "{\"moves\": 3}").unwrap();

    let rows = analyze_dir(&mut strict_analyzer(), &dir).unwrap();
    std::fs::remove_dir_all(&dir).ok();

    assert_eq!(
        rows,
        vec![
            BatchRow {
                file: "a_game.json".into(),
                moves: 1,
                errors_count: 0,
                first_error_index: None,
            },
            BatchRow {
                file: "b_game.json".into(),
                moves: 4,
                errors_count: 2,
                first_error_index: Some(1),
            },
        ]
    );
}

#[test]
fn missing_directory_is_an_error() {
    let dir = std::env::temp_dir().join("othello-batch-does-not-exist");
    let err = analyze_dir(&mut strict_analyzer(), &dir).unwrap_err();
    assert!(matches!(err, ReportError::Io { .. }));
}

#[test]
fn game_file_players_are_optional() {
    let game: GameRecord = serde_json::from_str(r#"{"moves": ["d3", "pass"]}"#).unwrap();
    assert_eq!(game.moves, vec!["d3", "pass"]);
    assert!(game.dark.is_none());
}

#[test]
fn csv_rows() {
    let rows = vec![
        BatchRow {
            file: "x.json".into(),
            moves: 10,
            errors_count: 0,
            first_error_index: None,
        },
        BatchRow {
            file: "y.json".into(),
            moves: 60,
            errors_count: 3,
            first_error_index: Some(7),
        },
    ];
    assert_eq!(
        rows_to_csv(&rows),
        "file,moves,errors_count,first_error_index\nx.json,10,0,\ny.json,60,3,7\n"
    );
}
