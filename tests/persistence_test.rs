//! Score storage on disk.

use strictly_versus::{
    FileScoreStore, GameConfig, RecordingFrontend, Score, ScorePersistence, TurnController,
    decode_score, encode_score,
};
use tempfile::TempDir;

#[test]
fn test_score_encodes_as_triple() {
    let encoded = encode_score(&Score::new(3, 1, 2)).unwrap();
    assert_eq!(encoded, "[3,1,2]");
    assert_eq!(decode_score(" [3,1,2]\n").unwrap(), Score::new(3, 1, 2));
}

#[test]
fn test_decode_rejects_other_shapes() {
    assert!(decode_score("").is_err());
    assert!(decode_score("{\"player_wins\":1}").is_err());
    assert!(decode_score("[1,2]").is_err());
    assert!(decode_score("[1,2,-3]").is_err());
}

#[test]
fn test_missing_file_loads_zero() {
    let dir = TempDir::new().unwrap();
    let mut store = FileScoreStore::new(dir.path().join("score.json"));
    assert_eq!(store.load().unwrap(), Score::default());
}

#[test]
fn test_saved_score_survives_new_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("score.json");

    FileScoreStore::new(&path).save(Score::new(4, 5, 6)).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[4,5,6]");

    let mut reopened = FileScoreStore::new(&path);
    assert_eq!(reopened.load().unwrap(), Score::new(4, 5, 6));
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("score.json");
    std::fs::write(&path, "not a score").unwrap();
    assert!(FileScoreStore::new(&path).load().is_err());
}

#[test]
fn test_controller_starts_from_zero_on_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("score.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let config = GameConfig::default().with_seed(3);
    let mut controller =
        TurnController::from_config(RecordingFrontend::new(), FileScoreStore::new(&path), &config);
    controller.start();
    assert_eq!(controller.state().score(), Score::default());
    assert_eq!(controller.frontend().score(), Some(Score::default()));
}
