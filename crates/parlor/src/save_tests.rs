use super::*;
use std::env;

fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("chess_parlor_{}_{}", std::process::id(), name))
}

#[test]
fn test_push_fen_keeps_four_newest() {
    let mut data = SaveData::default();
    for i in 0..6 {
        data.push_fen(format!("fen {i}"));
    }
    assert_eq!(data.fens, vec!["fen 5", "fen 4", "fen 3", "fen 2"]);
}

#[test]
fn test_missing_file_loads_default() {
    let path = temp_path("missing.json");
    let _ = fs::remove_file(&path);
    let store = SaveStore::open(&path).unwrap();
    assert_eq!(store.data(), &SaveData::default());
    assert_eq!(store.data().difficulty, 0.3);
}

#[test]
fn test_update_round_trips_through_disk() {
    let path = temp_path("nested/save.json");
    let _ = fs::remove_file(&path);

    let mut store = SaveStore::open(&path).unwrap();
    store
        .update(|data| {
            data.difficulty = 0.5;
            data.push_fen("8/8/8/8/8/8/8/K6k w - - 0 1");
        })
        .unwrap();

    let reloaded = SaveStore::open(&path).unwrap();
    assert_eq!(reloaded.data(), store.data());
    assert_eq!(reloaded.path(), Some(path.as_path()));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_partial_file_fills_defaults() {
    let path = temp_path("partial.json");
    fs::write(&path, r#"{ "fens": ["a"] }"#).unwrap();
    let data = SaveStore::load(&path).unwrap();
    assert_eq!(data.difficulty, 0.3);
    assert_eq!(data.fens, vec!["a"]);

    fs::write(&path, "  \n").unwrap();
    assert_eq!(SaveStore::load(&path).unwrap(), SaveData::default());
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_corrupt_file_is_an_error() {
    let path = temp_path("corrupt.json");
    fs::write(&path, "difficulty: [").unwrap();
    let err = SaveStore::load(&path).unwrap_err();
    assert!(matches!(err, ParlorError::CorruptSave { .. }));
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_in_memory_store_never_touches_disk() {
    let mut store = SaveStore::in_memory(SaveData::default());
    store.update(|data| data.push_fen("x")).unwrap();
    assert_eq!(store.path(), None);
    assert_eq!(store.data().fens, vec!["x"]);
}
