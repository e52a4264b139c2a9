use std::{env, fs, path::PathBuf};

use sign_core::error::StoreError;
use sign_core::store::{self, JsonFileStore, MemoryStore, ProgressStore, SharedStore};
use sign_schema::{AccountProgress, Achievement, Difficulty, Vowel};

fn temp_store_path(name: &str) -> PathBuf {
    env::temp_dir()
        .join(format!("sign_core_store_{}_{}", name, std::process::id()))
        .join("account_data.json")
}

#[test]
fn test_missing_file_is_not_found() {
    let path = temp_store_path("missing");
    let _ = fs::remove_file(&path);
    let store = JsonFileStore::new(&path);

    let err = store.load().unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_first_load_creates_default_record() {
    let path = temp_store_path("first_load");
    let _ = fs::remove_file(&path);
    let store = JsonFileStore::new(&path);

    let record = store::load_or_init(&store).unwrap();
    assert_eq!(record, AccountProgress::default());
    assert!(path.exists());
    assert_eq!(store.load().unwrap(), record);

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_save_replaces_whole_record() {
    let path = temp_store_path("round_trip");
    let store = JsonFileStore::new(&path);

    let mut record = AccountProgress::new("maria");
    record.set_letter_done(Vowel::O, true);
    record.set_challenge_done(Difficulty::Intermediate, true);
    record.unlock(Achievement::FirstIntermediate);
    record.music_volume = 0.2;
    store.save(&record).unwrap();
    assert_eq!(store.load().unwrap(), record);

    store.save(&AccountProgress::new("maria")).unwrap();
    let reloaded = store.load().unwrap();
    assert!(!reloaded.o_status);
    assert!(reloaded.achievements.is_empty());

    // No temp file is left behind.
    let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"oStatus\""));
    assert!(raw.contains("\"intermediateChallenge\""));

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_corrupt_file_is_recreated() {
    let path = temp_store_path("corrupt");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();
    let store = JsonFileStore::new(&path);

    assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    let record = store::load_or_init(&store).unwrap();
    assert_eq!(record, AccountProgress::default());
    assert_eq!(store.load().unwrap(), record);

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_partial_record_fills_defaults() {
    let store = MemoryStore::new();
    store.set_raw(r#"{"username": "ana", "aStatus": true}"#);
    let record = store.load().unwrap();
    assert_eq!(record.username, "ana");
    assert!(record.a_status);
    assert!(!record.easy_challenge);
    assert_eq!(record.sfx_volume, sign_schema::DEFAULT_VOLUME);
}

#[test]
fn test_memory_store_recovers_from_corruption() {
    let store = MemoryStore::new();
    store.set_raw("[1, 2");
    let record = store::load_or_init(&store).unwrap();
    assert_eq!(record, AccountProgress::default());
    assert!(!store.is_empty());
}

#[test]
fn test_update_is_load_modify_save() {
    let store = MemoryStore::with_record(&AccountProgress::new("juan"));
    let (was_done, record) = store::update(&store, |r| {
        let before = r.easy_challenge;
        r.easy_challenge = true;
        before
    })
    .unwrap();
    assert!(!was_done);
    assert!(record.easy_challenge);
    assert_eq!(record.username, "juan");
    assert!(store.load().unwrap().easy_challenge);
}

#[test]
fn test_register_requires_username() {
    let store = MemoryStore::new();
    assert!(matches!(store::register(&store, "   "), Err(StoreError::EmptyUsername)));
    assert!(store.is_empty());

    let record = store::register(&store, "  pedro ").unwrap();
    assert_eq!(record.username, "pedro");
    assert_eq!(store.load().unwrap().username, "pedro");
}

#[test]
fn test_shared_store_serializes_updates() {
    let shared = SharedStore::new(MemoryStore::new());
    let clone = shared.clone();

    let handles: Vec<_> = Vowel::ALL
        .into_iter()
        .map(|vowel| {
            let store = clone.clone();
            std::thread::spawn(move || {
                store.update(|r| r.set_letter_done(vowel, true)).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let record = shared.load().unwrap();
    assert!(Vowel::ALL.iter().all(|v| record.letter_done(*v)));
}
