use snapfeed_engine::SeenSet;
use tempfile::TempDir;

#[test]
fn open_creates_an_empty_store() {
    let temp = TempDir::new().unwrap();
    let seen = SeenSet::open(&temp.path().join("cache.db")).unwrap();
    assert!(seen.is_empty());
    assert!(!seen.contains("https://i.redd.it/photo.jpg"));
}

#[test]
fn recorded_locators_are_contained() {
    let temp = TempDir::new().unwrap();
    let mut seen = SeenSet::open(&temp.path().join("cache.db")).unwrap();

    seen.record("https://i.redd.it/a.jpg").unwrap();
    seen.record("https://i.redd.it/b.png").unwrap();

    assert!(seen.contains("https://i.redd.it/a.jpg"));
    assert!(seen.contains("https://i.redd.it/b.png"));
    assert!(!seen.contains("https://i.redd.it/c.jpg"));
    assert_eq!(seen.len(), 2);
}

#[test]
fn membership_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("cache.db");

    {
        let mut seen = SeenSet::open(&db).unwrap();
        seen.record("https://i.redd.it/persisted.jpg").unwrap();
    }

    let seen = SeenSet::open(&db).unwrap();
    assert!(seen.contains("https://i.redd.it/persisted.jpg"));
    assert_eq!(seen.len(), 1);
}

#[test]
fn recording_twice_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let mut seen = SeenSet::open(&temp.path().join("cache.db")).unwrap();

    seen.record("https://i.redd.it/a.jpg").unwrap();
    seen.record("https://i.redd.it/a.jpg").unwrap();

    assert_eq!(seen.len(), 1);
}
