use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use pretty_assertions::assert_eq;
use snapfeed_engine::{is_empty_text_sentinel, package, ARCHIVE_TOP_DIR};
use tempfile::TempDir;

fn archive_listing(path: &Path) -> Vec<(String, Vec<u8>)> {
    let file = File::open(path).unwrap();
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    let mut listing = Vec::new();
    for entry in archive.entries().unwrap() {
        let mut entry = entry.unwrap();
        let name = entry.path().unwrap().to_string_lossy().into_owned();
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).unwrap();
        listing.push((name, bytes));
    }
    listing
}

#[test]
fn archive_preserves_filenames_under_top_dir() {
    let temp = TempDir::new().unwrap();
    let clean = temp.path().join("no_words");
    fs::create_dir(&clean).unwrap();
    fs::write(clean.join("photo.jpg"), b"jpeg bytes").unwrap();
    fs::write(clean.join("crowd.png"), b"png bytes").unwrap();

    let archive_path = temp.path().join("images.tar.gz");
    let summary = package(&clean, &archive_path).unwrap();
    assert_eq!(summary.file_count, 2);
    assert_eq!(summary.archive_path, archive_path);

    let listing = archive_listing(&archive_path);
    assert_eq!(
        listing,
        vec![
            (
                format!("{ARCHIVE_TOP_DIR}/crowd.png"),
                b"png bytes".to_vec()
            ),
            (
                format!("{ARCHIVE_TOP_DIR}/photo.jpg"),
                b"jpeg bytes".to_vec()
            ),
        ]
    );
}

#[test]
fn empty_clean_dir_produces_an_empty_archive() {
    let temp = TempDir::new().unwrap();
    let clean = temp.path().join("no_words");
    fs::create_dir(&clean).unwrap();

    let archive_path = temp.path().join("images.tar.gz");
    let summary = package(&clean, &archive_path).unwrap();
    assert_eq!(summary.file_count, 0);
    assert!(archive_listing(&archive_path).is_empty());
}

#[test]
fn rerun_overwrites_the_previous_archive() {
    let temp = TempDir::new().unwrap();
    let clean = temp.path().join("no_words");
    fs::create_dir(&clean).unwrap();
    let archive_path = temp.path().join("images.tar.gz");

    fs::write(clean.join("first.jpg"), b"first").unwrap();
    package(&clean, &archive_path).unwrap();

    fs::remove_file(clean.join("first.jpg")).unwrap();
    fs::write(clean.join("second.jpg"), b"second").unwrap();
    package(&clean, &archive_path).unwrap();

    let names: Vec<_> = archive_listing(&archive_path)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec![format!("{ARCHIVE_TOP_DIR}/second.jpg")]);
}

#[test]
fn missing_clean_dir_fails_packaging() {
    let temp = TempDir::new().unwrap();
    let result = package(&temp.path().join("gone"), &temp.path().join("out.tar.gz"));
    assert!(result.is_err());
}

#[test]
fn empty_text_sentinel_detection() {
    // What Tesseract prints when no text is recognized.
    assert!(is_empty_text_sentinel(" \n\u{c}"));
    assert!(is_empty_text_sentinel(""));
    assert!(is_empty_text_sentinel("\n\n"));
    assert!(!is_empty_text_sentinel("NO JUSTICE NO PEACE"));
    assert!(!is_empty_text_sentinel(" a \n"));
}
