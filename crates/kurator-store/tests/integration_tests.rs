//! Integration tests for kurator-store
//!
//! These tests verify append-only, deduplicating behavior against real files.

use kurator_domain::{VocabularyKind, VocabularyStore};
use kurator_store::{append_new, append_new_with, load_existing_keys, StoreError, VocabularyFile};
use kurator_tabular::{read_header, sniff, Delimiter, Encoding, TabularError};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn data_rows(path: &std::path::Path) -> usize {
    fs::read_to_string(path).unwrap().lines().count() - 1
}

fn data_rows_latin1(path: &std::path::Path) -> usize {
    fs::read(path).unwrap().split(|&b| b == b'\n').filter(|l| !l.is_empty()).count() - 1
}

#[test]
fn test_missing_file_has_no_keys() {
    let dir = TempDir::new().unwrap();
    let keys = load_existing_keys(dir.path().join("absent.txt")).unwrap();
    assert!(keys.is_empty());
}

#[test]
fn test_geography_append_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("geography.txt");
    let candidates = strings(&["Oceania|US|Hawaii", "NA|US|WA"]);

    let added = append_new(&path, Some(candidates.as_slice()), "geography").unwrap();
    assert_eq!(added, candidates);
    assert_eq!(
        read_header(&path).unwrap(),
        strings(&[
            "geography",
            "standard",
            "checked",
            "error",
            "misplaced",
            "incorrectable",
            "source",
            "comment"
        ])
    );
    assert_eq!(data_rows(&path), 2);

    let again = append_new(&path, Some(candidates.as_slice()), "geography").unwrap();
    assert!(again.is_empty());
    assert_eq!(data_rows(&path), 2);
}

#[test]
fn test_no_candidates_is_a_failure_but_empty_list_is_not() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("month.txt");

    assert!(matches!(
        append_new(&path, None, "verbatim"),
        Err(StoreError::NoCandidates)
    ));
    assert!(!path.exists());

    let added = append_new(&path, Some(&[][..]), "verbatim").unwrap();
    assert!(added.is_empty());
}

#[test]
fn test_verbatim_values_are_kept_distinct_and_ordered() {
    let dir = TempDir::new().unwrap();
    let vocab = VocabularyFile::new(dir.path().join("month.txt"), VocabularyKind::SingleTerm);

    let added = vocab
        .append(&strings(&["May", "MAY", "", "v", "May", "5", "May "]))
        .unwrap();
    assert_eq!(added, strings(&["May", "MAY", "v", "5", "May "]));

    let added = vocab.append(&strings(&["vi", "v", "VI"])).unwrap();
    assert_eq!(added, strings(&["vi", "VI"]));

    let keys: Vec<String> = vocab.entries().unwrap().into_iter().map(|e| e.key).collect();
    assert_eq!(keys, strings(&["May", "MAY", "v", "5", "May ", "vi", "VI"]));
    assert!(vocab.entries().unwrap().iter().all(|e| e.checked == "0"));
}

#[test]
fn test_existing_file_keeps_its_delimiter() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("month.csv");
    let vocab =
        VocabularyFile::new(&path, VocabularyKind::SingleTerm).with_delimiter(Delimiter::Comma);
    vocab.append(&strings(&["May"])).unwrap();

    // Default delimiter would be tab; the existing comma file wins
    let reopened = VocabularyFile::new(&path, VocabularyKind::SingleTerm);
    reopened.append(&strings(&["June"])).unwrap();

    assert_eq!(sniff(&path).unwrap().delimiter, Delimiter::Comma);
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.lines().nth(2).unwrap().starts_with("June,"));
}

#[test]
fn test_append_new_with_creates_comma_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("month.txt");
    let candidates = strings(&["May"]);

    let added = append_new_with(&path, Some(candidates.as_slice()), "verbatim", Delimiter::Comma)
        .unwrap();
    assert_eq!(added, candidates);
    assert!(fs::read_to_string(&path).unwrap().starts_with("verbatim,standard,checked"));

    // The file decides from now on
    let june = strings(&["June"]);
    append_new(&path, Some(june.as_slice()), "verbatim").unwrap();
    assert_eq!(sniff(&path).unwrap().delimiter, Delimiter::Comma);
    assert_eq!(data_rows(&path), 2);
}

#[test]
fn test_zero_length_file_gets_a_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("month.txt");
    fs::write(&path, "").unwrap();

    let vocab = VocabularyFile::new(&path, VocabularyKind::SingleTerm);
    assert!(!vocab.exists());
    assert_eq!(vocab.append(&strings(&["May"])).unwrap(), strings(&["May"]));
    assert_eq!(read_header(&path).unwrap()[0], "verbatim");
}

#[test]
fn test_latin1_vocabulary_stays_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("country.txt");
    let mut bytes = VocabularyKind::SingleTerm.header().join("\t").into_bytes();
    bytes.extend_from_slice(b"\nS");
    bytes.extend_from_slice(&[0xE3, b'o', b'\n']);
    fs::write(&path, bytes).unwrap();

    let vocab = VocabularyFile::new(&path, VocabularyKind::SingleTerm);
    let candidates = strings(&["Zürich"]);
    assert_eq!(vocab.append(&candidates).unwrap(), candidates);
    assert!(vocab.append(&candidates).unwrap().is_empty());
    assert!(vocab.append(&candidates).unwrap().is_empty());

    assert_eq!(sniff(&path).unwrap().encoding, Encoding::Latin1);
    let keys = load_existing_keys(&path).unwrap();
    assert!(keys.contains("São"));
    assert!(keys.contains("Zürich"));
    assert_eq!(keys.len(), 2);
}

#[test]
fn test_key_outside_latin1_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("country.txt");
    let mut bytes = VocabularyKind::SingleTerm.header().join("\t").into_bytes();
    bytes.extend_from_slice(b"\nS");
    bytes.extend_from_slice(&[0xE3, b'o', b'\n']);
    fs::write(&path, bytes).unwrap();

    let vocab = VocabularyFile::new(&path, VocabularyKind::SingleTerm);
    let err = vocab.append(&strings(&["Łódź"])).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Tabular(TabularError::Encode { .. })
    ));
    assert_eq!(data_rows_latin1(&path), 1);
}

#[test]
fn test_header_mismatch_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("geog.txt");
    fs::write(&path, "country|stateProvince\tstandard\n").unwrap();

    let vocab = VocabularyFile::new(&path, VocabularyKind::Geography);
    let err = vocab.append(&strings(&["US|WA"])).unwrap_err();
    assert!(matches!(err, StoreError::HeaderMismatch { .. }));
    assert_eq!(data_rows(&path), 0);
}

#[test]
fn test_dict_recommendations_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("month.txt");
    fs::write(
        &path,
        "verbatim\tstandard\tchecked\terror\tmisplaced\tincorrectable\tsource\tcomment\n\
         V\t5\t1\t\t\t\t\t\n\
         5\t5\t1\t\t\t\t\t\n\
         May\t5\t0\t\t\t\t\t\n",
    )
    .unwrap();

    let dict = VocabularyFile::new(&path, VocabularyKind::SingleTerm)
        .dict()
        .unwrap();
    assert_eq!(dict.len(), 3);
    let recommended: Vec<&str> = dict.recommended().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(recommended, vec!["V"]);
}

proptest! {
    #[test]
    fn prop_append_is_idempotent_and_round_trips(
        candidates in proptest::collection::vec("[A-Za-z0-9 |.-]{0,12}", 0..20),
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vocab.txt");
        let vocab = VocabularyFile::new(&path, VocabularyKind::SingleTerm);

        let first = vocab.append(&candidates).unwrap();
        let rows_after_first = data_rows(&path);
        let second = vocab.append(&candidates).unwrap();

        prop_assert!(second.is_empty());
        prop_assert_eq!(data_rows(&path), rows_after_first);
        prop_assert_eq!(rows_after_first, first.len());

        let keys = vocab.load_existing_keys().unwrap();
        prop_assert_eq!(keys.len(), first.len());
        for added in &first {
            prop_assert!(keys.contains(added));
        }
        for candidate in candidates.iter().filter(|c| !c.is_empty()) {
            prop_assert!(keys.contains(candidate));
        }
    }
}
