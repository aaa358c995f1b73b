//! Integration tests for kurator-extractor
//!
//! These tests run the file-based collectors and header translation.

use kurator_domain::{CompositeKey, VocabularyKind};
use kurator_extractor::{darwinize_file, Extractor, ExtractorConfig, KeyOrder};
use kurator_store::VocabularyFile;
use kurator_tabular::{read_header, Delimiter, TabularReader};
use std::fs;
use tempfile::TempDir;

const OCCURRENCES: &str = "\
catalogNumber,continent,country,countryCode,stateProvince,county,collector,earliestDateCollected
1,Oceania,United States,US,Hawaii,,Smith,1990
2,North America,United States,US,Washington,Chelan,Jones,1991
3,Oceania,United States,US,Hawaii,,Smith,1992
";

fn write_occurrences(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("occurrences.csv");
    fs::write(&path, OCCURRENCES).unwrap();
    path
}

#[test]
fn test_collect_geography_is_sorted_and_idempotent() {
    let dir = TempDir::new().unwrap();
    let input = write_occurrences(&dir);
    let vocab = dir.path().join("dwc_geography.txt");
    let extractor = Extractor::new(ExtractorConfig::default());

    let added = extractor
        .collect_geography(&input, &vocab, Delimiter::Tab)
        .unwrap();
    assert_eq!(
        added,
        vec![
            "North America|United States|US|Washington|Chelan||||",
            "Oceania|United States|US|Hawaii|||||",
        ]
    );

    let header = read_header(&vocab).unwrap();
    assert_eq!(header.len(), 9);
    assert_eq!(header[8], "notHigherGeography");

    let again = extractor
        .collect_geography(&input, &vocab, Delimiter::Tab)
        .unwrap();
    assert!(again.is_empty());
}

#[test]
fn test_collect_darwin_cloud() {
    let dir = TempDir::new().unwrap();
    let input = write_occurrences(&dir);
    let vocab = dir.path().join("darwin_cloud.txt");
    let extractor = Extractor::new(ExtractorConfig::default());

    let added = extractor
        .collect_darwin_cloud(&input, &vocab, false, Delimiter::Tab)
        .unwrap();
    assert_eq!(added, vec!["collector", "earliestDateCollected"]);

    let keys = VocabularyFile::new(&vocab, VocabularyKind::SingleTerm)
        .load_existing_keys()
        .unwrap();
    assert!(keys.contains("collector"));
}

#[test]
fn test_darwinize_file_rewrites_header_only() {
    let dir = TempDir::new().unwrap();
    let input = write_occurrences(&dir);
    let cloud_path = dir.path().join("darwin_cloud.txt");
    fs::write(
        &cloud_path,
        "verbatim\tstandard\tchecked\terror\tmisplaced\tincorrectable\tsource\tcomment\n\
         Collector\trecordedBy\t1\t\t\t\t\t\n\
         earliestDateCollected\teventDate\t1\t\t\t\t\t\n",
    )
    .unwrap();
    let cloud = VocabularyFile::new(&cloud_path, VocabularyKind::SingleTerm)
        .dict()
        .unwrap();

    let output = dir.path().join("darwinized.csv");
    let header = darwinize_file(&input, &output, &cloud).unwrap();
    assert_eq!(header[6], "recordedBy");
    assert_eq!(header[7], "eventDate");
    assert_eq!(header[0], "catalogNumber");

    let mut reader = TabularReader::open(&output).unwrap();
    let extractor = Extractor::new(ExtractorConfig::default());
    let collectors = extractor
        .distinct_single_values(&mut reader, "recordedBy")
        .unwrap();
    assert_eq!(collectors, vec!["Smith", "Jones"]);
}

#[test]
fn test_composite_values_from_file() {
    let dir = TempDir::new().unwrap();
    let input = write_occurrences(&dir);
    let key = CompositeKey::parse("country|stateProvince", '|').unwrap();

    let mut reader = TabularReader::open(&input).unwrap();
    let values = Extractor::default()
        .distinct_composite_values(&mut reader, &key, KeyOrder::FirstSeen)
        .unwrap();
    assert_eq!(values, vec!["United States|Hawaii", "United States|Washington"]);
}
