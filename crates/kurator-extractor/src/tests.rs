//! Unit tests for the Extractor over in-memory sources

#[cfg(test)]
mod tests {
    use crate::{Extractor, ExtractorConfig, ExtractorError, KeyOrder, KeySpec};
    use kurator_domain::{CompositeKey, Header, VecRowSource, VocabularyEntry};
    use kurator_store::VocabularyDict;
    use std::collections::HashSet;

    fn source(fields: &[&str], rows: &[&[&str]]) -> VecRowSource {
        let header = Header::new(fields.iter().copied()).unwrap();
        let rows = rows
            .iter()
            .map(|r| r.iter().map(|v| v.to_string()).collect())
            .collect();
        VecRowSource::new(header, rows)
    }

    fn extractor() -> Extractor {
        Extractor::new(ExtractorConfig::default())
    }

    #[test]
    fn test_distinct_values_keep_first_seen_order() {
        let mut src = source(&["f"], &[&["B"], &["A"], &["B"], &["C"]]);
        let values = extractor().distinct_single_values(&mut src, "f").unwrap();
        assert_eq!(values, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_distinct_values_are_verbatim() {
        let mut src = source(
            &["month"],
            &[&["May"], &["MAY"], &["v"], &["5"], &["May"], &["May "]],
        );
        let values = extractor()
            .distinct_single_values(&mut src, "month")
            .unwrap();
        assert_eq!(values, vec!["May", "MAY", "v", "5", "May "]);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let mut src = source(&["a", "month"], &[&["1", "May"], &["2"], &["3", "June"]]);
        let values = extractor()
            .distinct_single_values(&mut src, "month")
            .unwrap();
        assert_eq!(values, vec!["May", "June"]);
    }

    #[test]
    fn test_missing_field_is_reported() {
        let mut src = source(&["year"], &[&["1990"]]);
        let err = extractor()
            .distinct_single_values(&mut src, "Year")
            .unwrap_err();
        assert!(matches!(err, ExtractorError::MissingField(f) if f == "Year"));
    }

    #[test]
    fn test_composite_keeps_slots_for_missing_fields() {
        let mut src = source(&["f1", "f3"], &[&["v1", "v3"]]);
        let key = CompositeKey::new(["f1", "f2", "f3"], '|').unwrap();
        let values = extractor()
            .distinct_composite_values(&mut src, &key, KeyOrder::FirstSeen)
            .unwrap();
        assert_eq!(values, vec!["v1||v3"]);
    }

    #[test]
    fn test_composite_orders() {
        let rows: &[&[&str]] = &[&["US", "WA"], &["NZ", ""], &["US", "WA"], &["AU", "NSW"]];
        let key = CompositeKey::new(["country", "stateProvince"], '|').unwrap();

        let mut src = source(&["country", "stateProvince"], rows);
        let first_seen = extractor()
            .distinct_composite_values(&mut src, &key, KeyOrder::FirstSeen)
            .unwrap();
        assert_eq!(first_seen, vec!["US|WA", "NZ|", "AU|NSW"]);

        let mut src = source(&["country", "stateProvince"], rows);
        let sorted = Extractor::new(ExtractorConfig::geography())
            .composite_values(&mut src, &key)
            .unwrap();
        assert_eq!(sorted, vec!["AU|NSW", "NZ|", "US|WA"]);
    }

    #[test]
    fn test_token_counts() {
        let mut src = source(
            &["locality"],
            &[&["National Park of the North"], &["Ridge National Forest"], &["  "]],
        );
        let report = extractor().token_counts(&mut src, "locality").unwrap();
        assert_eq!(report.rows_scanned, 3);
        assert_eq!(report.populated_rows, 2);
        assert_eq!(report.tokens["National"].total_count, 2);
        assert_eq!(report.tokens["National"].row_count, 2);
        assert_eq!(report.tokens["of"].total_count, 1);
        assert_eq!(report.tokens["Ridge"].total_count, 1);
    }

    #[test]
    fn test_value_counts_sorted_by_count() {
        let mut src = source(&["month"], &[&["5"], &["V"], &["5"], &["May"], &["V"], &["5"]]);
        let counts = extractor()
            .value_counts(&mut src, &KeySpec::Field("month".to_string()))
            .unwrap();
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.value.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("5", 3), ("V", 2), ("May", 1)]);
    }

    #[test]
    fn test_term_completeness() {
        let mut src = source(
            &["a", "b", "c"],
            &[&["1", "", "x"], &["2", " "], &["", "y", "z"]],
        );
        let completeness = extractor().term_completeness(&mut src).unwrap();
        let pairs: Vec<(&str, usize)> = completeness
            .iter()
            .map(|c| (c.field.as_str(), c.populated))
            .collect();
        assert_eq!(pairs, vec![("a", 2), ("b", 1), ("c", 2)]);
    }

    #[test]
    fn test_unknown_values() {
        let mut src = source(&["month"], &[&["May "], &["vi"], &["June"], &[""], &["vi"]]);
        let known: HashSet<String> = ["May".to_string()].into_iter().collect();
        let unknown = extractor()
            .unknown_values(&mut src, &KeySpec::parse("month", '|').unwrap(), &known)
            .unwrap();
        assert_eq!(unknown, vec!["vi", "June"]);
    }

    #[test]
    fn test_key_spec_parse() {
        let key = KeySpec::parse("country | stateProvince", '|').unwrap();
        assert_eq!(key.name(), "country|stateProvince");
        assert!(KeySpec::parse("  ", '|').is_err());
        assert!(KeySpec::parse("a||b", '|').is_err());
    }

    #[test]
    fn test_key_spec_missing_fields() {
        let header = Header::new(["country", "county"]).unwrap();
        let composite = KeySpec::parse("country|stateProvince|county", '|').unwrap();
        assert_eq!(composite.missing_fields(&header), vec!["stateProvince"]);
        assert!(KeySpec::parse("county", '|').unwrap().missing_fields(&header).is_empty());
        assert_eq!(
            KeySpec::parse("year", '|').unwrap().missing_fields(&header),
            vec!["year"]
        );
    }

    #[test]
    fn test_composite_with_missing_field_is_counted_and_looked_up() {
        let key = KeySpec::parse("f1|f2", '|').unwrap();
        let mut src = source(&["f1"], &[&["a"], &["a"]]);
        let counts = extractor().value_counts(&mut src, &key).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!((counts[0].value.as_str(), counts[0].count), ("a|", 2));

        let mut src = source(&["f1"], &[&["a"], &["b"]]);
        let known: HashSet<String> = ["a|".to_string()].into_iter().collect();
        let unknown = extractor().unknown_values(&mut src, &key, &known).unwrap();
        assert_eq!(unknown, vec!["b|"]);

        let missing = KeySpec::parse("f2", '|').unwrap();
        let mut src = source(&["f1"], &[&["a"]]);
        let err = extractor().unknown_values(&mut src, &missing, &known).unwrap_err();
        assert!(matches!(err, ExtractorError::MissingField(f) if f == "f2"));
    }

    fn vocabulary(pairs: &[(&str, &str)]) -> VocabularyDict {
        VocabularyDict::from_entries(pairs.iter().map(|(key, standard)| VocabularyEntry {
            standard: standard.to_string(),
            ..VocabularyEntry::new(*key)
        }))
    }

    #[test]
    fn test_standardize_single_field_keeps_original() {
        let mut src = source(
            &["ID", "month", "country"],
            &[&["1", "vi", "Mexico"], &["2", "June", "Mexico"], &["3", "xiii", "Peru"]],
        );
        let vocab = vocabulary(&[("vi", "6"), ("June", "6"), ("xiii", "")]);
        let key = KeySpec::parse("month", '|').unwrap();
        let result = extractor().standardize(&mut src, &key, &vocab).unwrap();

        assert_eq!(result.header, vec!["ID", "month", "country", "month_orig"]);
        assert_eq!(result.rows[0], vec!["1", "6", "Mexico", "vi"]);
        assert_eq!(result.rows[1], vec!["2", "6", "Mexico", "June"]);
        assert_eq!(result.rows[2], vec!["3", "xiii", "Peru", "xiii"]);
        assert_eq!(result.changed, 2);
    }

    #[test]
    fn test_standardize_composite_splits_standard() {
        let mut src = source(
            &["country", "stateProvince"],
            &[&["Mexico", "Jal."], &["Mexico"], &["Peru", "Cusco"]],
        );
        let vocab = vocabulary(&[
            ("Mexico|Jal.", "México|Jalisco"),
            ("Peru|Cusco", "Perú"),
        ]);
        let key = KeySpec::parse("country|stateProvince", '|').unwrap();
        let result = extractor().standardize(&mut src, &key, &vocab).unwrap();

        assert_eq!(
            result.header,
            vec!["country", "stateProvince", "country_orig", "stateProvince_orig"]
        );
        assert_eq!(result.rows[0], vec!["México", "Jalisco", "Mexico", "Jal."]);
        // Short rows are padded
        assert_eq!(result.rows[1], vec!["Mexico", "", "Mexico", ""]);
        // Wrong number of parts leaves the row untouched
        assert_eq!(result.rows[2], vec!["Peru", "Cusco", "Peru", "Cusco"]);
        assert_eq!(result.changed, 1);
    }

    #[test]
    fn test_standardize_trims_lookup_values() {
        let mut src = source(&["month"], &[&[" vi "]]);
        let vocab = vocabulary(&[("vi", "6")]);
        let key = KeySpec::parse("month", '|').unwrap();

        let result = extractor().standardize(&mut src, &key, &vocab).unwrap();
        assert_eq!(result.rows[0], vec!["6", " vi "]);

        let strict = Extractor::new(ExtractorConfig::strict());
        let mut src = source(&["month"], &[&[" vi "]]);
        let result = strict.standardize(&mut src, &key, &vocab).unwrap();
        assert_eq!(result.changed, 0);
    }

    #[test]
    fn test_standardize_rejects_bad_keys() {
        let vocab = vocabulary(&[]);
        let key = KeySpec::parse("country|county", '|').unwrap();
        let mut src = source(&["country"], &[&["Peru"]]);
        let err = extractor().standardize(&mut src, &key, &vocab).unwrap_err();
        assert!(matches!(err, ExtractorError::MissingField(f) if f == "county"));

        let key = KeySpec::parse("month", '|').unwrap();
        let mut src = source(&["month", "month_orig"], &[&["v", "v"]]);
        let err = extractor().standardize(&mut src, &key, &vocab).unwrap_err();
        assert!(matches!(err, ExtractorError::InvalidKey(_)));
    }

    #[test]
    fn test_term_row_count_skips_blank_values() {
        let mut src = source(
            &["ID", "year"],
            &[&["1", "1990"], &["2", " "], &["3"], &["4", "2001"]],
        );
        assert_eq!(extractor().term_row_count(&mut src, "year").unwrap(), 2);

        let mut src = source(&["ID"], &[&["1"]]);
        let err = extractor().term_row_count(&mut src, "year").unwrap_err();
        assert!(matches!(err, ExtractorError::MissingField(f) if f == "year"));
    }
}
