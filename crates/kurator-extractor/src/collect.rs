//! Collectors feeding newly seen values into vocabularies

use crate::{classify_not_in_reference, Extractor, ExtractorError, KeyOrder};
use kurator_domain::terms::{GEOGRAPHY_KEY_FIELDS, SIMPLE_DWC_TERMS};
use kurator_domain::{clean_header, CompositeKey, RowSource, VocabularyKind, DEFAULT_SEPARATOR};
use kurator_store::VocabularyFile;
use kurator_tabular::{Delimiter, TabularReader};
use std::path::Path;
use tracing::info;

impl Extractor {
    /// Add the sorted distinct geography combinations of a file to a geography vocabulary
    ///
    /// The vocabulary's key column is the nine geography fields joined by `|`.
    /// Returns the combinations actually added.
    pub fn collect_geography(
        &self,
        input: &Path,
        vocabulary: &Path,
        delimiter: Delimiter,
    ) -> Result<Vec<String>, ExtractorError> {
        let key = CompositeKey::new(GEOGRAPHY_KEY_FIELDS, DEFAULT_SEPARATOR)
            .map_err(ExtractorError::InvalidKey)?;
        let mut source = TabularReader::open(input)?;
        let candidates = self.distinct_composite_values(&mut source, &key, KeyOrder::Sorted)?;

        let vocab =
            VocabularyFile::new(vocabulary, VocabularyKind::Geography).with_delimiter(delimiter);
        let added = vocab.append(&candidates)?;
        info!(input = %input.display(), added = added.len(), "collected geography");
        Ok(added)
    }

    /// Add the non-Darwin Core header fields of a file to a Darwin Cloud vocabulary
    ///
    /// With `clean`, header fields are slugged first. Returns the fields
    /// actually added.
    pub fn collect_darwin_cloud(
        &self,
        input: &Path,
        vocabulary: &Path,
        clean: bool,
        delimiter: Delimiter,
    ) -> Result<Vec<String>, ExtractorError> {
        let source = TabularReader::open(input)?;
        let mut header = source.header().fields().to_vec();
        if clean {
            header = clean_header(&header);
        }

        let candidates = classify_not_in_reference(
            &header,
            SIMPLE_DWC_TERMS,
            self.config().case_sensitive_terms,
        );

        let vocab =
            VocabularyFile::new(vocabulary, VocabularyKind::SingleTerm).with_delimiter(delimiter);
        let added = vocab.append(&candidates)?;
        info!(input = %input.display(), added = added.len(), "collected darwin cloud terms");
        Ok(added)
    }
}
