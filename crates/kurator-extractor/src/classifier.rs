//! Term classification against a reference vocabulary

use kurator_domain::terms::SIMPLE_DWC_TERMS;
use std::collections::HashSet;

/// Field names split into reference and non-reference terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermClassification {
    /// Fields found in the reference set, in input order
    pub standard: Vec<String>,

    /// Fields not found in the reference set, in input order
    pub non_standard: Vec<String>,
}

/// Classifies field names against a fixed reference term set
#[derive(Debug, Clone)]
pub struct TermClassifier {
    reference: HashSet<String>,
    case_sensitive: bool,
}

impl TermClassifier {
    /// Classifier over a reference term set
    pub fn new<I, S>(reference: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let reference = reference
            .into_iter()
            .map(|t| normalize(t.as_ref(), case_sensitive))
            .collect();
        Self {
            reference,
            case_sensitive,
        }
    }

    /// Classifier over the Simple Darwin Core term list
    pub fn darwin_core(case_sensitive: bool) -> Self {
        Self::new(SIMPLE_DWC_TERMS.iter(), case_sensitive)
    }

    /// Whether a field name is a reference term
    pub fn is_standard(&self, field: &str) -> bool {
        self.reference.contains(&normalize(field, self.case_sensitive))
    }

    /// Split fields into standard and non-standard
    ///
    /// Blank fields are dropped and repeats are reported once.
    pub fn classify<S: AsRef<str>>(&self, fields: &[S]) -> TermClassification {
        let mut seen = HashSet::new();
        let mut result = TermClassification::default();
        for field in fields {
            let field: &str = field.as_ref();
            if field.is_empty() || !seen.insert(field) {
                continue;
            }
            if self.is_standard(field) {
                result.standard.push(field.to_string());
            } else {
                result.non_standard.push(field.to_string());
            }
        }
        result
    }
}

fn normalize(term: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        term.to_string()
    } else {
        term.to_lowercase()
    }
}

/// Fields not in the reference set, in input order
///
/// ```
/// use kurator_extractor::classify_not_in_reference;
///
/// let header = ["catalogNumber", "fooBar", "year"];
/// let reference = ["catalognumber", "Year"];
/// assert_eq!(classify_not_in_reference(&header, &reference, false), vec!["fooBar"]);
/// ```
pub fn classify_not_in_reference<S, R>(
    fields: &[S],
    reference: &[R],
    case_sensitive: bool,
) -> Vec<String>
where
    S: AsRef<str>,
    R: AsRef<str>,
{
    TermClassifier::new(reference, case_sensitive)
        .classify(fields)
        .non_standard
}

/// Fields that are not Simple Darwin Core terms, compared case-insensitively
pub fn terms_not_in_dwc<S: AsRef<str>>(fields: &[S]) -> Vec<String> {
    TermClassifier::darwin_core(false).classify(fields).non_standard
}
