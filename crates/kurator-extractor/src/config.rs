//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Order in which distinct composite values are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    /// Order of first appearance in the source
    #[default]
    FirstSeen,
    /// Lexicographic order
    Sorted,
}

/// Configuration for the Extractor
///
/// Fields missing from a TOML document take their default values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Separator between composite key parts
    pub separator: char,

    /// Ordering of distinct composite values
    pub composite_order: KeyOrder,

    /// Compare field names to reference terms case-sensitively
    pub case_sensitive_terms: bool,

    /// Trim values before looking them up in a vocabulary
    pub trim_lookup_values: bool,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.separator.is_whitespace() {
            return Err("separator cannot be whitespace".to_string());
        }
        if matches!(self.separator, ',' | '"') {
            return Err(format!(
                "separator {:?} collides with delimited text syntax",
                self.separator
            ));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// First-seen composites joined with `|`, case-insensitive term matching
    fn default() -> Self {
        Self {
            separator: '|',
            composite_order: KeyOrder::FirstSeen,
            case_sensitive_terms: false,
            trim_lookup_values: true,
        }
    }
}

impl ExtractorConfig {
    /// Geography preset: composite values sorted before they reach a vocabulary
    pub fn geography() -> Self {
        Self {
            composite_order: KeyOrder::Sorted,
            ..Self::default()
        }
    }

    /// Strict preset: exact term matching and untrimmed lookups
    pub fn strict() -> Self {
        Self {
            case_sensitive_terms: true,
            trim_lookup_values: false,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
