//! Mapping configuration.
//!
//! Loaded from a JSON document of the shape:
//!
//! ```json
//! {
//!   "settings": { "input_delimiter": "\t", "output_delimiter": "|" },
//!   "mappings": [
//!     { "source": "cust_name", "alias": "CUSTOMER_NAME", "transform": ["TRIM", "UPPER"] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One configured output column: a source column, its output alias, and the
/// ordered operation tokens applied before projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingEntry {
    pub source: String,
    pub alias: String,
    #[serde(default)]
    pub transform: Vec<String>,
}

/// File-level settings. Both delimiters must be single ASCII characters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_input_delimiter")]
    pub input_delimiter: char,
    #[serde(default = "default_output_delimiter")]
    pub output_delimiter: char,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_delimiter: default_input_delimiter(),
            output_delimiter: default_output_delimiter(),
        }
    }
}

fn default_input_delimiter() -> char {
    '\t'
}

fn default_output_delimiter() -> char {
    '|'
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecastConfig {
    #[serde(default)]
    pub settings: Settings,
    pub mappings: Vec<MappingEntry>,
}

/// Narrow a configured delimiter to the single byte the CSV layer needs.
pub fn delimiter_byte(delimiter: char) -> Result<u8, ConfigError> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(ConfigError::NonAsciiDelimiter(delimiter))
    }
}

#[cfg(test)]
mod tests {
    use super::{RecastConfig, delimiter_byte};

    #[test]
    fn full_config_parses() {
        let config: RecastConfig = serde_json::from_str(
            r#"{
                "settings": {"input_delimiter": ",", "output_delimiter": ";"},
                "mappings": [
                    {"source": "phone", "alias": "PHONE", "transform": ["CLEAN_PHONE"]}
                ]
            }"#,
        )
        .expect("parse config");
        assert_eq!(config.settings.input_delimiter, ',');
        assert_eq!(config.settings.output_delimiter, ';');
        assert_eq!(config.mappings[0].transform, vec!["CLEAN_PHONE"]);
    }

    #[test]
    fn delimiter_must_be_ascii() {
        assert_eq!(delimiter_byte('\t').expect("ascii"), b'\t');
        assert!(delimiter_byte('§').is_err());
    }
}
