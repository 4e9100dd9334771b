pub mod config;
pub mod error;
pub mod quality;
pub mod table;

pub use config::{MappingEntry, RecastConfig, Settings, delimiter_byte};
pub use error::{ConfigError, Result};
pub use quality::{FindingKind, QualityFinding, QualityLog};
pub use table::{CellValue, Column, Table};

#[cfg(test)]
mod tests {
    use super::{FindingKind, QualityLog, RecastConfig};

    #[test]
    fn config_defaults_apply() {
        let config: RecastConfig = serde_json::from_str(
            r#"{"mappings": [{"source": "cust_name", "alias": "CUSTOMER_NAME"}]}"#,
        )
        .expect("parse config");
        assert_eq!(config.settings.input_delimiter, '\t');
        assert_eq!(config.settings.output_delimiter, '|');
        assert_eq!(config.mappings.len(), 1);
        assert!(config.mappings[0].transform.is_empty());
    }

    #[test]
    fn quality_log_dedupes_and_keeps_order() {
        let mut log = QualityLog::default();
        log.record("price", FindingKind::NonNumeric);
        log.record("status", FindingKind::NullOrBlank);
        log.record("price", FindingKind::NonNumeric);

        let findings = log.into_findings();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].column, "price");
        assert_eq!(findings[1].column, "status");
    }
}
