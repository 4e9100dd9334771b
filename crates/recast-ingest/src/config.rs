//! JSON configuration loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use recast_model::RecastConfig;

/// Load and parse the mapping configuration.
pub fn load_config(path: &Path) -> Result<RecastConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read configuration: {}", path.display()))?;
    let config: RecastConfig = serde_json::from_str(&raw)
        .with_context(|| format!("parse configuration: {}", path.display()))?;
    debug!(
        path = %path.display(),
        mappings = config.mappings.len(),
        "loaded configuration"
    );
    Ok(config)
}
