// SPDX-License-Identifier: PMPL-1.0-or-later

//! Edge-record loading from JSON or YAML files.

use crate::error::{Result, SiegeError};
use crate::graph::EdgeRecord;
use std::fs;
use std::path::Path;

/// Load a flat list of edge records. Extension-based dispatch is explicit
/// to avoid ambiguous parsing behavior.
pub fn load_records(path: &Path) -> Result<Vec<EdgeRecord>> {
    let content = fs::read_to_string(path)
        .map_err(|e| SiegeError::Dataset(format!("reading {}: {}", path.display(), e)))?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| SiegeError::Dataset(format!("parsing json {}: {}", path.display(), e))),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .map_err(|e| SiegeError::Dataset(format!("parsing yaml {}: {}", path.display(), e))),
        _ => Err(SiegeError::Dataset(format!(
            "unsupported dataset extension for {}",
            path.display()
        ))),
    }
}
