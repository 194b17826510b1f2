//! Package manifest reading, writing and section access
//!
//! A manifest is the parsed form of a `package.json`: an ordered JSON object.
//! Key order is preserved through parse and rewrite so the host file keeps
//! its original shape after merging.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{MergeError, Result, file_not_found};

/// The four `package.json` sections subject to merging
pub const DESIGNATED_SECTIONS: [&str; 4] = [
    "scripts",
    "dependencies",
    "devDependencies",
    "peerDependencies",
];

/// An ordered `package.json` document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest(pub Map<String, Value>);

impl Manifest {
    /// Read and parse a manifest file
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(file_not_found(path));
        }

        let content = fs::read_to_string(path).map_err(|e| MergeError::ManifestReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| MergeError::ManifestParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Parse a manifest from a JSON string. Rejects any document whose
    /// top level is not an object.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Contents of a named section, or an empty map when the section is
    /// absent or not an object
    pub fn section(&self, name: &str) -> Map<String, Value> {
        match self.0.get(name) {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        }
    }

    /// Serialize as pretty-printed JSON with a single trailing newline
    pub fn to_pretty_string(&self) -> serde_json::Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(&self.0)?))
    }

    /// Overwrite the file at `path` with this manifest
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self
            .to_pretty_string()
            .map_err(|e| MergeError::ManifestWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        fs::write(path, json).map_err(|e| MergeError::ManifestWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
