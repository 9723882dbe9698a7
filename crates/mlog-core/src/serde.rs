//! Document encodings for catalogs, phase definitions and run configurations.

use std::fs;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::{ErrorInfo, MlogError};

/// Encoding of an on-disk document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Files with a `.json` extension.
    Json,
    /// Every other file, `.yaml` and `.yml` included.
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension, case-insensitively.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }

    /// Decodes `bytes` in this format.
    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T, MlogError> {
        match self {
            DocumentFormat::Json => serde_json::from_slice(bytes)
                .map_err(|err| MlogError::serde("json-deserialize", err)),
            DocumentFormat::Yaml => serde_yaml::from_slice(bytes)
                .map_err(|err| MlogError::serde("yaml-deserialize", err)),
        }
    }
}

/// Renders a value as YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, MlogError> {
    serde_yaml::to_string(value).map_err(|err| MlogError::serde("yaml-serialize", err))
}

/// Reads a document from disk, decoding it with [`DocumentFormat::for_path`].
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, MlogError> {
    let bytes = fs::read(path).map_err(|err| {
        MlogError::Serde(
            ErrorInfo::new("document-read", "failed to read document")
                .with_context("path", path.display().to_string())
                .with_hint(err.to_string()),
        )
    })?;
    DocumentFormat::for_path(path)
        .decode(&bytes)
        .map_err(|err| err.with_context("path", path.display().to_string()))
}
