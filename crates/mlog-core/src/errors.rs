//! Structured error types shared across MLOG crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`MlogError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (type identifiers, attributes, indices).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the selection engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum MlogError {
    /// A requirement, pick or definition references an attribute, role or
    /// resource type absent from the data.
    #[error("schema mismatch: {0}")]
    SchemaMismatch(ErrorInfo),
    /// Every combination of a variant was pruned.
    #[error("no feasible combination: {0}")]
    NoFeasibleCombination(ErrorInfo),
    /// Port filtering emptied the catalog.
    #[error("no feasible port: {0}")]
    NoFeasiblePort(ErrorInfo),
    /// Invalid run configuration or builder input.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and document loading errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl MlogError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            MlogError::SchemaMismatch(info)
            | MlogError::NoFeasibleCombination(info)
            | MlogError::NoFeasiblePort(info)
            | MlogError::Config(info)
            | MlogError::Serde(info) => info,
        }
    }

    /// Adds a context entry to the payload, keeping the variant.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let info = match &mut self {
            MlogError::SchemaMismatch(info)
            | MlogError::NoFeasibleCombination(info)
            | MlogError::NoFeasiblePort(info)
            | MlogError::Config(info)
            | MlogError::Serde(info) => info,
        };
        info.context.insert(key.into(), value.into());
        self
    }

    /// Returns the stable machine readable code of the error.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Returns true for schema violations, the only failures that abort a
    /// phase's selection.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, MlogError::SchemaMismatch(_))
    }

    /// Shorthand for a [`MlogError::Config`] with the given code.
    pub fn config(code: &str, message: impl Into<String>) -> Self {
        MlogError::Config(ErrorInfo::new(code, message))
    }

    /// Shorthand for a [`MlogError::Serde`] wrapping a foreign error.
    pub fn serde(code: &str, err: impl ToString) -> Self {
        MlogError::Serde(ErrorInfo::new(code, err.to_string()))
    }
}
