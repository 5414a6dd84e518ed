//! Error handling for the musclestore crates.
//!
//! Library crates report their own failures as [`MusclestoreError`]: a message,
//! a coarse [`ErrorCategory`], and optional key/value context. Binaries wrap
//! these in `anyhow` at the edge.

use std::fmt;

/// Coarse classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Input text did not match an accepted format.
    Parse,
    /// A value was well-formed but out of range.
    Validation,
    Config,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorCategory::Parse => "parse",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Config => "config",
        })
    }
}

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A categorized failure with the inputs that caused it.
#[derive(Debug)]
pub struct MusclestoreError {
    message: String,
    category: ErrorCategory,
    source: Option<BoxedSource>,
    context: Vec<(String, String)>,
}

impl MusclestoreError {
    pub fn new(message: impl Into<String>, category: ErrorCategory) -> Self {
        Self {
            message: message.into(),
            category,
            source: None,
            context: Vec::new(),
        }
    }

    /// Attach the lower-level error this one wraps.
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// First context value recorded under `key`.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_parse_error(&self) -> bool {
        self.category == ErrorCategory::Parse
    }

    pub fn is_validation_error(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    pub fn is_config_error(&self) -> bool {
        self.category == ErrorCategory::Config
    }
}

impl fmt::Display for MusclestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)?;

        if let Some((first, rest)) = self.context.split_first() {
            write!(f, " ({}={}", first.0, first.1)?;
            for (key, value) in rest {
                write!(f, ", {key}={value}")?;
            }
            f.write_str(")")?;
        }

        match &self.source {
            Some(source) => write!(f, "\nCaused by: {source}"),
            None => Ok(()),
        }
    }
}

impl std::error::Error for MusclestoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

pub type Result<T> = std::result::Result<T, MusclestoreError>;

pub fn parse_error(message: impl Into<String>) -> MusclestoreError {
    MusclestoreError::new(message, ErrorCategory::Parse)
}

pub fn validation_error(message: impl Into<String>) -> MusclestoreError {
    MusclestoreError::new(message, ErrorCategory::Validation)
}

pub fn config_error(message: impl Into<String>) -> MusclestoreError {
    MusclestoreError::new(message, ErrorCategory::Config)
}
