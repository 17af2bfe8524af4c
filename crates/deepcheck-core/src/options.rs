//! Comparison options.
//!
//! Options are plain data with sensible defaults; they can be loaded from a
//! TOML document such as:
//!
//! ```toml
//! max_depth = 64
//! date_format = "%Y-%m-%d"
//! ```

use crate::errors::{ExError, ExErrorKind, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum nesting depth below the root before a walk is cut off.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Largest accepted `max_depth`. The walk also caps unvalidated options here.
pub const MAX_ALLOWED_DEPTH: usize = 10_000;

/// Month/day/year, no zero padding.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareOptions {
    /// Values nested more than this many levels below the root are not walked
    pub max_depth: usize,
    /// strftime pattern for dates in messages (rendered in UTC)
    pub date_format: String,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl CompareOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Check option values.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig`: `max_depth` is zero or above [`MAX_ALLOWED_DEPTH`],
    ///   or `date_format` is empty or not a valid strftime pattern
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(invalid_config("max_depth must be at least 1"));
        }
        if self.max_depth > MAX_ALLOWED_DEPTH {
            return Err(invalid_config(format!(
                "max_depth must be at most {}, got {}",
                MAX_ALLOWED_DEPTH, self.max_depth
            )));
        }
        if self.date_format.is_empty() {
            return Err(invalid_config("date_format must not be empty"));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(invalid_config(format!(
                "date_format is not a valid strftime pattern: {}",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Parse and validate options from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: CompareOptions = toml::from_str(content)
            .map_err(|e| invalid_config(format!("TOML parse error: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Read, parse and validate options from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("load_options")
                .with_path(path.display().to_string())
                .with_message(format!("Failed to read options file: {}", e))
        })?;
        Self::from_toml_str(&content).map_err(|e| e.with_path(path.display().to_string()))
    }
}

fn invalid_config(reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidConfig)
        .with_op("load_options")
        .with_message(reason)
}
