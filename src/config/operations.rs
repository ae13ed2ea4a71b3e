//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::dates::{DatePair, validate_date_format};
use crate::error::{ProposalError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

static SUFFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+$").expect("suffix pattern is a valid regex")
});

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ProposalError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if it exists, otherwise use defaults.
    ///
    /// A config file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                ProposalError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ProposalError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `expiry_days` must be positive
    /// - `output_suffix` must be a plain filename fragment
    /// - `date_format` must be a renderable strftime pattern
    /// - template names are unique; sources and placeholder tokens are non-empty
    /// - a template's two placeholder tokens differ
    pub fn validate(&self) -> Result<()> {
        if self.expiry_days == 0 {
            return Err(invalid("expiry_days must be greater than 0"));
        }

        if !SUFFIX_PATTERN.is_match(&self.output_suffix) {
            return Err(invalid(&format!(
                "output_suffix '{}' may only contain letters, digits, '.', '_' and '-'",
                self.output_suffix
            )));
        }

        validate_date_format(&self.date_format)
            .map_err(|e| invalid(&format!("date_format: {}", e)))?;

        if self.document_output.trim().is_empty() {
            return Err(invalid("document_output must not be empty"));
        }
        if self.readme_path.trim().is_empty() {
            return Err(invalid("readme_path must not be empty"));
        }

        let mut names = HashSet::new();
        for template in &self.templates {
            if template.name.trim().is_empty() {
                return Err(invalid("template names must be non-empty"));
            }
            if !names.insert(template.name.as_str()) {
                return Err(invalid(&format!(
                    "duplicate template name '{}'",
                    template.name
                )));
            }
            if template.source.trim().is_empty() {
                return Err(invalid(&format!(
                    "template '{}' has an empty source path",
                    template.name
                )));
            }
            let tokens = &template.placeholders;
            if tokens.current.is_empty() || tokens.expiry.is_empty() {
                return Err(invalid(&format!(
                    "template '{}' has an empty placeholder token",
                    template.name
                )));
            }
            if tokens.current == tokens.expiry {
                return Err(invalid(&format!(
                    "template '{}' uses '{}' for both dates",
                    template.name, tokens.current
                )));
            }
        }

        Ok(())
    }

    /// Compute the date pair for `today` using the configured offset and format.
    pub fn date_pair(&self, today: NaiveDate) -> Result<DatePair> {
        DatePair::compute(today, self.expiry_days, &self.date_format)
    }
}

fn invalid(message: &str) -> ProposalError {
    ProposalError::UserError(format!("config validation failed: {}", message))
}
