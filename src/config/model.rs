//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for proposal generation.
///
/// This struct represents the optional `proposals.yaml` in the base directory.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Template pipeline
    // =========================================================================
    /// Templates processed by `proposal-gen templates`, in order.
    #[serde(default = "default_templates")]
    pub templates: Vec<TemplateSpec>,

    /// Suffix inserted before the extension of each generated file.
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// README written after every template batch.
    #[serde(default = "default_readme_path")]
    pub readme_path: String,

    // =========================================================================
    // Document pipeline
    // =========================================================================
    /// DOCX file written by `proposal-gen document`.
    #[serde(default = "default_document_output")]
    pub document_output: String,

    /// YAML file overriding the built-in proposal content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_file: Option<String>,

    // =========================================================================
    // Dates
    // =========================================================================
    /// Days between the issue date and the offer expiry.
    #[serde(default = "default_expiry_days")]
    pub expiry_days: u32,

    /// strftime pattern for both dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    // =========================================================================
    // Logging
    // =========================================================================
    /// Append run events to `.proposals/events.ndjson`.
    #[serde(default = "default_true")]
    pub event_log: bool,

    /// Base diagnostic level, raised by `-v`.
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates: default_templates(),
            output_suffix: default_output_suffix(),
            readme_path: default_readme_path(),
            document_output: default_document_output(),
            content_file: None,
            expiry_days: default_expiry_days(),
            date_format: default_date_format(),
            event_log: default_true(),
            log_level: LogLevel::default(),
        }
    }
}
