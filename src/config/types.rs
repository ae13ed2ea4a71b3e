//! Configuration types and defaults for proposal-gen.
//!
//! This module defines the template descriptors, log level, and the default
//! value functions used by the Config struct.

use crate::dates::{DEFAULT_DATE_FORMAT, DEFAULT_EXPIRY_DAYS};
use serde::{Deserialize, Serialize};

/// Placeholder tokens a template uses for its two dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholders {
    /// Literal text replaced by the issue date.
    pub current: String,
    /// Literal text replaced by the expiry date.
    pub expiry: String,
}

impl Placeholders {
    pub fn new(current: &str, expiry: &str) -> Self {
        Self {
            current: current.to_string(),
            expiry: expiry.to_string(),
        }
    }
}

/// One markup template processed by the `templates` pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSpec {
    /// Short unique identifier (used in logs and events).
    pub name: String,

    /// Human-readable name printed in progress output and the README.
    pub label: String,

    /// Template path relative to the base directory.
    pub source: String,

    /// Date tokens to replace.
    pub placeholders: Placeholders,

    /// One-line purpose shown in the README.
    #[serde(default)]
    pub purpose: String,

    /// Bullet points shown in the README.
    #[serde(default)]
    pub highlights: Vec<String>,

    /// Audience line shown in the README.
    #[serde(default)]
    pub best_for: String,

    /// Marks the proposal to send by default.
    #[serde(default)]
    pub recommended: bool,
}

/// Diagnostic log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Raise the level by `steps` (one per `-v`), saturating at trace.
    pub fn raised(self, steps: u8) -> Self {
        let all = [
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ];
        let index = all.iter().position(|l| *l == self).unwrap_or(1);
        all[(index + usize::from(steps)).min(all.len() - 1)]
    }

    /// Directive string understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

// ============================================================================
// Default value functions
// ============================================================================

pub fn default_true() -> bool {
    true
}

pub fn default_output_suffix() -> String {
    "-generated".to_string()
}

pub fn default_readme_path() -> String {
    "demo/PROPOSALS_README.md".to_string()
}

pub fn default_document_output() -> String {
    "demo/Hisham_Traders_ERP_Proposal.docx".to_string()
}

pub fn default_expiry_days() -> u32 {
    DEFAULT_EXPIRY_DAYS
}

pub fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The four HTML proposals shipped in `demo/`.
pub fn default_templates() -> Vec<TemplateSpec> {
    vec![
        TemplateSpec {
            name: "client-final".to_string(),
            label: "Final Client Proposal".to_string(),
            source: "demo/client-proposal-final.html".to_string(),
            placeholders: Placeholders::new("January 2025", "February 2025"),
            purpose: "Clean, simple proposal showing the agreed pricing with discount".to_string(),
            highlights: strings(&[
                "4-page clean design",
                "Visual feature cards with icons",
                "Original price PKR 420K discounted to PKR 250K",
                "Clear payment terms breakdown",
            ]),
            best_for: "The current client".to_string(),
            recommended: true,
        },
        TemplateSpec {
            name: "features-visual".to_string(),
            label: "Visual Features Overview".to_string(),
            source: "demo/features-visual.html".to_string(),
            placeholders: Placeholders::new("January 2025", "February 2025"),
            purpose: "For non-English speaking clients or visual learners".to_string(),
            highlights: strings(&[
                "Icon-based feature presentation",
                "Minimal text, maximum visuals",
                "Easy to understand at a glance",
            ]),
            best_for: "Initial client meetings and non-technical stakeholders".to_string(),
            recommended: false,
        },
        TemplateSpec {
            name: "formal".to_string(),
            label: "Formal Business Proposal".to_string(),
            source: "demo/formal-proposal.html".to_string(),
            placeholders: Placeholders::new("January 2025", "February 2025"),
            purpose: "Professional business proposal document".to_string(),
            highlights: strings(&[
                "5-page structured format",
                "Executive summary and module descriptions",
                "Terms & conditions with signature section",
            ]),
            best_for: "Official submissions and contracts".to_string(),
            recommended: false,
        },
        TemplateSpec {
            name: "simplified".to_string(),
            label: "Simplified Proposal".to_string(),
            source: "demo/proposal-simplified.html".to_string(),
            placeholders: Placeholders::new("November 2024", "December 2024"),
            purpose: "Comprehensive but accessible proposal".to_string(),
            highlights: strings(&[
                "System overview with benefits",
                "Module-by-module breakdown",
                "Pricing with optional add-ons",
            ]),
            best_for: "Technical discussions and detailed feature reviews".to_string(),
            recommended: false,
        },
    ]
}
