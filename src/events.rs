//! Run audit log for proposal-gen.
//!
//! Each generated (or failed) artifact appends one JSON object per line to
//! `.proposals/events.ndjson` under the base directory:
//! - `ts`: RFC3339 timestamp
//! - `action`: what happened (`template_rendered`, `document_saved`, ...)
//! - `actor`: `user@HOST`
//! - `artifact`: template name or output file, when there is one
//! - `details`: action-specific fields
//!
//! The log is best-effort. [`record`] reports an append failure as a warning
//! and never fails the run that produced the artifact.

use crate::config::Config;
use crate::context::ProposalContext;
use crate::error::{ProposalError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A template was substituted and its generated file written.
    TemplateRendered,
    /// A template could not be generated.
    TemplateFailed,
    /// The proposals README was written.
    ReadmeWritten,
    /// The DOCX proposal was saved.
    DocumentSaved,
    /// The DOCX proposal could not be built or saved.
    DocumentFailed,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::TemplateRendered => write!(f, "template_rendered"),
            EventAction::TemplateFailed => write!(f, "template_failed"),
            EventAction::ReadmeWritten => write!(f, "readme_written"),
            EventAction::DocumentSaved => write!(f, "document_saved"),
            EventAction::DocumentFailed => write!(f, "document_failed"),
        }
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub ts: DateTime<Utc>,
    pub action: EventAction,
    pub actor: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<String>,

    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            artifact: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_artifact(mut self, artifact: impl Into<String>) -> Self {
        self.artifact = Some(artifact.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            ProposalError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Path to the events file.
pub fn events_file_path(ctx: &ProposalContext) -> PathBuf {
    ctx.events_dir().join("events.ndjson")
}

/// Append an event to the events log, creating the file and directory.
pub fn append_event(ctx: &ProposalContext, event: &Event) -> Result<()> {
    let events_file = events_file_path(ctx);
    let json_line = event.to_ndjson_line()?;

    let events_dir = ctx.events_dir();
    if !events_dir.exists() {
        fs::create_dir_all(&events_dir).map_err(|e| {
            ProposalError::WriteError(format!(
                "failed to create events directory '{}': {}",
                events_dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            ProposalError::WriteError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        ProposalError::WriteError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}

/// Append `event` if the event log is enabled, downgrading failures to warnings.
pub fn record(ctx: &ProposalContext, config: &Config, event: Event) {
    if !config.event_log {
        return;
    }

    if let Err(e) = append_event(ctx, &event) {
        tracing::warn!(action = %event.action, error = %e, "could not append to event log");
    }
}
