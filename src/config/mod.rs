//! Configuration model for proposal-gen.
//!
//! This module defines the Config struct that represents `proposals.yaml`.
//! The file is optional; when present it supports forward-compatible YAML
//! parsing (unknown fields are ignored) and falls back to defaults for every
//! omitted field.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::{LogLevel, Placeholders, TemplateSpec};
