//! Tests for config functionality.

use crate::config::types::default_templates;
use crate::config::{Config, LogLevel};
use chrono::NaiveDate;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.templates.len(), 4);
    assert_eq!(config.output_suffix, "-generated");
    assert_eq!(config.readme_path, "demo/PROPOSALS_README.md");
    assert_eq!(
        config.document_output,
        "demo/Hisham_Traders_ERP_Proposal.docx"
    );
    assert!(config.content_file.is_none());
    assert_eq!(config.expiry_days, 30);
    assert_eq!(config.date_format, "%B %Y");
    assert!(config.event_log);
    assert_eq!(config.log_level, LogLevel::Warn);
    config.validate().unwrap();
}

#[test]
fn test_default_templates_match_demo_sources() {
    let templates = default_templates();
    let sources: Vec<_> = templates.iter().map(|t| t.source.as_str()).collect();

    assert_eq!(
        sources,
        vec![
            "demo/client-proposal-final.html",
            "demo/features-visual.html",
            "demo/formal-proposal.html",
            "demo/proposal-simplified.html",
        ]
    );
    assert_eq!(templates[3].placeholders.current, "November 2024");
    assert_eq!(templates[3].placeholders.expiry, "December 2024");
    assert_eq!(templates.iter().filter(|t| t.recommended).count(), 1);
}

#[test]
fn test_parse_empty_yaml_uses_defaults() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config.templates.len(), 4);
    assert_eq!(config.expiry_days, 30);
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
expiry_days: 45
output_suffix: "-final"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.expiry_days, 45);
    assert_eq!(config.output_suffix, "-final");

    // Unspecified values should use defaults
    assert_eq!(config.templates.len(), 4);
    assert_eq!(config.date_format, "%B %Y");
}

#[test]
fn test_parse_custom_templates() {
    let yaml = r#"
templates:
  - name: quote
    label: Quick Quote
    source: quotes/quote.html
    placeholders:
      current: "{{ISSUED}}"
      expiry: "{{EXPIRES}}"
log_level: debug
event_log: false
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.templates.len(), 1);
    let quote = &config.templates[0];
    assert_eq!(quote.label, "Quick Quote");
    assert_eq!(quote.placeholders.current, "{{ISSUED}}");
    assert!(quote.highlights.is_empty());
    assert!(!quote.recommended);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(!config.event_log);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
expiry_days: 14
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.expiry_days, 14);
}

#[test]
fn test_invalid_yaml_is_user_error() {
    let err = Config::from_yaml("expiry_days: [not a number").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_zero_expiry_days_rejected() {
    let err = Config::from_yaml("expiry_days: 0").unwrap_err();
    assert!(err.to_string().contains("expiry_days"));
}

#[test]
fn test_suffix_with_path_separator_rejected() {
    let err = Config::from_yaml("output_suffix: \"../escape\"").unwrap_err();
    assert!(err.to_string().contains("output_suffix"));
}

#[test]
fn test_bad_date_format_rejected() {
    let err = Config::from_yaml("date_format: \"%B %\"").unwrap_err();
    assert!(err.to_string().contains("date_format"));
}

#[test]
fn test_duplicate_template_names_rejected() {
    let yaml = r#"
templates:
  - name: same
    label: A
    source: a.html
    placeholders: { current: "January 2025", expiry: "February 2025" }
  - name: same
    label: B
    source: b.html
    placeholders: { current: "January 2025", expiry: "February 2025" }
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("duplicate template name 'same'"));
}

#[test]
fn test_identical_placeholders_rejected() {
    let yaml = r#"
templates:
  - name: broken
    label: Broken
    source: broken.html
    placeholders: { current: "January 2025", expiry: "January 2025" }
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("for both dates"));
}

#[test]
fn test_empty_placeholder_rejected() {
    let yaml = r#"
templates:
  - name: broken
    label: Broken
    source: broken.html
    placeholders: { current: "", expiry: "February 2025" }
"#;
    assert!(Config::from_yaml(yaml).is_err());
}

#[test]
fn test_load_or_default_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_or_default(temp_dir.path().join("proposals.yaml")).unwrap();
    assert_eq!(config.templates.len(), 4);
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("proposals.yaml");
    std::fs::write(&path, "expiry_days: 60\n").unwrap();

    let config = Config::load_or_default(&path).unwrap();
    assert_eq!(config.expiry_days, 60);
}

#[test]
fn test_roundtrip_yaml() {
    let mut config = Config::default();
    config.content_file = Some("content/custom.yaml".to_string());

    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();

    assert_eq!(parsed.templates, config.templates);
    assert_eq!(parsed.content_file, config.content_file);
}

#[test]
fn test_date_pair_uses_configured_offset() {
    let config = Config::from_yaml("expiry_days: 60").unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    let pair = config.date_pair(today).unwrap();
    assert_eq!(pair.current, "June 2025");
    assert_eq!(pair.expiry, "August 2025");
}

#[test]
fn test_log_level_raised_saturates() {
    assert_eq!(LogLevel::Warn.raised(0), LogLevel::Warn);
    assert_eq!(LogLevel::Warn.raised(1), LogLevel::Info);
    assert_eq!(LogLevel::Warn.raised(2), LogLevel::Debug);
    assert_eq!(LogLevel::Warn.raised(9), LogLevel::Trace);
    assert_eq!(LogLevel::Error.raised(1).as_directive(), "warn");
}
