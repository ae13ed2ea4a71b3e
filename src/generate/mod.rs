//! Template batch generation.
//!
//! Each configured template is read, its two date tokens are replaced, and the
//! result is written next to it with the configured suffix
//! (`formal-proposal.html` becomes `formal-proposal-generated.html`).
//!
//! Templates are independent: a missing source or an unwritable destination
//! fails that template only, and the batch moves on to the next one.

mod readme;


pub use readme::{README_TITLE, render_readme};

use crate::config::TemplateSpec;
use crate::context::ProposalContext;
use crate::dates::DatePair;
use crate::error::{ProposalError, Result};
use crate::fs::atomic_write_file;
use crate::template::{Replacement, substitute};
use std::io;
use std::path::{Path, PathBuf};

/// A successfully generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub output: PathBuf,
    /// Total occurrences replaced across both tokens.
    pub replaced: usize,
    /// Tokens that did not occur in the template.
    pub missing_tokens: Vec<String>,
}

/// Outcome of one template in a batch.
#[derive(Debug)]
pub struct TemplateOutcome {
    pub name: String,
    pub label: String,
    pub source: PathBuf,
    pub result: Result<GeneratedFile>,
}

/// Outcomes of a whole batch, in template order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<TemplateOutcome>,
}

impl BatchReport {
    /// Outcomes that produced a file, with the file.
    pub fn generated(&self) -> impl Iterator<Item = (&TemplateOutcome, &GeneratedFile)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|file| (o, file)))
    }

    /// Outcomes that failed, with their error.
    pub fn failures(&self) -> impl Iterator<Item = (&TemplateOutcome, &ProposalError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|err| (o, err)))
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Sibling output path: `suffix` goes between the file stem and the extension.
pub fn generated_path(source: &Path, suffix: &str) -> Result<PathBuf> {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            ProposalError::UserError(format!(
                "template path '{}' has no file name",
                source.display()
            ))
        })?;

    let file_name = match source.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext),
        None => format!("{}{}", stem, suffix),
    };

    Ok(source.with_file_name(file_name))
}

/// Read one template, substitute its dates, and write the generated file.
pub fn generate_one(
    ctx: &ProposalContext,
    spec: &TemplateSpec,
    suffix: &str,
    dates: &DatePair,
) -> Result<GeneratedFile> {
    let source = ctx.resolve_path(&spec.source);
    let content = read_template(&source)?;

    let replacements = [
        Replacement::new(&spec.placeholders.current, &dates.current),
        Replacement::new(&spec.placeholders.expiry, &dates.expiry),
    ];
    let substitution = substitute(&content, &replacements);

    let missing_tokens: Vec<String> = substitution
        .missing(&replacements)
        .into_iter()
        .map(str::to_string)
        .collect();
    for token in &missing_tokens {
        tracing::warn!(
            template = %spec.name,
            token = %token,
            "placeholder not found in template, left unchanged"
        );
    }
    tracing::debug!(
        template = %spec.name,
        counts = ?substitution.counts,
        "substituted placeholders"
    );

    let output = generated_path(&source, suffix)?;
    atomic_write_file(&output, &substitution.text)?;

    Ok(GeneratedFile {
        output,
        replaced: substitution.total(),
        missing_tokens,
    })
}

fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            ProposalError::InputNotFound(format!("template '{}' does not exist", path.display()))
        }
        _ => ProposalError::InputNotFound(format!(
            "failed to read template '{}': {}",
            path.display(),
            e
        )),
    })
}

/// Generate every template in order, reporting progress on stdout.
pub fn render_batch(
    ctx: &ProposalContext,
    templates: &[TemplateSpec],
    suffix: &str,
    dates: &DatePair,
) -> BatchReport {
    let mut report = BatchReport::default();

    for spec in templates {
        println!("Generating {}...", spec.label);

        let result = generate_one(ctx, spec, suffix, dates);
        match &result {
            Ok(file) => println!("[OK] {} created: {}", spec.label, file.output.display()),
            Err(e) => eprintln!("[ERROR] {}: {}", spec.label, e),
        }

        report.outcomes.push(TemplateOutcome {
            name: spec.name.clone(),
            label: spec.label.clone(),
            source: ctx.resolve_path(&spec.source),
            result,
        });
    }

    report
}
