//! Implementation of the `proposal-gen templates` command.

use super::print_banner;
use crate::config::Config;
use crate::context::ProposalContext;
use crate::error::{ProposalError, Result};
use crate::events::{Event, EventAction, record};
use crate::fs::atomic_write_file;
use crate::generate::{BatchReport, render_batch, render_readme};
use chrono::{DateTime, FixedOffset};
use serde_json::json;
use std::path::Path;

/// Execute the `proposal-gen templates` command.
///
/// Steps:
/// 1. Compute the date pair from `now`
/// 2. Generate every configured template, continuing past failures
/// 3. Write the README indexing what was generated
/// 4. Fail with `GenerationFailed` if any output (README included) failed
pub fn cmd_templates(
    ctx: &ProposalContext,
    config: &Config,
    now: DateTime<FixedOffset>,
) -> Result<()> {
    let dates = config.date_pair(now.date_naive())?;

    println!();
    print_banner("Hisham Traders ERP - Proposal Generator");
    println!();
    println!("Current date: {}", dates.current);
    println!("Valid until:  {}", dates.expiry);
    println!();

    let report = render_batch(ctx, &config.templates, &config.output_suffix, &dates);
    record_outcomes(ctx, config, &report);

    let readme_path = ctx.resolve_path(&config.readme_path);
    let readme = render_readme(&report, &config.templates, now.naive_local());
    let readme_written = match atomic_write_file(&readme_path, &readme) {
        Ok(()) => {
            println!("[OK] README created: {}", readme_path.display());
            record(
                ctx,
                config,
                Event::new(EventAction::ReadmeWritten)
                    .with_artifact(artifact_name(ctx, &readme_path)),
            );
            true
        }
        Err(e) => {
            eprintln!("[ERROR] README: {}", e);
            false
        }
    };

    let total = report.outcomes.len() + 1;
    let failed = report.failed_count() + usize::from(!readme_written);

    println!();
    if failed == 0 {
        print_banner("SUCCESS! All proposals generated successfully");
        println!();
        println!("Generated Files:");
        for (i, (_, file)) in report.generated().enumerate() {
            println!("  {}. {}", i + 1, file_name(&file.output));
        }
        println!();
        print_banner("Next Steps:");
        println!("  1. Open the HTML files in a browser");
        println!("  2. Check client name and contact details");
        println!("  3. Print to PDF");
        println!("  4. Send to client");
        println!();
        println!("  See {} for detailed instructions", file_name(&readme_path));
        println!("{}", "=".repeat(60));
        println!();
        return Ok(());
    }

    print_banner(&format!("{} of {} outputs failed", failed, total));
    Err(ProposalError::GenerationFailed { failed, total })
}

fn record_outcomes(ctx: &ProposalContext, config: &Config, report: &BatchReport) {
    for outcome in &report.outcomes {
        let event = match &outcome.result {
            Ok(file) => Event::new(EventAction::TemplateRendered)
                .with_artifact(artifact_name(ctx, &file.output))
                .with_details(json!({
                    "template": outcome.name,
                    "replaced": file.replaced,
                    "missing_tokens": file.missing_tokens,
                })),
            Err(e) => Event::new(EventAction::TemplateFailed)
                .with_artifact(artifact_name(ctx, &outcome.source))
                .with_details(json!({
                    "template": outcome.name,
                    "error": e.to_string(),
                })),
        };
        record(ctx, config, event);
    }
}

/// Path relative to the base directory when possible.
pub(super) fn artifact_name(ctx: &ProposalContext, path: &Path) -> String {
    path.strip_prefix(&ctx.base_dir)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
