//! Implementation of the `proposal-gen document` command.

use super::print_banner;
use super::templates::artifact_name;
use crate::config::Config;
use crate::content::ProposalContent;
use crate::context::ProposalContext;
use crate::dates::DatePair;
use crate::document::{Document, assemble};
use crate::error::Result;
use crate::events::{Event, EventAction, record};
use chrono::{DateTime, FixedOffset};
use serde_json::json;
use std::path::Path;

/// Execute the `proposal-gen document` command.
///
/// Checks that a DOCX writer is compiled in before doing any work, then
/// assembles the proposal in memory and saves it in one write. A failed build
/// or save is fatal and recorded as `document_failed`; nothing partial is
/// left at the output path.
pub fn cmd_document(
    ctx: &ProposalContext,
    config: &Config,
    now: DateTime<FixedOffset>,
) -> Result<()> {
    ensure_writer_available()?;

    let dates = config.date_pair(now.date_naive())?;
    let output = ctx.resolve_path(&config.document_output);
    let artifact = artifact_name(ctx, &output);

    let doc = match build_and_write(ctx, config, &dates, now, &output) {
        Ok(doc) => doc,
        Err(e) => {
            record(
                ctx,
                config,
                Event::new(EventAction::DocumentFailed)
                    .with_artifact(artifact)
                    .with_details(json!({ "error": e.to_string() })),
            );
            return Err(e);
        }
    };

    record(
        ctx,
        config,
        Event::new(EventAction::DocumentSaved)
            .with_artifact(artifact)
            .with_details(json!({
                "sections": doc.section_names(),
                "blocks": doc.blocks().len(),
                "valid_until": dates.expiry,
            })),
    );

    println!("[OK] Proposal document created: {}", output.display());
    println!();
    Ok(())
}

fn build_and_write(
    ctx: &ProposalContext,
    config: &Config,
    dates: &DatePair,
    now: DateTime<FixedOffset>,
    output: &Path,
) -> Result<Document> {
    let content = load_content(ctx, config)?;

    println!();
    print_banner("Hisham Traders ERP - Proposal Document");
    println!();
    println!("Client:       {}", content.client.name);
    println!("Current date: {}", dates.current);
    println!("Valid until:  {}", dates.expiry);
    println!();

    let doc = assemble(dates, &content, now)?;
    write_document(&doc, output)?;
    Ok(doc)
}

/// The configured content file, or the built-in content.
fn load_content(ctx: &ProposalContext, config: &Config) -> Result<ProposalContent> {
    match &config.content_file {
        Some(path) => {
            let path = ctx.resolve_path(path);
            tracing::info!(path = %path.display(), "loading proposal content");
            ProposalContent::load(path)
        }
        None => ProposalContent::embedded(),
    }
}

#[cfg(feature = "docx")]
fn ensure_writer_available() -> Result<()> {
    Ok(())
}

#[cfg(not(feature = "docx"))]
fn ensure_writer_available() -> Result<()> {
    Err(crate::error::ProposalError::DependencyMissing(
        "this build has no DOCX writer; reinstall with `cargo install --features docx`"
            .to_string(),
    ))
}

#[cfg(feature = "docx")]
fn write_document(doc: &Document, path: &Path) -> Result<()> {
    crate::docx::save(doc, path)
}

#[cfg(not(feature = "docx"))]
fn write_document(_doc: &Document, _path: &Path) -> Result<()> {
    ensure_writer_available()
}
