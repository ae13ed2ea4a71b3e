//! Structured proposal document.
//!
//! The proposal is assembled by running a fixed list of section builders in
//! order, separating sections with page breaks, then attaching one running
//! footer for the whole document. Given the same dates, content, and
//! timestamp, assembly always yields the same document.

mod model;
mod sections;

#[cfg(test)]
mod tests;

pub use model::{
    Alignment, Block, Color, Document, DocumentProperties, Footer, OutlineEntry, Paragraph,
    ParagraphKind, Run, RunContent, RunStyle, Table, TableRow,
};
pub use sections::SectionContext;

use crate::content::ProposalContent;
use crate::dates::DatePair;
use crate::error::Result;
use chrono::{DateTime, FixedOffset};

/// Appends one section to the document.
pub type SectionBuilder = fn(&mut Document, &SectionContext<'_>) -> Result<()>;

/// Sections in emission order.
pub const SECTIONS: &[(&str, SectionBuilder)] = &[
    ("cover", sections::cover),
    ("overview", sections::overview),
    ("features", sections::features),
    ("phases", sections::phases),
    ("infrastructure", sections::infrastructure),
    ("pricing", sections::pricing),
    ("payment", sections::payment),
    ("signature", sections::signature),
];

/// Build the complete proposal in memory.
pub fn assemble(
    dates: &DatePair,
    content: &ProposalContent,
    generated_at: DateTime<FixedOffset>,
) -> Result<Document> {
    content.validate()?;

    let ctx = SectionContext::new(dates, content, generated_at.date_naive());
    let mut doc = Document::new(DocumentProperties {
        title: format!("{} - {}", content.title, content.client.name),
        subject: content.subtitle.clone(),
        author: content.vendor.name.clone(),
        created: generated_at,
    });

    for (index, &(name, build)) in SECTIONS.iter().enumerate() {
        doc.begin_section(name);
        build(&mut doc, &ctx)?;
        tracing::debug!(section = name, blocks = doc.blocks().len(), "section emitted");

        if index + 1 < SECTIONS.len() {
            doc.page_break();
        }
    }

    doc.set_footer(sections::footer(&ctx));
    Ok(doc)
}
