//! DOCX serialization of a [`Document`].
//!
//! The package is built entirely in memory and then written with a single
//! atomic write, so a failed save never leaves a partial `.docx` behind.

mod package;
mod xml;


use crate::document::Document;
use crate::error::Result;
use crate::fs::atomic_write;
use package::{Part, write_package};
use std::path::Path;

/// Serialize `doc` into the bytes of a `.docx` file.
pub fn to_docx_bytes(doc: &Document) -> Result<Vec<u8>> {
    let footer = doc.footer();
    let has_footer = footer.is_some();

    let mut parts = vec![
        Part::new("[Content_Types].xml", xml::content_types_xml(has_footer)),
        Part::new("_rels/.rels", xml::package_rels_xml()),
        Part::new("docProps/core.xml", xml::core_xml(doc)),
        Part::new("docProps/app.xml", xml::app_xml()),
        Part::new("word/document.xml", xml::document_xml(doc)),
        Part::new("word/styles.xml", xml::styles_xml()),
        Part::new("word/numbering.xml", xml::numbering_xml()),
    ];
    if let Some(footer) = footer {
        parts.push(Part::new("word/footer1.xml", xml::footer_xml(footer)));
    }
    parts.push(Part::new(
        "word/_rels/document.xml.rels",
        xml::document_rels_xml(has_footer),
    ));

    write_package(&parts)
}

/// Serialize `doc` and write it to `path`.
pub fn save(doc: &Document, path: &Path) -> Result<()> {
    let bytes = to_docx_bytes(doc)?;
    atomic_write(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "saved docx");
    Ok(())
}
