//! Zip container for OOXML parts.

use crate::error::{ProposalError, Result};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// One named part of the package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub name: &'static str,
    pub xml: String,
}

impl Part {
    pub fn new(name: &'static str, xml: String) -> Self {
        Self { name, xml }
    }
}

/// Zip `parts` in the given order.
///
/// Every entry carries the same fixed timestamp so identical parts produce
/// identical archives.
pub fn write_package(parts: &[Part]) -> Result<Vec<u8>> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for part in parts {
        zip.start_file(part.name, options)
            .map_err(|e| package_error(part.name, e))?;
        zip.write_all(part.xml.as_bytes())
            .map_err(|e| package_error(part.name, e))?;
    }

    let cursor = zip
        .finish()
        .map_err(|e| ProposalError::WriteError(format!("failed to finish docx package: {}", e)))?;
    Ok(cursor.into_inner())
}

fn package_error(part: &str, err: impl std::fmt::Display) -> ProposalError {
    ProposalError::WriteError(format!("failed to add '{}' to docx package: {}", part, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn parts_keep_their_order_and_content() {
        let parts = vec![
            Part::new("[Content_Types].xml", "<Types/>".to_string()),
            Part::new("word/document.xml", "<w:document/>".to_string()),
        ];
        let bytes = write_package(&parts).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        assert_eq!(names.len(), 2);

        let first = archive.by_index(0).unwrap();
        assert_eq!(first.name(), "[Content_Types].xml");
        drop(first);

        let mut text = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "<w:document/>");
    }

    #[test]
    fn identical_parts_give_identical_bytes() {
        let parts = vec![Part::new("a.xml", "<a/>".to_string())];
        assert_eq!(write_package(&parts).unwrap(), write_package(&parts).unwrap());
    }
}
