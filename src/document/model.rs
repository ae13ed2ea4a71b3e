//! In-memory document model.
//!
//! A [`Document`] is an ordered list of blocks plus an optional running footer.
//! Blocks are only ever appended; order is the whole structure.

use crate::error::{ProposalError, Result};
use chrono::{DateTime, FixedOffset};

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const NAVY: Color = Color(0x1F, 0x4E, 0x79);
    pub const GREY: Color = Color(0x75, 0x75, 0x75);
    pub const GREEN: Color = Color(0x2E, 0x7D, 0x32);
    pub const RED: Color = Color(0xC6, 0x28, 0x28);
    pub const WHITE: Color = Color(0xFF, 0xFF, 0xFF);

    /// `RRGGBB` upper-case hex.
    pub fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStyle {
    pub bold: bool,
    pub italic: bool,
    pub color: Option<Color>,
    /// Font size in points.
    pub size_pt: Option<u16>,
}

impl RunStyle {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_size(mut self, size_pt: u16) -> Self {
        self.size_pt = Some(size_pt);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunContent {
    Text(String),
    /// The current page number, filled in by the word processor.
    PageNumber,
}

/// A styled span of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub content: RunContent,
    pub style: RunStyle,
}

impl Run {
    pub fn text(text: impl Into<String>) -> Self {
        Self::styled(text, RunStyle::default())
    }

    pub fn styled(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            content: RunContent::Text(text.into()),
            style,
        }
    }

    pub fn page_number(style: RunStyle) -> Self {
        Self {
            content: RunContent::PageNumber,
            style,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphKind {
    #[default]
    Body,
    Title,
    Subtitle,
    Bullet,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub kind: ParagraphKind,
    pub alignment: Alignment,
    pub runs: Vec<Run>,
    /// Extra space after the paragraph, in points.
    pub space_after_pt: Option<u16>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A body paragraph with a single unstyled run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().run(Run::text(text))
    }

    pub fn bullet(text: impl Into<String>) -> Self {
        Self {
            kind: ParagraphKind::Bullet,
            ..Self::text(text)
        }
    }

    pub fn kind(mut self, kind: ParagraphKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn space_after(mut self, points: u16) -> Self {
        self.space_after_pt = Some(points);
        self
    }

    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn styled(self, text: impl Into<String>, style: RunStyle) -> Self {
        self.run(Run::styled(text, style))
    }

    /// Concatenated text of all runs, page numbers rendered as `#`.
    pub fn plain_text(&self) -> String {
        self.runs
            .iter()
            .map(|run| match &run.content {
                RunContent::Text(text) => text.as_str(),
                RunContent::PageNumber => "#",
            })
            .collect()
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Rendered bold (totals).
    pub emphasis: bool,
}

/// A fixed-width grid of text cells.
///
/// The column count is fixed at construction; every row must match it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: usize,
    header: Option<Vec<String>>,
    rows: Vec<TableRow>,
}

impl Table {
    /// A table whose row 0 is `header`.
    pub fn with_header<S: AsRef<str>>(header: &[S]) -> Result<Self> {
        if header.is_empty() {
            return Err(ProposalError::Document(
                "table header must have at least one column".to_string(),
            ));
        }
        Ok(Self {
            columns: header.len(),
            header: Some(header.iter().map(|s| s.as_ref().to_string()).collect()),
            rows: Vec::new(),
        })
    }

    /// A table without a header row.
    pub fn headless(columns: usize) -> Result<Self> {
        if columns == 0 {
            return Err(ProposalError::Document(
                "table must have at least one column".to_string(),
            ));
        }
        Ok(Self {
            columns,
            header: None,
            rows: Vec::new(),
        })
    }

    pub fn push_row<I, S>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(cells, false)
    }

    /// Append a bold row, such as a total.
    pub fn push_total_row<I, S>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(cells, true)
    }

    fn push<I, S>(&mut self, cells: I, emphasis: bool) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        if cells.len() != self.columns {
            return Err(ProposalError::Document(format!(
                "table row has {} cells, expected {}",
                cells.len(),
                self.columns
            )));
        }
        self.rows.push(TableRow { cells, emphasis });
        Ok(())
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Body rows, excluding the header.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Total row count, including the header.
    pub fn row_count(&self) -> usize {
        self.rows.len() + usize::from(self.header.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(Paragraph),
    Table(Table),
    PageBreak,
}

/// Running footer repeated on every page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Footer {
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentProperties {
    pub title: String,
    pub subject: String,
    pub author: String,
    /// Run instant in local time, with its UTC offset.
    pub created: DateTime<FixedOffset>,
}

/// Structural skeleton of a document, free of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineEntry {
    Section(&'static str),
    Heading(u8),
    Paragraph,
    Table { rows: usize, columns: usize },
    PageBreak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub properties: DocumentProperties,
    blocks: Vec<Block>,
    sections: Vec<(&'static str, usize)>,
    footer: Option<Footer>,
}

impl Document {
    pub const MAX_HEADING_LEVEL: u8 = 3;

    pub fn new(properties: DocumentProperties) -> Self {
        Self {
            properties,
            blocks: Vec::new(),
            sections: Vec::new(),
            footer: None,
        }
    }

    /// Mark the start of a named section at the current position.
    pub fn begin_section(&mut self, name: &'static str) {
        self.sections.push((name, self.blocks.len()));
    }

    pub fn heading(&mut self, level: u8, text: impl Into<String>) -> Result<()> {
        if level == 0 || level > Self::MAX_HEADING_LEVEL {
            return Err(ProposalError::Document(format!(
                "heading level {} is outside 1..={}",
                level,
                Self::MAX_HEADING_LEVEL
            )));
        }
        self.blocks.push(Block::Heading {
            level,
            text: text.into(),
        });
        Ok(())
    }

    pub fn paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.paragraph(Paragraph::text(text));
    }

    pub fn bullets<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in items {
            self.paragraph(Paragraph::bullet(item));
        }
    }

    pub fn table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    pub fn page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    pub fn set_footer(&mut self, footer: Footer) {
        self.footer = Some(footer);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn footer(&self) -> Option<&Footer> {
        self.footer.as_ref()
    }

    /// Section names in emission order.
    pub fn section_names(&self) -> Vec<&'static str> {
        self.sections.iter().map(|(name, _)| *name).collect()
    }

    /// Section markers interleaved with block kinds, heading levels, and table sizes.
    pub fn outline(&self) -> Vec<OutlineEntry> {
        let mut outline = Vec::with_capacity(self.blocks.len() + self.sections.len());
        let mut sections = self.sections.iter().peekable();

        for (index, block) in self.blocks.iter().enumerate() {
            while let Some((name, _)) = sections.next_if(|(_, start)| *start == index) {
                outline.push(OutlineEntry::Section(*name));
            }
            outline.push(match block {
                Block::Heading { level, .. } => OutlineEntry::Heading(*level),
                Block::Paragraph(_) => OutlineEntry::Paragraph,
                Block::Table(table) => OutlineEntry::Table {
                    rows: table.row_count(),
                    columns: table.columns(),
                },
                Block::PageBreak => OutlineEntry::PageBreak,
            });
        }
        for (name, _) in sections {
            outline.push(OutlineEntry::Section(*name));
        }

        outline
    }
}
