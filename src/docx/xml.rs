//! WordprocessingML parts.
//!
//! Every function here returns a complete XML part as a `String`. Nothing
//! reads the clock or the environment, so the same [`Document`] always
//! renders to the same bytes.

use chrono::Utc;

use crate::document::{
    Alignment, Block, Color, Document, Footer, Paragraph, ParagraphKind, Run, RunContent,
    RunStyle, Table, TableRow,
};

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_TYPE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// A4 text width in twips with 1 inch margins.
const TEXT_WIDTH_TWIPS: usize = 9026;
const PAGE_WIDTH_TWIPS: u32 = 11906;
const PAGE_HEIGHT_TWIPS: u32 = 16838;
const MARGIN_TWIPS: u32 = 1440;

/// Relationship id of the footer part in `document.xml.rels`.
pub const FOOTER_REL_ID: &str = "rId2";

/// Escape text for element content and attribute values.
///
/// Characters XML 1.0 cannot carry are dropped: C0 controls other than tab,
/// newline and carriage return, and the noncharacters U+FFFE and U+FFFF.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if c.is_control() && (c as u32) < 0x20 => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}

fn run_properties(style: &RunStyle) -> String {
    let mut props = String::new();
    if style.bold {
        props.push_str("<w:b/>");
    }
    if style.italic {
        props.push_str("<w:i/>");
    }
    if let Some(color) = style.color {
        props.push_str(&format!(r#"<w:color w:val="{}"/>"#, color.hex()));
    }
    if let Some(size) = style.size_pt {
        // Half-points.
        props.push_str(&format!(r#"<w:sz w:val="{}"/>"#, u32::from(size) * 2));
    }

    if props.is_empty() {
        props
    } else {
        format!("<w:rPr>{}</w:rPr>", props)
    }
}

fn run_xml(run: &Run) -> String {
    let props = run_properties(&run.style);
    match &run.content {
        RunContent::Text(text) => {
            let body = text
                .split('\n')
                .map(|line| format!(r#"<w:t xml:space="preserve">{}</w:t>"#, escape(line)))
                .collect::<Vec<_>>()
                .join("<w:br/>");
            format!("<w:r>{}{}</w:r>", props, body)
        }
        RunContent::PageNumber => format!(
            r#"<w:fldSimple w:instr=" PAGE "><w:r>{}<w:t>1</w:t></w:r></w:fldSimple>"#,
            props
        ),
    }
}

fn paragraph_style(kind: ParagraphKind) -> Option<&'static str> {
    match kind {
        ParagraphKind::Body => None,
        ParagraphKind::Title => Some("Title"),
        ParagraphKind::Subtitle => Some("Subtitle"),
        ParagraphKind::Bullet => Some("ListBullet"),
    }
}

fn justification(alignment: Alignment) -> Option<&'static str> {
    match alignment {
        Alignment::Left => None,
        Alignment::Center => Some("center"),
        Alignment::Right => Some("right"),
        Alignment::Justify => Some("both"),
    }
}

fn paragraph_xml(paragraph: &Paragraph) -> String {
    let mut props = String::new();
    if let Some(style) = paragraph_style(paragraph.kind) {
        props.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, style));
    }
    if let Some(points) = paragraph.space_after_pt {
        // Twentieths of a point.
        props.push_str(&format!(r#"<w:spacing w:after="{}"/>"#, u32::from(points) * 20));
    }
    if let Some(jc) = justification(paragraph.alignment) {
        props.push_str(&format!(r#"<w:jc w:val="{}"/>"#, jc));
    }

    let mut xml = String::from("<w:p>");
    if !props.is_empty() {
        xml.push_str(&format!("<w:pPr>{}</w:pPr>", props));
    }
    for run in &paragraph.runs {
        xml.push_str(&run_xml(run));
    }
    xml.push_str("</w:p>");
    xml
}

fn heading_xml(level: u8, text: &str) -> String {
    format!(
        r#"<w:p><w:pPr><w:pStyle w:val="Heading{}"/></w:pPr><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        level,
        escape(text)
    )
}

fn cell_xml(text: &str, width: usize, style: &RunStyle, fill: Option<Color>) -> String {
    let shading = fill
        .map(|c| format!(r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#, c.hex()))
        .unwrap_or_default();
    let paragraph = Paragraph::new().styled(text, *style);
    format!(
        r#"<w:tc><w:tcPr><w:tcW w:w="{}" w:type="dxa"/>{}</w:tcPr>{}</w:tc>"#,
        width,
        shading,
        paragraph_xml(&paragraph)
    )
}

fn row_xml(cells: &[String], width: usize, style: &RunStyle, header: bool) -> String {
    let mut xml = String::from("<w:tr>");
    if header {
        xml.push_str("<w:trPr><w:tblHeader/></w:trPr>");
    }
    let fill = header.then_some(Color::NAVY);
    for cell in cells {
        xml.push_str(&cell_xml(cell, width, style, fill));
    }
    xml.push_str("</w:tr>");
    xml
}

fn table_xml(table: &Table) -> String {
    let width = TEXT_WIDTH_TWIPS / table.columns();

    let mut xml = String::from(
        r#"<w:tbl><w:tblPr><w:tblStyle w:val="TableGrid"/><w:tblW w:w="5000" w:type="pct"/></w:tblPr><w:tblGrid>"#,
    );
    for _ in 0..table.columns() {
        xml.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, width));
    }
    xml.push_str("</w:tblGrid>");

    if let Some(header) = table.header() {
        let style = RunStyle::bold().with_color(Color::WHITE);
        xml.push_str(&row_xml(header, width, &style, true));
    }
    for TableRow { cells, emphasis } in table.rows() {
        let style = RunStyle {
            bold: *emphasis,
            ..RunStyle::default()
        };
        xml.push_str(&row_xml(cells, width, &style, false));
    }

    xml.push_str("</w:tbl>");
    // Word requires a paragraph between a table and whatever follows it.
    xml.push_str("<w:p/>");
    xml
}

fn block_xml(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => heading_xml(*level, text),
        Block::Paragraph(paragraph) => paragraph_xml(paragraph),
        Block::Table(table) => table_xml(table),
        Block::PageBreak => r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#.to_string(),
    }
}

/// `word/document.xml`.
pub fn document_xml(doc: &Document) -> String {
    let mut body = String::new();
    for block in doc.blocks() {
        body.push_str(&block_xml(block));
    }

    let footer_ref = if doc.footer().is_some() {
        format!(
            r#"<w:footerReference w:type="default" r:id="{}"/>"#,
            FOOTER_REL_ID
        )
    } else {
        String::new()
    };

    format!(
        r#"{decl}<w:document xmlns:w="{w}" xmlns:r="{r}"><w:body>{body}<w:sectPr>{footer_ref}<w:pgSz w:w="{pw}" w:h="{ph}"/><w:pgMar w:top="{m}" w:right="{m}" w:bottom="{m}" w:left="{m}" w:header="708" w:footer="708" w:gutter="0"/></w:sectPr></w:body></w:document>"#,
        decl = XML_DECL,
        w = W_NS,
        r = R_NS,
        body = body,
        footer_ref = footer_ref,
        pw = PAGE_WIDTH_TWIPS,
        ph = PAGE_HEIGHT_TWIPS,
        m = MARGIN_TWIPS,
    )
}

/// `word/footer1.xml`.
pub fn footer_xml(footer: &Footer) -> String {
    let body: String = footer.paragraphs.iter().map(paragraph_xml).collect();
    format!(
        r#"{}<w:ftr xmlns:w="{}" xmlns:r="{}">{}</w:ftr>"#,
        XML_DECL, W_NS, R_NS, body
    )
}

/// `word/styles.xml`: defaults plus the paragraph and table styles the
/// document references.
pub fn styles_xml() -> String {
    let navy = Color::NAVY.hex();
    let heading = |level: u8, half_points: u32| {
        format!(
            r#"<w:style w:type="paragraph" w:styleId="Heading{level}"><w:name w:val="heading {level}"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="240" w:after="120"/><w:outlineLvl w:val="{outline}"/></w:pPr><w:rPr><w:b/><w:color w:val="{navy}"/><w:sz w:val="{half_points}"/></w:rPr></w:style>"#,
            level = level,
            outline = level - 1,
            navy = navy,
            half_points = half_points,
        )
    };

    format!(
        concat!(
            r#"{decl}<w:styles xmlns:w="{w}">"#,
            r#"<w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/><w:sz w:val="22"/></w:rPr></w:rPrDefault>"#,
            r#"<w:pPrDefault><w:pPr><w:spacing w:after="120" w:line="264" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults>"#,
            r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#,
            r#"<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:rPr><w:b/><w:color w:val="{navy}"/><w:sz w:val="56"/></w:rPr></w:style>"#,
            r#"<w:style w:type="paragraph" w:styleId="Subtitle"><w:name w:val="Subtitle"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:rPr><w:i/><w:sz w:val="28"/></w:rPr></w:style>"#,
            "{h1}{h2}{h3}",
            r#"<w:style w:type="paragraph" w:styleId="ListBullet"><w:name w:val="List Bullet"/><w:basedOn w:val="Normal"/><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr><w:spacing w:after="60"/></w:pPr></w:style>"#,
            r#"<w:style w:type="table" w:default="1" w:styleId="TableNormal"><w:name w:val="Normal Table"/><w:tblPr><w:tblCellMar><w:left w:w="108" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar></w:tblPr></w:style>"#,
            r#"<w:style w:type="table" w:styleId="TableGrid"><w:name w:val="Table Grid"/><w:basedOn w:val="TableNormal"/><w:tblPr><w:tblBorders>"#,
            r#"<w:top w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:left w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
            r#"<w:bottom w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:right w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
            r#"<w:insideH w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:insideV w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
            r#"</w:tblBorders></w:tblPr></w:style>"#,
            r#"</w:styles>"#,
        ),
        decl = XML_DECL,
        w = W_NS,
        navy = navy,
        h1 = heading(1, 32),
        h2 = heading(2, 26),
        h3 = heading(3, 24),
    )
}

/// `word/numbering.xml`: a single bullet list definition used by `ListBullet`.
pub fn numbering_xml() -> String {
    format!(
        concat!(
            r#"{}<w:numbering xmlns:w="{}">"#,
            r#"<w:abstractNum w:abstractNumId="0"><w:multiLevelType w:val="singleLevel"/>"#,
            r#"<w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="&#8226;"/><w:lvlJc w:val="left"/>"#,
            r#"<w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl></w:abstractNum>"#,
            r#"<w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num></w:numbering>"#,
        ),
        XML_DECL, W_NS
    )
}

/// `docProps/core.xml`.
pub fn core_xml(doc: &Document) -> String {
    let props = &doc.properties;
    let created = props.created.with_timezone(&Utc).format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        concat!(
            r#"{decl}<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            r#"<dc:title>{title}</dc:title><dc:subject>{subject}</dc:subject><dc:creator>{author}</dc:creator>"#,
            r#"<cp:lastModifiedBy>{author}</cp:lastModifiedBy>"#,
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{created}</dcterms:created>"#,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{created}</dcterms:modified>"#,
            r#"</cp:coreProperties>"#,
        ),
        decl = XML_DECL,
        title = escape(&props.title),
        subject = escape(&props.subject),
        author = escape(&props.author),
        created = created,
    )
}

/// `docProps/app.xml`.
pub fn app_xml() -> String {
    format!(
        r#"{}<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties"><Application>{} {}</Application></Properties>"#,
        XML_DECL,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

/// `[Content_Types].xml`.
pub fn content_types_xml(has_footer: bool) -> String {
    let main = "application/vnd.openxmlformats-officedocument.wordprocessingml";
    let footer = if has_footer {
        format!(
            r#"<Override PartName="/word/footer1.xml" ContentType="{}.footer+xml"/>"#,
            main
        )
    } else {
        String::new()
    };
    format!(
        concat!(
            r#"{decl}<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            r#"<Override PartName="/word/document.xml" ContentType="{main}.document.main+xml"/>"#,
            r#"<Override PartName="/word/styles.xml" ContentType="{main}.styles+xml"/>"#,
            r#"<Override PartName="/word/numbering.xml" ContentType="{main}.numbering+xml"/>"#,
            "{footer}",
            r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
            r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#,
            r#"</Types>"#,
        ),
        decl = XML_DECL,
        main = main,
        footer = footer,
    )
}

fn relationship(id: &str, kind: &str, target: &str) -> String {
    format!(r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#, id, kind, target)
}

fn relationships(entries: &[String]) -> String {
    format!(
        r#"{}<Relationships xmlns="{}">{}</Relationships>"#,
        XML_DECL,
        REL_NS,
        entries.concat()
    )
}

/// `_rels/.rels`.
pub fn package_rels_xml() -> String {
    relationships(&[
        relationship("rId1", &format!("{}/officeDocument", REL_TYPE), "word/document.xml"),
        relationship(
            "rId2",
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
            "docProps/core.xml",
        ),
        relationship("rId3", &format!("{}/extended-properties", REL_TYPE), "docProps/app.xml"),
    ])
}

/// `word/_rels/document.xml.rels`.
pub fn document_rels_xml(has_footer: bool) -> String {
    let mut entries = vec![relationship(
        "rId1",
        &format!("{}/styles", REL_TYPE),
        "styles.xml",
    )];
    if has_footer {
        entries.push(relationship(
            FOOTER_REL_ID,
            &format!("{}/footer", REL_TYPE),
            "footer1.xml",
        ));
    }
    entries.push(relationship(
        "rId3",
        &format!("{}/numbering", REL_TYPE),
        "numbering.xml",
    ));
    relationships(&entries)
}
