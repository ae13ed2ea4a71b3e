//! Tests for proposal assembly.

use super::*;
use crate::error::ProposalError;
use chrono::{NaiveDate, TimeZone};

fn at(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(y, m, d, 11, 0, 0)
        .unwrap()
}

fn build(now: DateTime<FixedOffset>) -> Document {
    let dates = DatePair::for_today(now.date_naive()).unwrap();
    let content = ProposalContent::embedded().unwrap();
    assemble(&dates, &content, now).unwrap()
}

fn tables(doc: &Document) -> Vec<&Table> {
    doc.blocks()
        .iter()
        .filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
        .collect()
}

fn all_text(doc: &Document) -> String {
    let mut text = String::new();
    for block in doc.blocks() {
        match block {
            Block::Heading { text: heading, .. } => text.push_str(heading),
            Block::Paragraph(p) => text.push_str(&p.plain_text()),
            Block::Table(t) => {
                for row in t.header().into_iter().chain(t.rows().iter().map(|r| &r.cells[..])) {
                    text.push_str(&row.join("|"));
                }
            }
            Block::PageBreak => {}
        }
        text.push('\n');
    }
    text
}

#[test]
fn sections_are_emitted_in_fixed_order() {
    let doc = build(at(2025, 6, 15));
    let expected: Vec<&str> = SECTIONS.iter().map(|(name, _)| *name).collect();

    assert_eq!(doc.section_names(), expected);
    assert_eq!(
        expected,
        vec![
            "cover",
            "overview",
            "features",
            "phases",
            "infrastructure",
            "pricing",
            "payment",
            "signature"
        ]
    );
}

#[test]
fn page_break_after_every_section_but_the_last() {
    let doc = build(at(2025, 6, 15));
    let outline = doc.outline();

    let breaks = outline
        .iter()
        .filter(|e| **e == OutlineEntry::PageBreak)
        .count();
    assert_eq!(breaks, SECTIONS.len() - 1);

    // Every section after the first starts right after a page break.
    for (i, entry) in outline.iter().enumerate() {
        if let OutlineEntry::Section(name) = entry
            && *name != "cover"
        {
            assert_eq!(outline[i - 1], OutlineEntry::PageBreak, "before {}", name);
        }
    }

    assert!(matches!(doc.blocks().last(), Some(Block::Table(_))));
}

#[test]
fn same_instant_yields_identical_document() {
    assert_eq!(build(at(2025, 6, 15)), build(at(2025, 6, 15)));
}

#[test]
fn structure_does_not_depend_on_the_date() {
    let june = build(at(2025, 6, 15));
    let december = build(at(2025, 12, 20));

    assert_eq!(june.outline(), december.outline());
    assert_ne!(june, december);
}

#[test]
fn cover_carries_the_computed_dates() {
    let text = all_text(&build(at(2025, 12, 20)));

    assert!(text.contains("Date: December 2025"));
    assert!(text.contains("Valid until: January 2026"));
    assert!(text.contains("Reference: HT-ERP-202512"));
    assert!(text.contains("This offer is valid until January 2026."));
}

#[test]
fn heading_levels_stay_within_bounds() {
    let doc = build(at(2025, 6, 15));
    let levels: Vec<u8> = doc
        .outline()
        .into_iter()
        .filter_map(|e| match e {
            OutlineEntry::Heading(level) => Some(level),
            _ => None,
        })
        .collect();

    assert!(levels.iter().all(|l| (1..=3).contains(l)));
    assert_eq!(levels.iter().filter(|l| **l == 1).count(), 7);
}

#[test]
fn pricing_tables_have_expected_dimensions_and_totals() {
    let doc = build(at(2025, 6, 15));
    let tables = tables(&doc);

    // phases, infrastructure, module pricing, offer, add-ons, payment, signature
    assert_eq!(tables.len(), 7);

    let module_pricing = tables[2];
    assert_eq!((module_pricing.row_count(), module_pricing.columns()), (9, 3));
    let total = module_pricing.rows().last().unwrap();
    assert!(total.emphasis);
    assert_eq!(total.cells[2], "PKR 420,000");

    let offer = tables[3];
    assert_eq!(offer.rows()[1].cells[1], "- PKR 170,000");
    assert_eq!(offer.rows()[2].cells[1], "PKR 250,000");
}

#[test]
fn payment_schedule_splits_final_price() {
    let doc = build(at(2025, 6, 15));
    let payment = tables(&doc)[5];

    assert_eq!(payment.header().unwrap(), ["Milestone", "Share", "Amount", "Due"]);
    let amounts: Vec<&str> = payment.rows().iter().map(|r| r.cells[2].as_str()).collect();
    assert_eq!(
        amounts,
        vec!["PKR 100,000", "PKR 75,000", "PKR 75,000", "PKR 250,000"]
    );
}

#[test]
fn signature_block_has_one_column_per_party() {
    let doc = build(at(2025, 6, 15));
    let signature = *tables(&doc).last().unwrap();

    assert_eq!(signature.columns(), 2);
    assert_eq!(signature.row_count(), 5);
    assert_eq!(signature.header().unwrap()[0], "For Hisham Traders");
    assert!(signature.rows()[0].cells[1].starts_with("Signature: "));
}

#[test]
fn phases_table_totals_weeks() {
    let doc = build(at(2025, 6, 15));
    let phases = tables(&doc)[0];

    assert_eq!(phases.rows()[0].cells[0], "Phase 1: Discovery & Setup");
    assert_eq!(phases.rows().last().unwrap().cells[1], "12 weeks");
}

#[test]
fn footer_is_attached_once_with_page_number() {
    let doc = build(at(2025, 6, 15));
    let footer = doc.footer().unwrap();

    assert_eq!(footer.paragraphs.len(), 1);
    let paragraph = &footer.paragraphs[0];
    assert!(
        paragraph
            .runs
            .iter()
            .any(|r| r.content == RunContent::PageNumber)
    );
    assert_eq!(
        paragraph.plain_text(),
        "Hisham Traders Technology Solutions | ERP System Proposal | Confidential | Page #"
    );
}

#[test]
fn empty_add_ons_still_emit_the_heading() {
    let dates = DatePair::for_today(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()).unwrap();
    let mut content = ProposalContent::embedded().unwrap();
    content.pricing.add_ons.clear();

    let doc = assemble(&dates, &content, at(2025, 6, 15)).unwrap();

    assert_eq!(tables(&doc).len(), 6);
    assert!(all_text(&doc).contains("5.3 Optional Add-ons"));
}

#[test]
fn invalid_content_is_rejected_before_assembly() {
    let dates = DatePair::for_today(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()).unwrap();
    let mut content = ProposalContent::embedded().unwrap();
    content.payment.milestones.pop();

    let err = assemble(&dates, &content, at(2025, 6, 15)).unwrap_err();
    assert!(matches!(err, ProposalError::UserError(_)));
}

#[test]
fn document_properties_come_from_content() {
    let doc = build(at(2025, 6, 15));

    assert_eq!(doc.properties.title, "ERP System Proposal - Hisham Traders");
    assert_eq!(doc.properties.author, "Hisham Traders Technology Solutions");
    assert_eq!(doc.properties.created, at(2025, 6, 15));
}

#[test]
fn oversized_price_is_rejected_instead_of_panicking() {
    let dates = DatePair::for_today(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()).unwrap();
    let mut content = ProposalContent::embedded().unwrap();
    content.pricing.lines.truncate(1);
    content.pricing.lines[0].amount = 1_000_000_000_000_000_000;
    content.pricing.discount = 0;

    let err = assemble(&dates, &content, at(2025, 6, 15)).unwrap_err();
    assert!(matches!(err, ProposalError::UserError(_)));
}
