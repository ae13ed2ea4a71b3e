//! Section builders for the DOCX proposal.
//!
//! Every builder appends one self-contained section to the document. Builders
//! never look at what earlier sections emitted; the only shared inputs are the
//! dates and the content tables in [`SectionContext`].

use super::model::{Alignment, Color, Document, Footer, Paragraph, ParagraphKind, Run, RunStyle, Table};
use crate::content::{PricingSummary, ProposalContent, milestone_amounts};
use crate::dates::DatePair;
use crate::error::Result;
use chrono::NaiveDate;

/// Inputs shared by all section builders.
#[derive(Debug, Clone)]
pub struct SectionContext<'a> {
    pub dates: &'a DatePair,
    pub content: &'a ProposalContent,
    pub pricing: PricingSummary,
    pub generated_on: NaiveDate,
}

impl<'a> SectionContext<'a> {
    pub fn new(dates: &'a DatePair, content: &'a ProposalContent, generated_on: NaiveDate) -> Self {
        Self {
            dates,
            content,
            pricing: PricingSummary::from_pricing(&content.pricing),
            generated_on,
        }
    }

    /// Proposal reference, e.g. `HT-ERP-202506`.
    pub fn reference(&self) -> String {
        format!(
            "{}-{}",
            self.content.reference,
            self.generated_on.format("%Y%m")
        )
    }

    fn money(&self, amount: u64) -> String {
        self.content.pricing.format(amount)
    }
}

fn label_value(label: &str, value: &str) -> Paragraph {
    Paragraph::new()
        .align(Alignment::Center)
        .styled(format!("{}: ", label), RunStyle::bold().with_color(Color::NAVY))
        .styled(value, RunStyle::default().with_size(12))
}

fn spacer() -> Paragraph {
    Paragraph::new().space_after(24)
}

pub fn cover(doc: &mut Document, ctx: &SectionContext<'_>) -> Result<()> {
    let content = ctx.content;

    for _ in 0..4 {
        doc.paragraph(spacer());
    }
    doc.paragraph(
        Paragraph::new()
            .kind(ParagraphKind::Title)
            .align(Alignment::Center)
            .styled(&content.title, RunStyle::bold().with_color(Color::NAVY).with_size(32)),
    );
    if !content.subtitle.is_empty() {
        doc.paragraph(
            Paragraph::new()
                .kind(ParagraphKind::Subtitle)
                .align(Alignment::Center)
                .space_after(36)
                .styled(&content.subtitle, RunStyle::italic().with_color(Color::GREY).with_size(14)),
        );
    }

    doc.paragraph(label_value("Prepared for", &content.client.name));
    doc.paragraph(label_value("Prepared by", &content.vendor.name));
    doc.paragraph(label_value("Date", &ctx.dates.current));
    doc.paragraph(label_value("Valid until", &ctx.dates.expiry));
    doc.paragraph(label_value("Reference", &ctx.reference()));

    doc.paragraph(spacer());
    if !content.vendor.tagline.is_empty() {
        doc.paragraph(
            Paragraph::new()
                .align(Alignment::Center)
                .styled(&content.vendor.tagline, RunStyle::italic().with_color(Color::GREY)),
        );
    }
    Ok(())
}

pub fn overview(doc: &mut Document, ctx: &SectionContext<'_>) -> Result<()> {
    let overview = &ctx.content.overview;

    doc.heading(1, "1. Project Overview")?;
    for paragraph in &overview.paragraphs {
        doc.paragraph(Paragraph::text(paragraph).align(Alignment::Justify));
    }

    doc.heading(2, "Key Benefits")?;
    doc.bullets(overview.benefits.iter().map(String::as_str));
    Ok(())
}

pub fn features(doc: &mut Document, ctx: &SectionContext<'_>) -> Result<()> {
    let modules = &ctx.content.features;

    doc.heading(1, "2. System Features")?;
    doc.text(format!(
        "The system is made up of {} integrated modules sharing one database.",
        modules.len()
    ));

    for (i, module) in modules.iter().enumerate() {
        doc.heading(2, format!("2.{} {}", i + 1, module.name))?;
        doc.paragraph(Paragraph::new().styled(&module.description, RunStyle::italic()));
        doc.bullets(module.highlights.iter().map(String::as_str));
    }
    Ok(())
}

pub fn phases(doc: &mut Document, ctx: &SectionContext<'_>) -> Result<()> {
    let content = ctx.content;

    doc.heading(1, "3. Implementation Plan")?;
    doc.text(format!(
        "Delivery is split into {} phases over {} weeks. Each phase ends with a \
         review before the next one starts.",
        content.phases.len(),
        content.total_weeks()
    ));

    let mut table = Table::with_header(&["Phase", "Duration", "Key Deliverables"])?;
    for (i, phase) in content.phases.iter().enumerate() {
        table.push_row([
            format!("Phase {}: {}", i + 1, phase.name),
            weeks(phase.weeks),
            phase.deliverables.join("; "),
        ])?;
    }
    table.push_total_row([
        "Total".to_string(),
        weeks(content.total_weeks()),
        String::new(),
    ])?;
    doc.table(table);
    Ok(())
}

fn weeks(n: u32) -> String {
    if n == 1 {
        "1 week".to_string()
    } else {
        format!("{} weeks", n)
    }
}

pub fn infrastructure(doc: &mut Document, ctx: &SectionContext<'_>) -> Result<()> {
    let infra = &ctx.content.infrastructure;

    doc.heading(1, "4. Infrastructure & Hosting")?;
    doc.text(&infra.intro);

    let mut table = Table::with_header(&["Component", "Specification", "Notes"])?;
    for item in &infra.items {
        table.push_row([
            item.component.as_str(),
            item.specification.as_str(),
            item.notes.as_str(),
        ])?;
    }
    doc.table(table);

    if !infra.notes.is_empty() {
        doc.heading(2, "Notes")?;
        doc.bullets(infra.notes.iter().map(String::as_str));
    }
    Ok(())
}

pub fn pricing(doc: &mut Document, ctx: &SectionContext<'_>) -> Result<()> {
    let pricing = &ctx.content.pricing;
    let summary = ctx.pricing;

    doc.heading(1, "5. Investment")?;

    doc.heading(2, "5.1 Module Pricing")?;
    let mut table = Table::with_header(&["Item", "Description", "Amount"])?;
    for line in &pricing.lines {
        table.push_row([
            line.item.clone(),
            line.description.clone(),
            ctx.money(line.amount),
        ])?;
    }
    table.push_total_row([
        "Total".to_string(),
        "Original price".to_string(),
        ctx.money(summary.subtotal),
    ])?;
    doc.table(table);

    doc.heading(2, "5.2 Special Offer")?;
    let discount_label = if pricing.discount_note.is_empty() {
        "Discount".to_string()
    } else {
        format!("Discount ({})", pricing.discount_note)
    };
    let mut offer = Table::with_header(&["Description", "Amount"])?;
    offer.push_row(["Original Price".to_string(), ctx.money(summary.subtotal)])?;
    offer.push_row([discount_label, format!("- {}", ctx.money(summary.discount))])?;
    offer.push_total_row(["Final Price".to_string(), ctx.money(summary.final_price)])?;
    doc.table(offer);
    doc.paragraph(
        Paragraph::new().styled(
            format!(
                "You save {} ({}% off the original price).",
                ctx.money(summary.discount),
                summary.saved_percent
            ),
            RunStyle::bold().with_color(Color::GREEN),
        ),
    );

    doc.heading(2, "5.3 Optional Add-ons")?;
    if pricing.add_ons.is_empty() {
        doc.text("No optional add-ons are offered with this proposal.");
    } else {
        let mut add_ons = Table::with_header(&["Add-on", "Description", "Amount"])?;
        for line in &pricing.add_ons {
            add_ons.push_row([
                line.item.clone(),
                line.description.clone(),
                ctx.money(line.amount),
            ])?;
        }
        doc.table(add_ons);
        doc.paragraph(Paragraph::new().styled(
            "Add-ons are not included in the final price above.",
            RunStyle::italic().with_color(Color::GREY),
        ));
    }
    Ok(())
}

pub fn payment(doc: &mut Document, ctx: &SectionContext<'_>) -> Result<()> {
    let payment = &ctx.content.payment;
    let total = ctx.pricing.final_price;
    let amounts = milestone_amounts(total, &payment.milestones);

    doc.heading(1, "6. Payment Schedule")?;

    let mut table = Table::with_header(&["Milestone", "Share", "Amount", "Due"])?;
    for (milestone, amount) in payment.milestones.iter().zip(amounts) {
        table.push_row([
            milestone.name.clone(),
            format!("{}%", milestone.percent),
            ctx.money(amount),
            milestone.due.clone(),
        ])?;
    }
    table.push_total_row([
        "Total".to_string(),
        "100%".to_string(),
        ctx.money(total),
        String::new(),
    ])?;
    doc.table(table);

    if !payment.terms.is_empty() {
        doc.heading(2, "Payment Terms")?;
        doc.bullets(payment.terms.iter().map(String::as_str));
    }

    doc.paragraph(
        Paragraph::new()
            .styled("This offer is valid until ", RunStyle::default())
            .styled(&ctx.dates.expiry, RunStyle::bold().with_color(Color::RED))
            .styled(".", RunStyle::default()),
    );
    Ok(())
}

pub fn signature(doc: &mut Document, ctx: &SectionContext<'_>) -> Result<()> {
    let signature = &ctx.content.signature;

    doc.heading(1, "7. Acceptance")?;
    doc.paragraph(Paragraph::text(&signature.statement).space_after(18));

    let header: Vec<String> = signature
        .parties
        .iter()
        .map(|party| format!("For {}", party))
        .collect();
    let mut table = Table::with_header(&header[..])?;
    for field in &signature.fields {
        let cell = format!("{}: ______________________", field);
        table.push_row(std::iter::repeat_n(cell, header.len()))?;
    }
    doc.table(table);
    Ok(())
}

/// Running footer: vendor, title, optional note, and page number.
pub fn footer(ctx: &SectionContext<'_>) -> Footer {
    let content = ctx.content;
    let style = RunStyle::default().with_color(Color::GREY).with_size(8);

    let mut text = format!("{} | {}", content.vendor.name, content.title);
    if !content.footer.is_empty() {
        text.push_str(" | ");
        text.push_str(&content.footer);
    }
    text.push_str(" | Page ");

    Footer {
        paragraphs: vec![
            Paragraph::new()
                .align(Alignment::Center)
                .styled(text, style)
                .run(Run::page_number(style)),
        ],
    }
}
