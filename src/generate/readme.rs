//! README summarizing a template batch.

use super::BatchReport;
use crate::config::TemplateSpec;
use chrono::NaiveDateTime;

pub const README_TITLE: &str = "# Hisham Traders ERP - Proposal Documents";

/// Render the README for `report`.
///
/// Generated proposals are listed in batch order with their description from
/// `templates`; failures get their own section so a stale file is never
/// mistaken for a fresh one.
pub fn render_readme(
    report: &BatchReport,
    templates: &[TemplateSpec],
    generated_at: NaiveDateTime,
) -> String {
    let mut out = String::new();

    out.push_str(README_TITLE);
    out.push('\n');
    out.push_str(&format!(
        "Generated on: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push('\n');
    out.push_str("## Available Proposals\n\n");

    let mut listed = 0;
    for (outcome, file) in report.generated() {
        listed += 1;
        let file_name = file
            .output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let spec = templates.iter().find(|t| t.name == outcome.name);
        let star = if spec.is_some_and(|s| s.recommended) {
            " (RECOMMENDED)"
        } else {
            ""
        };

        out.push_str(&format!(
            "### {}. {} ({}){}\n",
            listed, outcome.label, file_name, star
        ));

        if let Some(spec) = spec {
            if !spec.purpose.is_empty() {
                out.push_str(&format!("**Purpose:** {}\n", spec.purpose));
            }
            if !spec.highlights.is_empty() {
                out.push_str("**Features:**\n");
                for highlight in &spec.highlights {
                    out.push_str(&format!("- {}\n", highlight));
                }
            }
            if !spec.best_for.is_empty() {
                out.push('\n');
                out.push_str(&format!("**Best For:** {}\n", spec.best_for));
            }
        }
        out.push_str("\n---\n\n");
    }

    if listed == 0 {
        out.push_str("No proposals were generated in this run.\n\n");
    }

    if !report.is_success() {
        out.push_str("## Failed to Generate\n\n");
        for (outcome, err) in report.failures() {
            out.push_str(&format!("- **{}**: {}\n", outcome.label, err));
        }
        out.push('\n');
    }

    out.push_str(USAGE);
    out
}

const USAGE: &str = "## How to Use

1. **Open any HTML file** in a web browser (Chrome, Firefox, Edge)
2. **Click \"Print\"** in the top-right corner
3. **Save as PDF** from the print dialog
4. Send the PDF to the client via email

## Regenerating Proposals

To generate fresh proposals with updated dates:

```bash
proposal-gen templates
```

Dates are recomputed on every run: the issue month is today and the expiry
month is `expiry_days` later (30 unless set in `proposals.yaml`).

---

## Contact Information

Update contact details in the HTML files before sending:
- Email: info@hishamtraders.com
- Client Name: [Update in each file]
";
