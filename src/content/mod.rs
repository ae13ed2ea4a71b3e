//! Proposal content tables.
//!
//! The wording of the DOCX proposal (client, modules, phases, pricing,
//! milestones) is data, kept in a YAML file rather than in the section
//! builders. A default file is compiled in; `content_file` in
//! `proposals.yaml` replaces it.

mod money;

pub use money::{PricingSummary, format_amount, milestone_amounts};

use crate::error::{ProposalError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted amount, for single lines and for the subtotal.
///
/// Keeps every percentage product (`amount * 100`) within `u64`.
pub const MAX_AMOUNT: u64 = 1_000_000_000_000_000;

/// Content compiled into the binary.
const EMBEDDED_CONTENT: &str = include_str!("../../content/proposal.yaml");

/// A named organization on the proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureModule {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub weeks: u32,
    pub deliverables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfraItem {
    pub component: String,
    pub specification: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infrastructure {
    pub intro: String,
    pub items: Vec<InfraItem>,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// One priced row. Amounts are whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLine {
    pub item: String,
    pub description: String,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    pub currency: String,
    pub lines: Vec<PriceLine>,
    #[serde(default)]
    pub discount: u64,
    #[serde(default)]
    pub discount_note: String,
    #[serde(default)]
    pub add_ons: Vec<PriceLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub percent: u32,
    pub due: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub statement: String,
    /// Organizations signing, one column each.
    pub parties: Vec<String>,
    /// Row labels of the signature block.
    #[serde(default = "default_signature_fields")]
    pub fields: Vec<String>,
}

fn default_signature_fields() -> Vec<String> {
    ["Signature", "Name", "Designation", "Date"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Everything the document pipeline needs besides dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalContent {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Prefix of the proposal reference number.
    pub reference: String,
    pub vendor: Party,
    pub client: Party,
    pub overview: Overview,
    pub features: Vec<FeatureModule>,
    pub phases: Vec<Phase>,
    pub infrastructure: Infrastructure,
    pub pricing: Pricing,
    pub payment: Payment,
    pub signature: Signature,
    #[serde(default)]
    pub footer: String,
}

impl ProposalContent {
    /// The content compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_yaml(EMBEDDED_CONTENT)
    }

    /// Load and validate a content file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            ProposalError::UserError(format!(
                "failed to read content file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&yaml)
    }

    /// Parse and validate content from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let content: Self = serde_yaml::from_str(yaml).map_err(|e| {
            ProposalError::UserError(format!("failed to parse content YAML: {}", e))
        })?;
        content.validate()?;
        Ok(content)
    }

    /// Check the invariants the section builders rely on.
    pub fn validate(&self) -> Result<()> {
        require(!self.title.trim().is_empty(), "title must not be empty")?;
        require(!self.vendor.name.trim().is_empty(), "vendor name must not be empty")?;
        require(!self.client.name.trim().is_empty(), "client name must not be empty")?;
        require(!self.features.is_empty(), "at least one feature module is required")?;
        require(!self.phases.is_empty(), "at least one phase is required")?;
        require(
            !self.infrastructure.items.is_empty(),
            "at least one infrastructure item is required",
        )?;
        require(!self.pricing.lines.is_empty(), "at least one pricing line is required")?;
        require(
            !self.payment.milestones.is_empty(),
            "at least one payment milestone is required",
        )?;
        require(
            !self.signature.parties.is_empty(),
            "at least one signing party is required",
        )?;
        require(
            !self.signature.fields.is_empty(),
            "signature block needs at least one field",
        )?;

        if let Some(module) = self.features.iter().find(|m| m.name.trim().is_empty()) {
            return Err(invalid(&format!(
                "feature module with description '{}' has no name",
                module.description
            )));
        }
        if let Some(phase) = self.phases.iter().find(|p| p.weeks == 0) {
            return Err(invalid(&format!("phase '{}' must last at least one week", phase.name)));
        }

        if let Some(milestone) = self.payment.milestones.iter().find(|m| m.percent > 100) {
            return Err(invalid(&format!(
                "milestone '{}' is {}%, above 100%",
                milestone.name, milestone.percent
            )));
        }
        let percent = self
            .payment
            .milestones
            .iter()
            .try_fold(0u32, |sum, m| sum.checked_add(m.percent))
            .ok_or_else(|| invalid("payment milestone percentages overflow"))?;
        if percent != 100 {
            return Err(invalid(&format!(
                "payment milestones add up to {}%, expected 100%",
                percent
            )));
        }

        if let Some(line) = self
            .pricing
            .lines
            .iter()
            .chain(&self.pricing.add_ons)
            .find(|l| l.amount > MAX_AMOUNT)
        {
            return Err(invalid(&format!(
                "amount {} of '{}' exceeds the maximum {}",
                line.amount, line.item, MAX_AMOUNT
            )));
        }
        let subtotal = self
            .pricing
            .checked_subtotal()
            .filter(|total| *total <= MAX_AMOUNT)
            .ok_or_else(|| {
                invalid(&format!(
                    "pricing subtotal overflows the maximum {}",
                    MAX_AMOUNT
                ))
            })?;
        if self.pricing.discount > subtotal {
            return Err(invalid(&format!(
                "discount {} exceeds the pricing subtotal {}",
                self.pricing.discount, subtotal
            )));
        }

        Ok(())
    }

    /// Total duration of all phases.
    pub fn total_weeks(&self) -> u32 {
        self.phases.iter().map(|p| p.weeks).sum()
    }
}

impl Pricing {
    /// Sum of all pricing lines before discount, saturating at `u64::MAX`.
    pub fn subtotal(&self) -> u64 {
        self.checked_subtotal().unwrap_or(u64::MAX)
    }

    /// Sum of all pricing lines, or `None` on overflow.
    pub fn checked_subtotal(&self) -> Option<u64> {
        self.lines
            .iter()
            .try_fold(0u64, |sum, l| sum.checked_add(l.amount))
    }

    /// Format `amount` in this pricing's currency.
    pub fn format(&self, amount: u64) -> String {
        format_amount(&self.currency, amount)
    }
}

fn require(condition: bool, message: &str) -> Result<()> {
    if condition { Ok(()) } else { Err(invalid(message)) }
}

fn invalid(message: &str) -> ProposalError {
    ProposalError::UserError(format!("content validation failed: {}", message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_is_valid() {
        let content = ProposalContent::embedded().unwrap();

        assert_eq!(content.client.name, "Hisham Traders");
        assert_eq!(content.pricing.currency, "PKR");
        assert_eq!(content.pricing.subtotal(), 420_000);
        assert_eq!(content.pricing.discount, 170_000);
        assert_eq!(content.total_weeks(), 12);
        assert_eq!(content.signature.fields.len(), 4);
    }

    #[test]
    fn milestone_percentages_must_sum_to_100() {
        let mut content = ProposalContent::embedded().unwrap();
        content.payment.milestones[0].percent += 5;

        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("add up to 105%"));
    }

    #[test]
    fn discount_cannot_exceed_subtotal() {
        let mut content = ProposalContent::embedded().unwrap();
        content.pricing.discount = content.pricing.subtotal() + 1;

        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds the pricing subtotal"));
    }

    #[test]
    fn oversized_amount_rejected_before_assembly() {
        let mut content = ProposalContent::embedded().unwrap();
        content.pricing.lines.truncate(1);
        content.pricing.lines[0].amount = 1_000_000_000_000_000_000;
        content.pricing.discount = 0;

        let err = content.validate().unwrap_err();
        assert!(matches!(err, ProposalError::UserError(_)));
        assert!(err.to_string().contains("exceeds the maximum"));
    }

    #[test]
    fn subtotal_overflow_rejected() {
        let mut content = ProposalContent::embedded().unwrap();
        for line in &mut content.pricing.lines {
            line.amount = MAX_AMOUNT;
        }

        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("subtotal overflows"));
    }

    #[test]
    fn subtotal_saturates_instead_of_panicking() {
        let mut content = ProposalContent::embedded().unwrap();
        content.pricing.lines[0].amount = u64::MAX;

        assert_eq!(content.pricing.checked_subtotal(), None);
        assert_eq!(content.pricing.subtotal(), u64::MAX);
    }

    #[test]
    fn huge_milestone_percentages_rejected() {
        let mut content = ProposalContent::embedded().unwrap();
        content.payment.milestones.truncate(2);
        content.payment.milestones[0].percent = u32::MAX;
        content.payment.milestones[1].percent = 101;

        let err = content.validate().unwrap_err();
        assert!(matches!(err, ProposalError::UserError(_)));
        assert!(err.to_string().contains("above 100%"));
    }

    #[test]
    fn empty_feature_list_rejected() {
        let mut content = ProposalContent::embedded().unwrap();
        content.features.clear();

        assert!(content.validate().is_err());
    }

    #[test]
    fn zero_week_phase_rejected() {
        let mut content = ProposalContent::embedded().unwrap();
        content.phases[0].weeks = 0;

        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("at least one week"));
    }

    #[test]
    fn malformed_yaml_is_user_error() {
        let err = ProposalContent::from_yaml("title: [").unwrap_err();
        assert!(matches!(err, ProposalError::UserError(_)));
    }

    #[test]
    fn load_from_file_roundtrip() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("content.yaml");
        let mut content = ProposalContent::embedded().unwrap();
        content.client.name = "Acme Distributors".to_string();
        std::fs::write(&path, serde_yaml::to_string(&content).unwrap()).unwrap();

        let loaded = ProposalContent::load(&path).unwrap();
        assert_eq!(loaded, content);
    }

    #[test]
    fn signature_fields_default_when_omitted() {
        let mut value: serde_yaml::Value = serde_yaml::from_str(EMBEDDED_CONTENT).unwrap();
        value["signature"]
            .as_mapping_mut()
            .unwrap()
            .remove("fields");
        let yaml = serde_yaml::to_string(&value).unwrap();

        let content = ProposalContent::from_yaml(&yaml).unwrap();
        assert_eq!(
            content.signature.fields,
            vec!["Signature", "Name", "Designation", "Date"]
        );
    }
}
