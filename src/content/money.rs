//! Pricing arithmetic and amount formatting.

use super::{Milestone, Pricing};

/// Totals derived from the pricing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingSummary {
    pub subtotal: u64,
    pub discount: u64,
    pub final_price: u64,
    /// Discount as a whole percentage of the subtotal, rounded down.
    pub saved_percent: u64,
}

impl PricingSummary {
    pub fn from_pricing(pricing: &Pricing) -> Self {
        let subtotal = pricing.subtotal();
        let discount = pricing.discount.min(subtotal);
        let saved_percent = if subtotal == 0 {
            0
        } else {
            u128::from(discount) * 100 / u128::from(subtotal)
        };

        Self {
            subtotal,
            discount,
            final_price: subtotal - discount,
            // discount <= subtotal, so this is at most 100.
            saved_percent: u64::try_from(saved_percent).unwrap_or(100),
        }
    }
}

/// Split `total` across milestones by percentage.
///
/// Each amount is rounded down; the last milestone takes the remainder so the
/// amounts always add up to `total`.
pub fn milestone_amounts(total: u64, milestones: &[Milestone]) -> Vec<u64> {
    let share = |m: &Milestone| {
        u64::try_from(percent_of(total, m.percent)).unwrap_or(u64::MAX)
    };
    let mut amounts: Vec<u64> = milestones.iter().map(share).collect();

    if let Some(last) = amounts.last_mut() {
        let others = milestones
            .iter()
            .take(milestones.len() - 1)
            .fold(0u64, |sum, m| sum.saturating_add(share(m)));
        *last = total.saturating_sub(others);
    }

    amounts
}

/// `percent`% of `amount`, rounded down, computed without overflow.
fn percent_of(amount: u64, percent: u32) -> u128 {
    u128::from(amount) * u128::from(percent) / 100
}

/// `PKR 250,000` style formatting with thousands separators.
pub fn format_amount(currency: &str, amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if currency.is_empty() {
        grouped
    } else {
        format!("{} {}", currency, grouped)
    }
}
