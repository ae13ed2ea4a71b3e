//! Proposal date computation.
//!
//! Every proposal carries two dates: the month it was issued and the month its
//! offer expires. Both are rendered with the same `strftime` pattern
//! (`"%B %Y"` by default, e.g. `June 2025`).
//!
//! The current instant is always passed in; only the CLI edge reads the clock.

use crate::error::{ProposalError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{Days, NaiveDate};

/// Default rendering pattern for proposal dates.
pub const DEFAULT_DATE_FORMAT: &str = "%B %Y";

/// Default number of days an offer stays valid.
pub const DEFAULT_EXPIRY_DAYS: u32 = 30;

/// The issue and expiry dates of one generation run, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePair {
    pub current: String,
    pub expiry: String,
}

impl DatePair {
    /// Compute the date pair for `today`, with the expiry `expiry_days` later.
    pub fn compute(today: NaiveDate, expiry_days: u32, format: &str) -> Result<Self> {
        validate_date_format(format)?;

        let expiry = today
            .checked_add_days(Days::new(u64::from(expiry_days)))
            .ok_or_else(|| {
                ProposalError::UserError(format!(
                    "expiry date overflows the calendar: {} + {} days",
                    today, expiry_days
                ))
            })?;

        Ok(Self {
            current: today.format(format).to_string(),
            expiry: expiry.format(format).to_string(),
        })
    }

    /// Compute the date pair with the default format and 30-day offset.
    pub fn for_today(today: NaiveDate) -> Result<Self> {
        Self::compute(today, DEFAULT_EXPIRY_DAYS, DEFAULT_DATE_FORMAT)
    }
}

/// Reject `strftime` patterns chrono cannot render.
///
/// chrono panics when displaying a format with an invalid specifier, so the
/// pattern is parsed up front.
pub fn validate_date_format(format: &str) -> Result<()> {
    if format.trim().is_empty() {
        return Err(ProposalError::UserError(
            "date format must not be empty".to_string(),
        ));
    }

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ProposalError::UserError(format!(
            "invalid date format '{}'",
            format
        )));
    }

    Ok(())
}
