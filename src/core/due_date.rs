use chrono::{Local, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use super::error::DraftError;

/// ISO 8601 calendar date format used by the form's date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Payment-term shortcuts offered next to the due date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DueDatePreset {
    OnReceipt,
    Within15Days,
    Within30Days,
    Within45Days,
    Within60Days,
    Within90Days,
}

impl DueDatePreset {
    /// All presets in display order.
    pub const ALL: [Self; 6] = [
        Self::OnReceipt,
        Self::Within15Days,
        Self::Within30Days,
        Self::Within45Days,
        Self::Within60Days,
        Self::Within90Days,
    ];

    /// Day offset from the invoice date.
    pub fn days(&self) -> i64 {
        match self {
            Self::OnReceipt => 0,
            Self::Within15Days => 15,
            Self::Within30Days => 30,
            Self::Within45Days => 45,
            Self::Within60Days => 60,
            Self::Within90Days => 90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnReceipt => "On Receipt",
            Self::Within15Days => "Within 15 Days",
            Self::Within30Days => "Within 30 Days",
            Self::Within45Days => "Within 45 Days",
            Self::Within60Days => "Within 60 Days",
            Self::Within90Days => "Within 90 Days",
        }
    }

    /// Preset matching a day offset, if any.
    pub fn from_days(days: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.days() == days)
    }
}

/// `base + offset_days`, with `today` standing in for a missing base.
///
/// Any offset is accepted, including negative ones.
pub fn quick_due_date_on(
    base: Option<NaiveDate>,
    offset_days: i64,
    today: NaiveDate,
) -> Result<NaiveDate, DraftError> {
    let base = base.unwrap_or(today);
    TimeDelta::try_days(offset_days)
        .and_then(|delta| base.checked_add_signed(delta))
        .ok_or_else(|| {
            DraftError::Date(format!("offset of {offset_days} days from {base} is out of range"))
        })
}

/// [`quick_due_date_on`] with today's local date as the fallback base.
pub fn quick_due_date(base: Option<NaiveDate>, offset_days: i64) -> Result<NaiveDate, DraftError> {
    quick_due_date_on(base, offset_days, Local::now().date_naive())
}

/// String form of [`quick_due_date`]: `YYYY-MM-DD` in and out.
///
/// `None` or an empty string means "no invoice date set".
pub fn quick_due_date_iso(base: Option<&str>, offset_days: i64) -> Result<String, DraftError> {
    let base = base
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_iso_date)
        .transpose()?;
    let due = quick_due_date(base, offset_days)?;
    Ok(due.format(DATE_FORMAT).to_string())
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, DraftError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| DraftError::Date(format!("invalid date '{value}': {e}")))
}
