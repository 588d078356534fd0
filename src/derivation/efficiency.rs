//! Efficiency ratio and display banding.
//!
//! Efficiency compares hours worked with a standard month of 176 hours
//! (22 working days of 8 hours).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rounding::round_whole;

/// Hours in a standard working month.
pub const STANDARD_MONTHLY_HOURS: u32 = 176;

/// Returns `round(hours_worked / 176 * 100)`.
///
/// # Examples
///
/// ```
/// use hr_records::derivation::efficiency_ratio;
/// use rust_decimal::Decimal;
///
/// assert_eq!(efficiency_ratio(Decimal::from(176)), Decimal::from(100));
/// assert_eq!(efficiency_ratio(Decimal::from(160)), Decimal::from(91));
/// ```
pub fn efficiency_ratio(hours_worked: Decimal) -> Decimal {
    round_whole(hours_worked * Decimal::ONE_HUNDRED / Decimal::from(STANDARD_MONTHLY_HOURS))
}

/// How an efficiency ratio is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyBand {
    /// 90 and above.
    Good,
    /// 75 up to 90.
    Warning,
    /// Below 75.
    Critical,
}

impl EfficiencyBand {
    /// Bands a ratio produced by [`efficiency_ratio`].
    pub fn from_ratio(ratio: Decimal) -> Self {
        if ratio >= Decimal::from(90) {
            EfficiencyBand::Good
        } else if ratio >= Decimal::from(75) {
            EfficiencyBand::Warning
        } else {
            EfficiencyBand::Critical
        }
    }
}
