//! Edit-time input sanitizer.
//!
//! The presentation layer feeds raw keystrokes through here before any
//! calculation runs. Out-of-range edits are rejected by returning the
//! previous value unchanged, so a field simply refuses the keystroke;
//! nothing here panics or errors.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Rate;

/// Upper bound on any percentage field accepted at edit time.
pub const PERCENT_MAX: Rate = dec!(100);

/// Upper bound on loan tenure, in years.
pub const TENURE_YEARS_MAX: u32 = 30;

/// What kind of field a raw edit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    /// Whole-rupee amount: digits only.
    Currency,
    /// Percentage in [0, 100]: digits and at most one decimal point.
    Percent,
    /// Integer year count in [0, 30]: digits only.
    TenureYears,
}

/// Normalize a raw text edit for the given field role.
///
/// Returns the new field value, or `previous` when the edit is rejected
/// (percent or tenure outside its documented range). Unparseable input
/// resolves to the neutral default of zero.
pub fn sanitize_edit(role: FieldRole, raw: &str, previous: Decimal) -> Decimal {
    match role {
        FieldRole::Currency => {
            let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(Decimal::ZERO)
        }
        FieldRole::Percent => {
            let mut seen_point = false;
            let filtered: String = raw
                .chars()
                .filter(|c| {
                    if c.is_ascii_digit() {
                        true
                    } else if *c == '.' && !seen_point {
                        seen_point = true;
                        true
                    } else {
                        false
                    }
                })
                .collect();
            match filtered.parse::<Decimal>() {
                Ok(v) if v >= Decimal::ZERO && v <= PERCENT_MAX => v,
                Ok(_) => previous,
                Err(_) => Decimal::ZERO,
            }
        }
        FieldRole::TenureYears => {
            let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
            match digits.parse::<Decimal>() {
                Ok(v) if v <= Decimal::from(TENURE_YEARS_MAX) => v,
                Ok(_) => previous,
                Err(_) => Decimal::ZERO,
            }
        }
    }
}

/// Saturating clamp into `[min, max]`.
pub fn clamp(value: Decimal, min: Decimal, max: Decimal) -> Decimal {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
