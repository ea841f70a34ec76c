use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};
use crate::{RealtyFinanceError, RealtyFinanceResult};

pub const COMMISSION_RATE_MAX: Rate = dec!(10);
pub const GST_RATE_MAX: Rate = dec!(28);
pub const TDS_RATE_MAX: Rate = dec!(10);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Deal-closure settlement inputs. Rates are percentages of the base they
/// apply to: commission on property value, GST and TDS on the commission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionInput {
    pub property_value: Money,
    pub commission_rate_percent: Rate,
    pub gst_rate_percent: Rate,
    pub tds_rate_percent: Rate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionBreakdown {
    pub commission_amount: Money,
    pub gst_amount: Money,
    pub tds_amount: Money,
    pub net_commission: Money,
}

impl CommissionInput {
    /// Enforce the documented input domain for callers that bypass the
    /// edit-time sanitizer and the stepped rate controls.
    pub fn validate(&self) -> RealtyFinanceResult<()> {
        if self.property_value < Decimal::ZERO {
            return Err(RealtyFinanceError::InvalidInput {
                field: "property_value".into(),
                reason: "Property value cannot be negative.".into(),
            });
        }
        check_rate("commission_rate_percent", self.commission_rate_percent, COMMISSION_RATE_MAX)?;
        check_rate("gst_rate_percent", self.gst_rate_percent, GST_RATE_MAX)?;
        check_rate("tds_rate_percent", self.tds_rate_percent, TDS_RATE_MAX)?;
        Ok(())
    }
}

fn check_rate(field: &str, value: Rate, max: Rate) -> RealtyFinanceResult<()> {
    if value < Decimal::ZERO || value > max {
        return Err(RealtyFinanceError::OutOfRange {
            field: field.into(),
            value,
            min: Decimal::ZERO,
            max,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Brokerage settlement: base commission on the property value, GST added on
/// top, TDS withheld at source.
///
/// Total over its domain and exact: the four figures come from plain
/// multiplication with no intermediate rounding, so
/// `net_commission == commission_amount + gst_amount - tds_amount` holds
/// precisely.
pub fn settle_commission(input: &CommissionInput) -> CommissionBreakdown {
    let commission_amount = input.property_value * input.commission_rate_percent / dec!(100);
    let gst_amount = commission_amount * input.gst_rate_percent / dec!(100);
    let tds_amount = commission_amount * input.tds_rate_percent / dec!(100);
    let net_commission = commission_amount + gst_amount - tds_amount;

    CommissionBreakdown {
        commission_amount,
        gst_amount,
        tds_amount,
        net_commission,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn half_crore_deal() -> CommissionInput {
        CommissionInput {
            property_value: dec!(5000000),
            commission_rate_percent: dec!(2),
            gst_rate_percent: dec!(18),
            tds_rate_percent: dec!(1),
        }
    }

    #[test]
    fn half_crore_deal_breakdown() {
        let breakdown = settle_commission(&half_crore_deal());
        assert_eq!(breakdown.commission_amount, dec!(100000));
        assert_eq!(breakdown.gst_amount, dec!(18000));
        assert_eq!(breakdown.tds_amount, dec!(1000));
        assert_eq!(breakdown.net_commission, dec!(117000));
    }

    #[test]
    fn net_identity_holds_exactly_across_fractional_rates() {
        for value in [dec!(0), dec!(999999), dec!(12345678)] {
            for rate in [dec!(0.5), dec!(1.5), dec!(9.5)] {
                let breakdown = settle_commission(&CommissionInput {
                    property_value: value,
                    commission_rate_percent: rate,
                    gst_rate_percent: dec!(18),
                    tds_rate_percent: dec!(0.5),
                });
                assert_eq!(
                    breakdown.net_commission,
                    breakdown.commission_amount + breakdown.gst_amount - breakdown.tds_amount
                );
                assert!(breakdown.commission_amount >= Decimal::ZERO);
                assert!(breakdown.gst_amount >= Decimal::ZERO);
                assert!(breakdown.tds_amount >= Decimal::ZERO);
            }
        }
    }

    #[test]
    fn zero_property_value_yields_zero_breakdown() {
        let mut input = half_crore_deal();
        input.property_value = Decimal::ZERO;
        let breakdown = settle_commission(&input);
        assert_eq!(breakdown.net_commission, Decimal::ZERO);
        assert_eq!(breakdown.commission_amount, Decimal::ZERO);
    }

    #[test]
    fn validate_enforces_rate_bounds() {
        let mut input = half_crore_deal();
        input.gst_rate_percent = dec!(29);
        assert!(matches!(
            input.validate(),
            Err(RealtyFinanceError::OutOfRange { .. })
        ));

        let mut input = half_crore_deal();
        input.commission_rate_percent = dec!(10.5);
        assert!(input.validate().is_err());

        let mut input = half_crore_deal();
        input.property_value = dec!(-1);
        assert!(matches!(
            input.validate(),
            Err(RealtyFinanceError::InvalidInput { .. })
        ));

        assert!(half_crore_deal().validate().is_ok());
    }
}
