use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::sanitize::{PERCENT_MAX, TENURE_YEARS_MAX};
use crate::types::{Money, Rate};
use crate::{RealtyFinanceError, RealtyFinanceResult};

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// One snapshot of the loan inputs. Replaced wholesale on every edit; there
/// is no identity or history beyond the current values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    pub principal: Money,
    pub annual_rate_percent: Rate,
    pub tenure_years: u32,
}

/// The three headline loan figures, each independently rounded to whole
/// rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmiFigures {
    pub monthly_installment: Money,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl EmiFigures {
    pub const ZERO: EmiFigures = EmiFigures {
        monthly_installment: Decimal::ZERO,
        total_interest: Decimal::ZERO,
        total_payment: Decimal::ZERO,
    };
}

impl EmiInput {
    /// Enforce the documented input domain for callers that bypass the
    /// edit-time sanitizer (CLI flags, bindings payloads).
    pub fn validate(&self) -> RealtyFinanceResult<()> {
        if self.principal < Decimal::ZERO {
            return Err(RealtyFinanceError::InvalidInput {
                field: "principal".into(),
                reason: "Principal cannot be negative.".into(),
            });
        }
        if self.annual_rate_percent < Decimal::ZERO || self.annual_rate_percent > PERCENT_MAX {
            return Err(RealtyFinanceError::OutOfRange {
                field: "annual_rate_percent".into(),
                value: self.annual_rate_percent,
                min: Decimal::ZERO,
                max: PERCENT_MAX,
            });
        }
        if self.tenure_years > TENURE_YEARS_MAX {
            return Err(RealtyFinanceError::OutOfRange {
                field: "tenure_years".into(),
                value: Decimal::from(self.tenure_years),
                min: Decimal::ZERO,
                max: Decimal::from(TENURE_YEARS_MAX),
            });
        }
        Ok(())
    }

    pub(crate) fn monthly_rate(&self) -> Rate {
        self.annual_rate_percent / dec!(12) / dec!(100)
    }

    pub(crate) fn total_months(&self) -> u32 {
        self.tenure_years * 12
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Equated monthly installment over the full tenure.
///
/// Total over its domain: a zero principal, zero rate, or zero tenure yields
/// all-zero figures. Note the zero-rate case returns zeros rather than the
/// interest-free split `principal / months`; callers that want the
/// interest-free split must compute it themselves.
///
/// The three figures are rounded to whole rupees independently, so
/// `total_interest + principal` can drift from `total_payment` by up to one
/// rupee. Downstream consumers render the figures as-is; do not reconcile
/// the drift here.
pub fn compute_emi(input: &EmiInput) -> EmiFigures {
    let monthly_rate = input.monthly_rate();
    let months = input.total_months();

    if input.principal <= Decimal::ZERO || monthly_rate <= Decimal::ZERO || months == 0 {
        return EmiFigures::ZERO;
    }

    let installment = unrounded_installment(input);
    let total_payment = installment * Decimal::from(months);
    let total_interest = total_payment - input.principal;

    EmiFigures {
        monthly_installment: round_rupees(installment),
        total_interest: round_rupees(total_interest),
        total_payment: round_rupees(total_payment),
    }
}

/// Installment before whole-rupee rounding. The schedule builder needs the
/// full-precision value so balances amortize to exactly zero.
///
/// Callers must have applied the degenerate-input guard first; `growth - 1`
/// is nonzero whenever the monthly rate is positive.
pub(crate) fn unrounded_installment(input: &EmiInput) -> Money {
    let monthly_rate = input.monthly_rate();
    let months = input.total_months();
    let growth = (Decimal::ONE + monthly_rate).powi(i64::from(months));
    input.principal * monthly_rate * growth / (growth - Decimal::ONE)
}

/// Nearest whole rupee, halves away from zero.
pub(crate) fn round_rupees(amount: Money) -> Money {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn four_year_loan() -> EmiInput {
        EmiInput {
            principal: dec!(300000),
            annual_rate_percent: dec!(10),
            tenure_years: 4,
        }
    }

    #[test]
    fn four_year_loan_figures() {
        let figures = compute_emi(&four_year_loan());
        // 3L at 10% over 48 months: installment 7608.78 -> 7609
        assert_eq!(figures.monthly_installment, dec!(7609));
        assert_eq!(figures.total_payment, dec!(365221));
        assert_eq!(figures.total_interest, dec!(65221));
    }

    #[test]
    fn zero_principal_zero_rate_zero_tenure_all_collapse_to_zero() {
        let mut input = four_year_loan();
        input.principal = Decimal::ZERO;
        assert_eq!(compute_emi(&input), EmiFigures::ZERO);

        let mut input = four_year_loan();
        input.annual_rate_percent = Decimal::ZERO;
        assert_eq!(compute_emi(&input), EmiFigures::ZERO);

        let mut input = four_year_loan();
        input.tenure_years = 0;
        assert_eq!(compute_emi(&input), EmiFigures::ZERO);
    }

    #[test]
    fn installment_rises_with_rate() {
        let base = compute_emi(&four_year_loan());
        let mut dearer = four_year_loan();
        dearer.annual_rate_percent = dec!(11);
        let dearer = compute_emi(&dearer);
        assert!(dearer.monthly_installment > base.monthly_installment);
        assert_eq!(dearer.monthly_installment, dec!(7754));
    }

    #[test]
    fn figures_never_negative_across_domain() {
        for principal in [dec!(0), dec!(1), dec!(2500000)] {
            for rate in [dec!(0), dec!(0.5), dec!(8.5), dec!(100)] {
                for years in [0u32, 1, 15, 30] {
                    let figures = compute_emi(&EmiInput {
                        principal,
                        annual_rate_percent: rate,
                        tenure_years: years,
                    });
                    assert!(figures.monthly_installment >= Decimal::ZERO);
                    assert!(figures.total_interest >= Decimal::ZERO);
                    assert!(figures.total_payment >= Decimal::ZERO);
                }
            }
        }
    }

    #[test]
    fn rounding_drift_bounded_by_one_rupee() {
        let input = EmiInput {
            principal: dec!(2500000),
            annual_rate_percent: dec!(8.5),
            tenure_years: 20,
        };
        let figures = compute_emi(&input);
        // Each figure is rounded on its own, so the identities hold to ±1.
        let drift = (figures.total_interest + input.principal - figures.total_payment).abs();
        assert!(drift <= Decimal::ONE, "drift was {drift}");

        let months = Decimal::from(input.total_months());
        let payment_drift =
            (figures.monthly_installment * months - figures.total_payment).abs();
        assert!(payment_drift <= months, "payment drift was {payment_drift}");
    }

    #[test]
    fn twenty_year_loan_figures() {
        let figures = compute_emi(&EmiInput {
            principal: dec!(2500000),
            annual_rate_percent: dec!(8.5),
            tenure_years: 20,
        });
        assert_eq!(figures.monthly_installment, dec!(21696));
        assert_eq!(figures.total_payment, dec!(5206939));
        assert_eq!(figures.total_interest, dec!(2706939));
    }

    #[test]
    fn validate_rejects_out_of_domain_inputs() {
        let mut input = four_year_loan();
        input.principal = dec!(-1);
        assert!(matches!(
            input.validate(),
            Err(RealtyFinanceError::InvalidInput { .. })
        ));

        let mut input = four_year_loan();
        input.annual_rate_percent = dec!(101);
        assert!(matches!(
            input.validate(),
            Err(RealtyFinanceError::OutOfRange { .. })
        ));

        let mut input = four_year_loan();
        input.tenure_years = 31;
        assert!(matches!(
            input.validate(),
            Err(RealtyFinanceError::OutOfRange { .. })
        ));

        assert!(four_year_loan().validate().is_ok());
    }
}
