use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::emi::amortization::EmiInput;
use crate::types::Money;

/// One month of the repayment schedule. Amounts carry two decimal places;
/// the headline figures in [`super::EmiFigures`] stay whole-rupee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub month: u32,
    pub interest: Money,
    pub principal_component: Money,
    pub closing_balance: Money,
}

/// Month-wise breakup of the loan: interest accrued, principal repaid, and
/// the balance left after each installment.
///
/// Uses the unrounded installment internally so the balance amortizes to
/// exactly zero; the degenerate inputs that make [`super::compute_emi`]
/// return all-zero figures produce an empty schedule here.
pub fn amortization_schedule(input: &EmiInput) -> Vec<ScheduleEntry> {
    let monthly_rate = input.monthly_rate();
    let months = input.total_months();

    if input.principal <= Decimal::ZERO || monthly_rate <= Decimal::ZERO || months == 0 {
        return Vec::new();
    }

    let installment = super::amortization::unrounded_installment(input);

    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = input.principal;

    for month in 1..=months {
        let interest = balance * monthly_rate;
        let mut principal_component = installment - interest;
        if month == months {
            // Absorb residual precision into the final installment.
            principal_component = balance;
        }
        balance -= principal_component;

        schedule.push(ScheduleEntry {
            month,
            interest: interest.round_dp(2),
            principal_component: principal_component.round_dp(2),
            closing_balance: if month == months {
                Decimal::ZERO
            } else {
                balance.round_dp(2)
            },
        });
    }

    schedule
}
