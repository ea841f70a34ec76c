use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

use realty_finance_core::emi::{amortization_schedule, compute_emi, EmiInput};
use realty_finance_core::format::{amount_to_words, format_inr};
use realty_finance_core::types::with_metadata;

use crate::input;

/// Arguments for EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal in rupees
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (0-100)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in years (0-30)
    #[arg(long)]
    pub years: Option<u32>,
}

/// Arguments for the amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal in rupees
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (0-100)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in years (0-30)
    #[arg(long)]
    pub years: Option<u32>,
}

#[derive(Debug, Serialize)]
struct EmiOutput {
    monthly_installment: Decimal,
    monthly_installment_inr: String,
    monthly_installment_words: String,
    total_interest: Decimal,
    total_interest_inr: String,
    total_payment: Decimal,
    total_payment_inr: String,
    total_payment_words: String,
}

fn resolve_loan(
    input_path: &Option<String>,
    principal: Option<Decimal>,
    rate: Option<Decimal>,
    years: Option<u32>,
) -> Result<EmiInput, Box<dyn std::error::Error>> {
    let loan: EmiInput = if let Some(path) = input_path {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin_json()? {
        serde_json::from_value(data)?
    } else {
        EmiInput {
            principal: principal.ok_or("--principal is required (or provide --input)")?,
            annual_rate_percent: rate.ok_or("--rate is required (or provide --input)")?,
            tenure_years: years.ok_or("--years is required (or provide --input)")?,
        }
    };
    loan.validate()?;
    Ok(loan)
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = resolve_loan(&args.input, args.principal, args.rate, args.years)?;

    let start = Instant::now();
    let figures = compute_emi(&loan);
    let elapsed = start.elapsed().as_micros() as u64;

    let mut warnings = Vec::new();
    if loan.annual_rate_percent.is_zero() && loan.principal > Decimal::ZERO {
        warnings.push(
            "Zero-rate loans report all-zero figures, not an interest-free \
             principal/months split."
                .into(),
        );
    }
    if figures.total_payment.is_zero() {
        warnings.push("Degenerate loan inputs; all figures are zero.".into());
    }

    let output = EmiOutput {
        monthly_installment: figures.monthly_installment,
        monthly_installment_inr: format_inr(figures.monthly_installment),
        monthly_installment_words: amount_to_words(figures.monthly_installment),
        total_interest: figures.total_interest,
        total_interest_inr: format_inr(figures.total_interest),
        total_payment: figures.total_payment,
        total_payment_inr: format_inr(figures.total_payment),
        total_payment_words: amount_to_words(figures.total_payment),
    };

    let assumptions = serde_json::json!({
        "rounding": "each figure rounded to whole rupees independently",
        "zero_rate_or_tenure": "all figures zero",
    });

    Ok(serde_json::to_value(with_metadata(
        "EMI annuity amortization",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = resolve_loan(&args.input, args.principal, args.rate, args.years)?;

    let start = Instant::now();
    let schedule = amortization_schedule(&loan);
    let elapsed = start.elapsed().as_micros() as u64;

    let warnings = if schedule.is_empty() {
        vec!["Degenerate loan inputs; the schedule is empty.".into()]
    } else {
        Vec::new()
    };

    let assumptions = serde_json::json!({
        "installment": "full precision internally; row amounts shown to 2dp",
        "final_month": "absorbs residual precision so the balance closes at zero",
    });

    Ok(serde_json::to_value(with_metadata(
        "Month-wise EMI amortization schedule",
        &assumptions,
        warnings,
        elapsed,
        schedule,
    ))?)
}
