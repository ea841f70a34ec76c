use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

use realty_finance_core::commission::{settle_commission, CommissionInput};
use realty_finance_core::format::{amount_to_words, format_inr};
use realty_finance_core::types::with_metadata;

use crate::input;

/// Arguments for commission settlement
#[derive(Args)]
pub struct CommissionArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Property sale value in rupees
    #[arg(long)]
    pub property_value: Option<Decimal>,

    /// Brokerage rate in percent of property value (0-10, 0.5 steps)
    #[arg(long, default_value = "2")]
    pub commission_rate: Decimal,

    /// GST rate in percent of the commission (0-28)
    #[arg(long, default_value = "18")]
    pub gst_rate: Decimal,

    /// TDS rate in percent of the commission (0-10, 0.5 steps)
    #[arg(long, default_value = "1")]
    pub tds_rate: Decimal,
}

#[derive(Debug, Serialize)]
struct CommissionOutput {
    commission_amount: Decimal,
    commission_amount_inr: String,
    gst_amount: Decimal,
    gst_amount_inr: String,
    tds_amount: Decimal,
    tds_amount_inr: String,
    net_commission: Decimal,
    net_commission_inr: String,
    net_commission_words: String,
}

pub fn run_commission(args: CommissionArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let deal: CommissionInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin_json()? {
        serde_json::from_value(data)?
    } else {
        CommissionInput {
            property_value: args
                .property_value
                .ok_or("--property-value is required (or provide --input)")?,
            commission_rate_percent: args.commission_rate,
            gst_rate_percent: args.gst_rate,
            tds_rate_percent: args.tds_rate,
        }
    };
    deal.validate()?;

    let start = Instant::now();
    let breakdown = settle_commission(&deal);
    let elapsed = start.elapsed().as_micros() as u64;

    let output = CommissionOutput {
        commission_amount: breakdown.commission_amount,
        commission_amount_inr: format_inr(breakdown.commission_amount),
        gst_amount: breakdown.gst_amount,
        gst_amount_inr: format_inr(breakdown.gst_amount),
        tds_amount: breakdown.tds_amount,
        tds_amount_inr: format_inr(breakdown.tds_amount),
        net_commission: breakdown.net_commission,
        net_commission_inr: format_inr(breakdown.net_commission),
        net_commission_words: amount_to_words(breakdown.net_commission),
    };

    let assumptions = serde_json::json!({
        "gst": "added on top of the base commission",
        "tds": "withheld from the base commission",
        "rounding": "none; net = commission + gst - tds holds exactly",
    });

    Ok(serde_json::to_value(with_metadata(
        "Brokerage settlement with GST and TDS",
        &assumptions,
        Vec::new(),
        elapsed,
        output,
    ))?)
}
