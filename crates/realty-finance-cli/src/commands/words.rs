use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use realty_finance_core::format::{amount_to_words, format_inr};

/// Arguments for amount rendering
#[derive(Args)]
pub struct WordsArgs {
    /// Amount in rupees
    #[arg(long)]
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
struct WordsOutput {
    amount: Decimal,
    inr: String,
    words: String,
}

pub fn run_words(args: WordsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.amount < Decimal::ZERO {
        return Err("--amount cannot be negative".into());
    }

    let output = WordsOutput {
        amount: args.amount,
        inr: format_inr(args.amount),
        words: amount_to_words(args.amount),
    };

    Ok(serde_json::to_value(output)?)
}
