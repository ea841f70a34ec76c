mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::commission::CommissionArgs;
use commands::emi::{EmiArgs, ScheduleArgs};
use commands::words::WordsArgs;

/// Broker-side real-estate financial calculations
#[derive(Parser)]
#[command(
    name = "rfin",
    version,
    about = "Broker-side real-estate financial calculations",
    long_about = "A CLI for the financial core of a real-estate brokerage: \
                  loan EMI amortization with a month-wise schedule, and \
                  commission settlement with GST and TDS, rendered with \
                  Indian digit grouping and lakh/crore word forms."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the equated monthly installment for a loan
    Emi(EmiArgs),
    /// Month-wise amortization schedule for a loan
    Schedule(ScheduleArgs),
    /// Settle a brokerage commission with GST and TDS
    Commission(CommissionArgs),
    /// Render an amount with Indian grouping and lakh/crore words
    Words(WordsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::emi::run_emi(args),
        Commands::Schedule(args) => commands::emi::run_schedule(args),
        Commands::Commission(args) => commands::commission::run_commission(args),
        Commands::Words(args) => commands::words::run_words(args),
        Commands::Version => {
            println!("rfin {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::render(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
