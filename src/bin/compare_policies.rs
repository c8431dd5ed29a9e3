//! Compare the cost of the three payment services for one contract
//!
//! Projects the same principal/term under each policy and prints the
//! installment-level difference plus total cost per service.

use anyhow::Result;
use clap::Parser;
use contract_system::contract::request;
use contract_system::{PaymentPolicy, ProjectionEngine};

#[derive(Parser)]
#[command(name = "compare_policies", about = "Side-by-side payment service comparison")]
struct Args {
    /// Total contract value
    #[arg(long, default_value_t = 10_000.0)]
    value: f64,

    /// Term in months
    #[arg(long, default_value_t = 12)]
    months: u32,

    /// Contract date (YYYY-MM-DD)
    #[arg(long, default_value = "2025-01-22")]
    date: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start_date = request::parse_date(&args.date)?;
    let engine = ProjectionEngine::new();

    println!("Payment Service Comparison");
    println!("  Value: ${:.2} over {} months from {}\n", args.value, args.months, start_date);

    let mut totals: Vec<(&str, f64)> = Vec::new();

    for policy in PaymentPolicy::ALL {
        let schedule =
            engine.project_installments(args.value, args.months, start_date, policy)?;
        let summary = schedule.summary();
        let first = &schedule.installments[0];

        println!("{} ({}% interest, {}% fee)",
            policy.name(),
            policy.interest_rate_percent(),
            policy.fee_percent(),
        );
        println!("  First installment: base {:.2} + interest {:.2} + fee {:.2} = {:.2}",
            first.base_value, first.interest, first.fee, first.total_value);
        println!("  Total interest: ${:.2}", summary.total_interest);
        println!("  Total fees: ${:.2}", summary.total_fee);
        println!("  Total amount: ${:.2}\n", summary.total_amount);

        totals.push((policy.name(), summary.total_amount));
    }

    totals.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    println!("Cheapest service: {} (${:.2})", totals[0].0, totals[0].1);
    if let Some((name, amount)) = totals.last() {
        println!("Most expensive: {} (${:.2}, +${:.2})", name, amount, amount - totals[0].1);
    }

    Ok(())
}
