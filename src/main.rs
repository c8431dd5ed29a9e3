//! Contract System CLI
//!
//! Command-line interface for managing the contract book and projecting
//! installment schedules

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use contract_system::contract::{request, ContractRepository, JsonFileStore, NewContract, ProjectionRequest};
use contract_system::{Contract, ContractError, PortfolioReport, ProjectionEngine, Schedule};

#[derive(Parser)]
#[command(name = "contract_system", version, about = "Contract management and installment projection")]
struct Cli {
    /// Path to the JSON contract store
    #[arg(long, default_value = JsonFileStore::DEFAULT_PATH)]
    store: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all contracts in the store
    List,
    /// Show a single contract
    Show { id: u32 },
    /// Create a new contract
    Create {
        /// Business contract number, e.g. CNT-2025-003
        #[arg(long)]
        number: String,
        /// Contract date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Total contract value
        #[arg(long)]
        value: f64,
        /// Payment method: PayPal, PayOnline or Nequi
        #[arg(long)]
        method: String,
        #[arg(long)]
        client: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a contract
    Delete { id: u32 },
    /// Project the installment schedule for a stored contract
    Project {
        #[arg(long)]
        contract_id: u32,
        /// Term in months (1-360)
        #[arg(long)]
        months: u32,
        /// Payment method: PayPal, PayOnline or Nequi
        #[arg(long)]
        method: String,
        /// Write the full schedule to a CSV file
        #[arg(long)]
        csv: Option<String>,
    },
    /// Aggregate projection report across the whole contract book
    Report {
        /// Term in months applied to every contract
        #[arg(long)]
        months: u32,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut store = JsonFileStore::open(&cli.store)
        .with_context(|| format!("failed to open contract store at {}", cli.store))?;

    match cli.command {
        Command::List => {
            let contracts = store.list()?;
            print_contract_header();
            for contract in &contracts {
                print_contract_row(contract);
            }
            println!("\n{} contracts", contracts.len());
        }
        Command::Show { id } => {
            let contract = store.get(id)?.ok_or(ContractError::ContractNotFound(id))?;
            println!("Contract {}", contract.id);
            println!("  Number: {}", contract.contract_number);
            println!("  Date: {}", contract.contract_date);
            println!("  Value: ${:.2}", contract.contract_value);
            println!("  Payment Method: {}", contract.payment_method);
            println!("  Client: {}", contract.client_name.as_deref().unwrap_or("-"));
            println!("  Status: {:?}", contract.status);
        }
        Command::Create { number, date, value, method, client, description } => {
            let contract_date = request::parse_date(&date)?;
            let created = store.create(NewContract {
                contract_number: number,
                contract_date,
                contract_value: value,
                payment_method: method,
                client_name: client,
                description,
            })?;
            println!("Created contract {} ({})", created.id, created.contract_number);
        }
        Command::Delete { id } => {
            if store.delete(id)? {
                println!("Deleted contract {}", id);
            } else {
                bail!(ContractError::ContractNotFound(id));
            }
        }
        Command::Project { contract_id, months, method, csv } => {
            let projection_request = ProjectionRequest {
                contract_id,
                number_of_months: months,
                payment_method: method,
            };
            let policy = projection_request.validate()?;
            let contract = store
                .get(contract_id)?
                .ok_or(ContractError::ContractNotFound(contract_id))?;

            let engine = ProjectionEngine::new();
            let schedule = engine.project_installments(
                contract.contract_value,
                months,
                contract.contract_date,
                policy,
            )?;

            print_schedule(&contract, policy.name(), &schedule);

            if let Some(path) = csv {
                write_schedule_csv(&path, &schedule)?;
                println!("\nFull schedule written to: {}", path);
            }
        }
        Command::Report { months } => {
            let contracts = store.list()?;
            let report = PortfolioReport::run(&contracts, months)?;

            println!("Portfolio Report ({} months)", report.term_months);
            println!("{:>4} {:>14} {:>10} {:>14} {:>12} {:>12} {:>14}",
                "ID", "Number", "Method", "Value", "Interest", "Fees", "Total");
            println!("{}", "-".repeat(86));
            for line in &report.lines {
                println!("{:>4} {:>14} {:>10} {:>14.2} {:>12.2} {:>12.2} {:>14.2}",
                    line.contract_id,
                    line.contract_number,
                    line.payment_method,
                    line.contract_value,
                    line.summary.total_interest,
                    line.summary.total_fee,
                    line.summary.total_amount,
                );
            }
            println!("{}", "-".repeat(86));
            println!("{:>4} {:>14} {:>10} {:>14.2} {:>12.2} {:>12.2} {:>14.2}",
                "", "TOTAL", "",
                report.grand_base_total,
                report.grand_total_interest,
                report.grand_total_fee,
                report.grand_total_amount,
            );
        }
    }

    Ok(())
}

fn print_contract_header() {
    println!("{:>4} {:>14} {:>12} {:>14} {:>10} {:>10}",
        "ID", "Number", "Date", "Value", "Method", "Status");
    println!("{}", "-".repeat(70));
}

fn print_contract_row(contract: &Contract) {
    println!("{:>4} {:>14} {:>12} {:>14.2} {:>10} {:>10}",
        contract.id,
        contract.contract_number,
        contract.contract_date.to_string(),
        contract.contract_value,
        contract.payment_method,
        format!("{:?}", contract.status),
    );
}

fn print_schedule(contract: &Contract, policy_name: &str, schedule: &Schedule) {
    println!("Installment Projection");
    println!("  Contract: {} ({})", contract.id, contract.contract_number);
    println!("  Value: ${:.2}", contract.contract_value);
    println!("  Payment Method: {}", policy_name);
    println!();

    println!("{:>4} {:>12} {:>12} {:>10} {:>8} {:>12}",
        "#", "Due Date", "Base", "Interest", "Fee", "Total");
    println!("{}", "-".repeat(64));
    for row in &schedule.installments {
        println!("{:>4} {:>12} {:>12.2} {:>10.2} {:>8.2} {:>12.2}",
            row.number,
            row.due_date.to_string(),
            row.base_value,
            row.interest,
            row.fee,
            row.total_value,
        );
    }

    let summary = schedule.summary();
    println!("\nSummary:");
    println!("  Base Total: ${:.2}", summary.base_total);
    println!("  Total Interest: ${:.2}", summary.total_interest);
    println!("  Total Fees: ${:.2}", summary.total_fee);
    println!("  Total Amount: ${:.2}", summary.total_amount);
}

fn write_schedule_csv(path: &str, schedule: &Schedule) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path))?;
    for row in &schedule.installments {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
