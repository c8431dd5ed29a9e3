//! Portfolio report across a book of contracts
//!
//! Projects every contract under its stored payment method for a common term
//! and aggregates the totals. Projections are independent pure computations,
//! so the batch runs in parallel.

use log::warn;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::contract::Contract;
use crate::error::ContractError;
use crate::projection::{ProjectionEngine, ScheduleSummary};

/// Per-contract line of the portfolio report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractReportLine {
    pub contract_id: u32,
    pub contract_number: String,
    pub payment_method: String,
    pub contract_value: f64,
    pub summary: ScheduleSummary,
}

/// Aggregated projection report for a contract book
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub term_months: u32,
    pub lines: Vec<ContractReportLine>,
    pub grand_base_total: f64,
    pub grand_total_interest: f64,
    pub grand_total_fee: f64,
    pub grand_total_amount: f64,
}

impl PortfolioReport {
    /// Project every contract over `term_months` and aggregate the totals
    ///
    /// Contracts whose stored payment method no longer resolves are skipped
    /// with a warning rather than failing the whole report. Lines come back
    /// ordered by contract id regardless of the parallel execution order.
    pub fn run(contracts: &[Contract], term_months: u32) -> Result<Self, ContractError> {
        if term_months < 1 {
            return Err(ContractError::InvalidContractParameters(
                "report term must be at least 1 month".to_string(),
            ));
        }

        let engine = ProjectionEngine::new();
        let mut lines: Vec<ContractReportLine> = contracts
            .par_iter()
            .filter_map(|contract| {
                let policy = match contract.policy() {
                    Ok(policy) => policy,
                    Err(err) => {
                        warn!("skipping contract {}: {}", contract.id, err);
                        return None;
                    }
                };
                let schedule = match engine.project_installments(
                    contract.contract_value,
                    term_months,
                    contract.contract_date,
                    policy,
                ) {
                    Ok(schedule) => schedule,
                    Err(err) => {
                        warn!("skipping contract {}: {}", contract.id, err);
                        return None;
                    }
                };
                Some(ContractReportLine {
                    contract_id: contract.id,
                    contract_number: contract.contract_number.clone(),
                    payment_method: contract.payment_method.clone(),
                    contract_value: contract.contract_value,
                    summary: schedule.summary(),
                })
            })
            .collect();
        lines.sort_by_key(|line| line.contract_id);

        let grand_base_total = lines.iter().map(|l| l.summary.base_total).sum();
        let grand_total_interest = lines.iter().map(|l| l.summary.total_interest).sum();
        let grand_total_fee = lines.iter().map(|l| l.summary.total_fee).sum();
        let grand_total_amount = lines.iter().map(|l| l.summary.total_amount).sum();

        Ok(Self {
            term_months,
            lines,
            grand_base_total,
            grand_total_interest,
            grand_total_fee,
            grand_total_amount,
        })
    }
}
