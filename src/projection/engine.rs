//! Core projection engine for monthly installment schedules
//!
//! Numeric contract: rounding to 2 decimals is half-away-from-zero and applied
//! only when a row is emitted. The running accumulators (`pending_balance` and
//! the per-period base value) are carried at full f64 precision so long terms
//! do not drift. Due dates use calendar month addition with day-of-month
//! overflow clamped to the last day of the target month (Jan 31 -> Feb 28).

use chrono::{Months, NaiveDate};

use crate::error::ContractError;
use crate::policy::PaymentPolicy;
use super::schedule::{Installment, Schedule};

/// Round to 2 decimal places, half away from zero
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Main projection engine
///
/// Stateless: every projection is a pure function of its arguments, so a
/// single engine can be shared across threads without coordination.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine;

impl ProjectionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Project the monthly installment schedule for a contract
    ///
    /// Straight-line principal amortization: each period carries an equal base
    /// value of `principal / term_months`. Interest accrues per period on the
    /// pending balance, which declines by the unrounded base value, and the
    /// policy fee applies to the installment including interest.
    ///
    /// The term is not capped here; the 360-month ceiling is a request
    /// boundary rule, see `contract::request`.
    pub fn project_installments(
        &self,
        principal: f64,
        term_months: u32,
        start_date: NaiveDate,
        policy: PaymentPolicy,
    ) -> Result<Schedule, ContractError> {
        if term_months < 1 {
            return Err(ContractError::InvalidContractParameters(
                "term must be at least 1 month".to_string(),
            ));
        }
        if !(principal > 0.0) {
            return Err(ContractError::InvalidContractParameters(
                "principal must be greater than 0".to_string(),
            ));
        }

        let interest_rate = policy.interest_rate_percent() / 100.0;
        let fee_rate = policy.fee_percent() / 100.0;

        let base_value = principal / term_months as f64;
        let mut pending_balance = principal;
        let mut schedule = Schedule::new();

        for number in 1..=term_months {
            let due_date = start_date
                .checked_add_months(Months::new(number))
                .ok_or_else(|| {
                    ContractError::InvalidContractParameters(format!(
                        "due date overflows calendar at installment {}",
                        number
                    ))
                })?;

            let interest = pending_balance * interest_rate;
            let with_interest = base_value + interest;
            let fee = with_interest * fee_rate;
            let total_value = with_interest + fee;

            schedule.add_row(Installment {
                number,
                due_date,
                base_value: round2(base_value),
                interest: round2(interest),
                fee: round2(fee),
                total_value: round2(total_value),
            });

            // Unrounded decrement keeps the interest base exact over long terms
            pending_balance -= base_value;
        }

        Ok(schedule)
    }

    /// Total amount payable across a schedule: exact sum of the rounded
    /// per-installment totals. Returns 0 for an empty slice.
    pub fn calculate_total_amount(&self, installments: &[Installment]) -> f64 {
        installments.iter().map(|row| row.total_value).sum()
    }
}
