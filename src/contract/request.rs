//! Projection request boundary
//!
//! The engine itself only requires a positive principal and a term of at least
//! one month; the 1..=360 cap and policy-name resolution are enforced here,
//! before a contract is ever looked up.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ContractError;
use crate::policy::PaymentPolicy;
use super::data::MAX_TERM_MONTHS;

/// Parse an ISO 8601 (`YYYY-MM-DD`) date string
pub fn parse_date(input: &str) -> Result<NaiveDate, ContractError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ContractError::InvalidDate(input.to_string()))
}

/// A request to project the installment schedule of a stored contract
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    pub contract_id: u32,
    pub number_of_months: u32,
    pub payment_method: String,
}

impl ProjectionRequest {
    /// Validate the request and resolve its payment policy
    pub fn validate(&self) -> Result<PaymentPolicy, ContractError> {
        if self.number_of_months < 1 || self.number_of_months > MAX_TERM_MONTHS {
            return Err(ContractError::InvalidContractParameters(format!(
                "number of months must be between 1 and {}",
                MAX_TERM_MONTHS
            )));
        }
        PaymentPolicy::resolve(&self.payment_method)
    }
}
