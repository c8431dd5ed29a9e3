//! Contract record structures matching the stored document format

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ContractError;
use crate::policy::PaymentPolicy;

/// Upper bound on financed terms accepted at the request boundary
pub const MAX_TERM_MONTHS: u32 = 360;

/// Lifecycle status of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContractStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl Default for ContractStatus {
    fn default() -> Self {
        ContractStatus::Pending
    }
}

/// A stored contract record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Unique contract identifier assigned by the repository
    pub id: u32,

    /// Business contract number (e.g. "CNT-2025-001"), unique per book
    pub contract_number: String,

    /// Contract signing date; the first installment falls one month later
    pub contract_date: NaiveDate,

    /// Total financed value (the amortization principal)
    pub contract_value: f64,

    /// Name of the payment service applied to projections
    pub payment_method: String,

    #[serde(default)]
    pub client_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: ContractStatus,

    pub created_at: NaiveDateTime,

    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Contract {
    /// Resolve the contract's stored payment method to a policy
    pub fn policy(&self) -> Result<PaymentPolicy, ContractError> {
        PaymentPolicy::resolve(&self.payment_method)
    }
}

/// Input for creating a contract, validated before it reaches the repository
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContract {
    pub contract_number: String,
    pub contract_date: NaiveDate,
    pub contract_value: f64,
    pub payment_method: String,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewContract {
    /// Validate the input; every failure is client-visible, nothing is clamped
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.contract_number.trim().is_empty() {
            return Err(ContractError::InvalidContractParameters(
                "contract number must not be empty".to_string(),
            ));
        }
        if !(self.contract_value > 0.0) {
            return Err(ContractError::InvalidContractParameters(
                "contract value must be greater than 0".to_string(),
            ));
        }
        PaymentPolicy::resolve(&self.payment_method)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_contract() -> NewContract {
        NewContract {
            contract_number: "CNT-2025-010".to_string(),
            contract_date: NaiveDate::from_ymd_opt(2025, 1, 22).unwrap(),
            contract_value: 10_000.0,
            payment_method: "PayPal".to_string(),
            client_name: Some("Cliente ABC".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(new_contract().validate().is_ok());
    }

    #[test]
    fn test_non_positive_value_rejected() {
        let mut input = new_contract();
        input.contract_value = 0.0;
        assert!(matches!(
            input.validate().unwrap_err(),
            ContractError::InvalidContractParameters(_)
        ));
    }

    #[test]
    fn test_unknown_payment_method_rejected() {
        let mut input = new_contract();
        input.payment_method = "Venmo".to_string();
        assert!(matches!(
            input.validate().unwrap_err(),
            ContractError::UnsupportedPolicy(_)
        ));
    }

    #[test]
    fn test_empty_contract_number_rejected() {
        let mut input = new_contract();
        input.contract_number = "  ".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_status_serializes_uppercase() {
        let json = serde_json::to_string(&ContractStatus::Active).unwrap();
        assert_eq!(json, "\"ACTIVE\"");
    }
}
