//! Payment-service policy definitions
//!
//! Each policy is a named pair of constant rates: a per-period interest rate
//! applied to the pending balance, and a fee rate applied to the installment
//! including interest. The set is closed; adding a provider means adding a
//! variant and covering the exhaustive matches.

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Payment service applied to an installment schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentPolicy {
    /// 1% interest on pending balance, 2% payment fee
    PayPal,
    /// 2% interest on pending balance, 1% payment fee
    PayOnline,
    /// 0.5% interest on pending balance, 1.5% payment fee
    Nequi,
}

impl PaymentPolicy {
    /// All recognized policies, in resolver order
    pub const ALL: [PaymentPolicy; 3] = [
        PaymentPolicy::PayPal,
        PaymentPolicy::PayOnline,
        PaymentPolicy::Nequi,
    ];

    /// Interest rate charged per period on the pending balance, in percent
    pub fn interest_rate_percent(&self) -> f64 {
        match self {
            PaymentPolicy::PayPal => 1.0,
            PaymentPolicy::PayOnline => 2.0,
            PaymentPolicy::Nequi => 0.5,
        }
    }

    /// Fee charged per period on (base + interest), in percent
    pub fn fee_percent(&self) -> f64 {
        match self {
            PaymentPolicy::PayPal => 2.0,
            PaymentPolicy::PayOnline => 1.0,
            PaymentPolicy::Nequi => 1.5,
        }
    }

    /// Display name matching the wire/storage representation
    pub fn name(&self) -> &'static str {
        match self {
            PaymentPolicy::PayPal => "PayPal",
            PaymentPolicy::PayOnline => "PayOnline",
            PaymentPolicy::Nequi => "Nequi",
        }
    }

    /// Resolve a policy from its name
    ///
    /// Case-sensitive exact match over the recognized set. Unknown names fail
    /// with `UnsupportedPolicy`; nothing is defaulted.
    pub fn resolve(name: &str) -> Result<Self, ContractError> {
        match name {
            "PayPal" => Ok(PaymentPolicy::PayPal),
            "PayOnline" => Ok(PaymentPolicy::PayOnline),
            "Nequi" => Ok(PaymentPolicy::Nequi),
            other => Err(ContractError::UnsupportedPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_policies() {
        assert_eq!(PaymentPolicy::resolve("PayPal").unwrap(), PaymentPolicy::PayPal);
        assert_eq!(PaymentPolicy::resolve("PayOnline").unwrap(), PaymentPolicy::PayOnline);
        assert_eq!(PaymentPolicy::resolve("Nequi").unwrap(), PaymentPolicy::Nequi);
    }

    #[test]
    fn test_resolve_unknown_policy() {
        let err = PaymentPolicy::resolve("Unknown").unwrap_err();
        assert!(matches!(err, ContractError::UnsupportedPolicy(ref name) if name == "Unknown"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(PaymentPolicy::resolve("paypal").is_err());
        assert!(PaymentPolicy::resolve("PAYPAL").is_err());
    }

    #[test]
    fn test_nequi_rates() {
        let policy = PaymentPolicy::resolve("Nequi").unwrap();
        assert_eq!(policy.interest_rate_percent(), 0.5);
        assert_eq!(policy.fee_percent(), 1.5);
    }

    #[test]
    fn test_names_round_trip() {
        for policy in PaymentPolicy::ALL {
            assert_eq!(PaymentPolicy::resolve(policy.name()).unwrap(), policy);
        }
    }
}
