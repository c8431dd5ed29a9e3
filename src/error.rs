//! Error types shared across the projection engine and contract boundary

use thiserror::Error;

/// Failures surfaced to callers of the library
#[derive(Debug, Error)]
pub enum ContractError {
    /// Principal or term outside the valid range; raised before any computation
    #[error("invalid contract parameters: {0}")]
    InvalidContractParameters(String),

    /// Payment method name not in the recognized set
    #[error("unsupported payment policy '{0}': expected PayPal, PayOnline or Nequi")]
    UnsupportedPolicy(String),

    /// Malformed date input at the request boundary
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Repository lookup for an id that does not exist
    #[error("contract {0} not found")]
    ContractNotFound(u32),

    /// I/O failure in the contract store
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Corrupt or unreadable store document
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
