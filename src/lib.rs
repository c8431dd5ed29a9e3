//! Contract System - installment projection engine for financed contracts
//!
//! This library provides:
//! - Deterministic monthly installment projections with per-period interest and fees
//! - A closed set of payment-service policies (PayPal, PayOnline, Nequi)
//! - Contract records with a pluggable repository (JSON file store included)
//! - Batch portfolio reporting across a stored contract book

pub mod error;
pub mod policy;
pub mod projection;
pub mod contract;
pub mod report;

// Re-export commonly used types
pub use error::ContractError;
pub use policy::PaymentPolicy;
pub use projection::{ProjectionEngine, Installment, Schedule, ScheduleSummary};
pub use contract::{Contract, ContractStatus, NewContract, ContractRepository, JsonFileStore, MemoryStore};
pub use report::PortfolioReport;
