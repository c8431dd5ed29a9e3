//! Payment-service policies and name resolution

mod data;

pub use data::PaymentPolicy;
