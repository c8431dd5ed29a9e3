//! Contract records, request validation, and repository storage

mod data;
pub mod request;
mod storage;

pub use data::{Contract, ContractStatus, NewContract, MAX_TERM_MONTHS};
pub use request::ProjectionRequest;
pub use storage::{ContractRepository, JsonFileStore, MemoryStore};
