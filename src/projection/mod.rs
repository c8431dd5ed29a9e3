//! Installment projection engine and schedule output records

mod engine;
mod schedule;

pub use engine::ProjectionEngine;
pub use schedule::{Installment, Schedule, ScheduleSummary};
