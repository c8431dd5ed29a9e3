//! Schedule output structures for installment projections

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single projected installment for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    /// 1-based sequence number within the schedule
    pub number: u32,

    /// Payment due date, one calendar month per installment after the contract date
    pub due_date: NaiveDate,

    /// Straight-line principal portion, rounded to 2 decimals
    pub base_value: f64,

    /// Interest on the pending balance for the period, rounded to 2 decimals
    pub interest: f64,

    /// Payment-service fee on (base + interest), rounded to 2 decimals
    pub fee: f64,

    /// Final amount due: base + interest + fee, rounded to 2 decimals
    pub total_value: f64,
}

/// Complete projection output: the ordered installment sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub installments: Vec<Installment>,
}

impl Schedule {
    pub fn new() -> Self {
        Self { installments: Vec::new() }
    }

    /// Add an installment row
    pub fn add_row(&mut self, row: Installment) {
        self.installments.push(row);
    }

    pub fn len(&self) -> usize {
        self.installments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }

    /// Aggregate totals across the schedule
    pub fn summary(&self) -> ScheduleSummary {
        let base_total: f64 = self.installments.iter().map(|r| r.base_value).sum();
        let total_interest: f64 = self.installments.iter().map(|r| r.interest).sum();
        let total_fee: f64 = self.installments.iter().map(|r| r.fee).sum();
        let total_amount: f64 = self.installments.iter().map(|r| r.total_value).sum();

        ScheduleSummary {
            total_months: self.installments.len() as u32,
            base_total,
            total_interest,
            total_fee,
            total_amount,
        }
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary totals for a projected schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub total_months: u32,
    pub base_total: f64,
    pub total_interest: f64,
    pub total_fee: f64,
    pub total_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn row(number: u32, base: f64, interest: f64, fee: f64) -> Installment {
        Installment {
            number,
            due_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            base_value: base,
            interest,
            fee,
            total_value: base + interest + fee,
        }
    }

    #[test]
    fn test_summary_sums_rows() {
        let mut schedule = Schedule::new();
        schedule.add_row(row(1, 500.0, 50.0, 11.0));
        schedule.add_row(row(2, 500.0, 25.0, 10.5));

        let summary = schedule.summary();
        assert_eq!(summary.total_months, 2);
        assert_relative_eq!(summary.base_total, 1000.0);
        assert_relative_eq!(summary.total_interest, 75.0);
        assert_relative_eq!(summary.total_fee, 21.5);
        assert_relative_eq!(summary.total_amount, 1096.5);
    }

    #[test]
    fn test_empty_schedule_summary() {
        let summary = Schedule::new().summary();
        assert_eq!(summary.total_months, 0);
        assert_eq!(summary.total_amount, 0.0);
    }

    #[test]
    fn test_installment_serializes_iso_dates() {
        let json = serde_json::to_string(&row(1, 100.0, 1.0, 2.0)).unwrap();
        assert!(json.contains("\"dueDate\":\"2025-02-01\""));
        assert!(json.contains("\"baseValue\":100.0"));
    }
}
