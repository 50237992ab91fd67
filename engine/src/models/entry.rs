//! Monthly payment ledger entry
//!
//! One entry is recorded per debt per simulated month in which that debt
//! received any payment. The full sequence of entries is the simulation
//! trace: it is enough to replay the whole schedule, audit the totals, or
//! render a month-by-month payoff calendar in the host application.

use serde::{Deserialize, Serialize};

/// A single debt's payment activity for one simulated month
///
/// Invariant: `total_payment == principal_portion + interest_portion`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPaymentEntry {
    /// Simulated month, 1-based and sequential
    pub month: usize,

    /// Debt this entry belongs to
    pub debt_id: String,

    /// Debt display name (denormalized so the schedule renders without lookups)
    pub debt_name: String,

    /// Portion of the payment that reduced the balance (includes any extra
    /// budget applied to this debt this month)
    pub principal_portion: f64,

    /// Portion of the payment that covered accrued interest
    pub interest_portion: f64,

    /// Total paid this month (`principal_portion + interest_portion`)
    pub total_payment: f64,

    /// Balance remaining after this month's payments
    pub remaining_balance_after_payment: f64,

    /// True iff the balance reached exactly zero this month
    pub is_fully_paid_this_month: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_round_trip() {
        let entry = MonthlyPaymentEntry {
            month: 3,
            debt_id: "d1".to_string(),
            debt_name: "Car loan".to_string(),
            principal_portion: 180.0,
            interest_portion: 20.0,
            total_payment: 200.0,
            remaining_balance_after_payment: 0.0,
            is_fully_paid_this_month: true,
        };

        let json = serde_json::to_string(&entry).unwrap();
        let back: MonthlyPaymentEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(back, entry);
    }
}
