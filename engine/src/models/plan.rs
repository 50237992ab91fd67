//! Payoff plan outputs
//!
//! The records returned to the caller: a full plan per strategy run, a
//! comparison across the two strategies, and a no-simulation quick summary.
//! All of these serialize round-trip; the host application owns persistence
//! and display formatting.

use serde::{Deserialize, Serialize};

use crate::models::entry::MonthlyPaymentEntry;
use crate::strategy::PayoffStrategy;

/// Complete payoff plan for one strategy run
///
/// # Invariants
///
/// 1. `total_payment == total_principal_paid + total_interest_paid`
/// 2. `total_principal_paid` equals the sum of the input balances
/// 3. `total_months` is the highest month appearing in `monthly_payments`
///    (0 for an empty schedule)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffPlan {
    /// Strategy that produced this plan
    pub method: PayoffStrategy,

    /// Months until every debt reaches zero
    pub total_months: usize,

    /// Interest paid across the whole schedule
    pub total_interest_paid: f64,

    /// Principal paid across the whole schedule (sum of input balances)
    pub total_principal_paid: f64,

    /// Total paid (`total_principal_paid + total_interest_paid`)
    pub total_payment: f64,

    /// Extra monthly budget the plan was computed with, unchanged
    pub monthly_extra_payment: f64,

    /// Full schedule, chronological then by processing order within a month
    pub monthly_payments: Vec<MonthlyPaymentEntry>,

    /// Debt ids in the strategy's fixed priority order
    pub debt_order: Vec<String>,
}

impl PayoffPlan {
    /// Month in which a debt is fully paid off, if it appears in the schedule
    pub fn payoff_month_of(&self, debt_id: &str) -> Option<usize> {
        self.monthly_payments
            .iter()
            .find(|entry| entry.is_fully_paid_this_month && entry.debt_id == debt_id)
            .map(|entry| entry.month)
    }

    /// All entries for one simulated month, in processing order
    pub fn entries_for_month(&self, month: usize) -> Vec<&MonthlyPaymentEntry> {
        self.monthly_payments
            .iter()
            .filter(|entry| entry.month == month)
            .collect()
    }
}

/// Side-by-side comparison of the two strategies on the same inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffComparison {
    /// Plan produced by the snowball strategy
    pub snowball: PayoffPlan,

    /// Plan produced by the avalanche strategy
    pub avalanche: PayoffPlan,

    /// `snowball.total_months - avalanche.total_months`
    pub months_difference: i64,

    /// `snowball.total_interest_paid - avalanche.total_interest_paid`
    pub interest_difference: f64,

    /// Recommended strategy per the comparison policy
    pub recommended_method: PayoffStrategy,
}

impl PayoffComparison {
    /// The plan belonging to the recommended strategy
    pub fn recommended_plan(&self) -> &PayoffPlan {
        match self.recommended_method {
            PayoffStrategy::Snowball => &self.snowball,
            PayoffStrategy::Avalanche => &self.avalanche,
        }
    }
}

/// Quick aggregate view over a debt list, no simulation involved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffSummary {
    /// Number of debts in the input list
    pub total_debts: usize,

    /// Sum of all balances
    pub total_balance: f64,

    /// Sum of all contractual minimum payments
    pub total_minimum_payment: f64,

    /// Mean annual interest rate (0.0 for an empty list)
    pub average_interest_rate: f64,

    /// Budget left for extra payments:
    /// `max(0, income - expenses - total_minimum_payment)`
    pub available_extra_payment: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(month: usize, debt_id: &str, paid_off: bool) -> MonthlyPaymentEntry {
        MonthlyPaymentEntry {
            month,
            debt_id: debt_id.to_string(),
            debt_name: debt_id.to_string(),
            principal_portion: 90.0,
            interest_portion: 10.0,
            total_payment: 100.0,
            remaining_balance_after_payment: if paid_off { 0.0 } else { 100.0 },
            is_fully_paid_this_month: paid_off,
        }
    }

    fn plan(entries: Vec<MonthlyPaymentEntry>) -> PayoffPlan {
        PayoffPlan {
            method: PayoffStrategy::Snowball,
            total_months: entries.iter().map(|e| e.month).max().unwrap_or(0),
            total_interest_paid: 0.0,
            total_principal_paid: 0.0,
            total_payment: 0.0,
            monthly_extra_payment: 0.0,
            monthly_payments: entries,
            debt_order: vec![],
        }
    }

    #[test]
    fn test_payoff_month_of() {
        let plan = plan(vec![
            entry(1, "a", false),
            entry(1, "b", false),
            entry(2, "a", true),
            entry(3, "b", true),
        ]);

        assert_eq!(plan.payoff_month_of("a"), Some(2));
        assert_eq!(plan.payoff_month_of("b"), Some(3));
        assert_eq!(plan.payoff_month_of("missing"), None);
    }

    #[test]
    fn test_entries_for_month() {
        let plan = plan(vec![
            entry(1, "a", false),
            entry(1, "b", false),
            entry(2, "a", true),
        ]);

        assert_eq!(plan.entries_for_month(1).len(), 2);
        assert_eq!(plan.entries_for_month(2).len(), 1);
        assert!(plan.entries_for_month(5).is_empty());
    }

    #[test]
    fn test_recommended_plan_follows_method() {
        let snowball = plan(vec![]);
        let mut avalanche = snowball.clone();
        avalanche.method = PayoffStrategy::Avalanche;

        let comparison = PayoffComparison {
            snowball: snowball.clone(),
            avalanche: avalanche.clone(),
            months_difference: 0,
            interest_difference: 0.0,
            recommended_method: PayoffStrategy::Avalanche,
        };

        assert_eq!(
            comparison.recommended_plan().method,
            PayoffStrategy::Avalanche
        );
    }

    #[test]
    fn test_plan_serde_round_trip() {
        let plan = plan(vec![entry(1, "a", true)]);

        let json = serde_json::to_string(&plan).unwrap();
        let back: PayoffPlan = serde_json::from_str(&json).unwrap();

        assert_eq!(back, plan);
        assert!(json.contains("\"snowball\""));
    }
}
