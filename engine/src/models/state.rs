//! Simulation state
//!
//! Remaining balance per debt for one simulation run.
//!
//! # Critical Invariants
//!
//! 1. **Exclusive ownership**: each state belongs to exactly one simulator and
//!    is discarded with it; runs never share balances
//! 2. **Non-negative balances**: payments are capped so a balance never goes
//!    below zero
//! 3. **Exact payoff**: a debt leaves the active set only when its balance is
//!    exactly 0.0 (final payments are computed to extinguish, not approximate)

use crate::models::debt::DebtRecord;
use std::collections::HashMap;

/// Remaining balances for all debts in one simulation run
///
/// Built once per run from the debts with positive balance; already-settled
/// debts never enter the state.
///
/// # Example
///
/// ```rust
/// use debt_payoff_core_rs::{DebtRecord, SimulationState};
///
/// let debts = vec![
///     DebtRecord::with_id("a".to_string(), "Card".to_string(), 500.0, 0.2, 25.0),
///     DebtRecord::with_id("b".to_string(), "Paid".to_string(), 0.0, 0.1, 10.0),
/// ];
///
/// let state = SimulationState::new(&debts);
/// assert_eq!(state.num_active(), 1);
/// assert_eq!(state.remaining("a"), 500.0);
/// assert_eq!(state.remaining("b"), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Remaining balance per debt id
    balances: HashMap<String, f64>,
}

impl SimulationState {
    /// Create state for a new run
    ///
    /// Debts with zero balance are considered settled and excluded.
    pub fn new(debts: &[DebtRecord]) -> Self {
        let balances = debts
            .iter()
            .filter(|debt| !debt.is_settled())
            .map(|debt| (debt.id().to_string(), debt.balance()))
            .collect();

        Self { balances }
    }

    /// Remaining balance for a debt (0.0 for unknown or settled debts)
    pub fn remaining(&self, debt_id: &str) -> f64 {
        self.balances.get(debt_id).copied().unwrap_or(0.0)
    }

    /// Whether a debt still carries a positive balance
    pub fn is_active(&self, debt_id: &str) -> bool {
        self.remaining(debt_id) > 0.0
    }

    /// Whether any debt still carries a positive balance
    pub fn any_active(&self) -> bool {
        self.balances.values().any(|balance| *balance > 0.0)
    }

    /// Number of debts still carrying a positive balance
    pub fn num_active(&self) -> usize {
        self.balances.values().filter(|balance| **balance > 0.0).count()
    }

    /// Sum of all remaining balances
    pub fn total_remaining(&self) -> f64 {
        self.balances.values().sum()
    }

    /// Reduce a debt's balance by a principal amount
    ///
    /// The caller computes amounts that never overshoot; final payments are
    /// sized to land exactly on zero.
    pub fn reduce(&mut self, debt_id: &str, principal: f64) {
        if let Some(balance) = self.balances.get_mut(debt_id) {
            *balance -= principal;
        }
    }

    /// Grow a debt's balance by unpaid interest
    ///
    /// Used when the scheduled payment does not cover the month's interest;
    /// the shortfall capitalizes into the balance.
    pub fn capitalize(&mut self, debt_id: &str, shortfall: f64) {
        if let Some(balance) = self.balances.get_mut(debt_id) {
            *balance += shortfall;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debt(id: &str, balance: f64) -> DebtRecord {
        DebtRecord::with_id(id.to_string(), id.to_string(), balance, 0.2, 25.0)
    }

    #[test]
    fn test_new_excludes_settled_debts() {
        let debts = vec![debt("a", 100.0), debt("b", 0.0), debt("c", 50.0)];

        let state = SimulationState::new(&debts);

        assert_eq!(state.num_active(), 2);
        assert!(!state.is_active("b"));
        assert_eq!(state.total_remaining(), 150.0);
    }

    #[test]
    fn test_reduce_to_exact_zero() {
        let debts = vec![debt("a", 100.0)];
        let mut state = SimulationState::new(&debts);

        state.reduce("a", 100.0);

        assert_eq!(state.remaining("a"), 0.0);
        assert!(!state.any_active());
    }

    #[test]
    fn test_capitalize_grows_balance() {
        let debts = vec![debt("a", 100.0)];
        let mut state = SimulationState::new(&debts);

        state.capitalize("a", 5.0);

        assert_eq!(state.remaining("a"), 105.0);
    }

    #[test]
    fn test_unknown_debt_is_inactive() {
        let state = SimulationState::new(&[]);

        assert_eq!(state.remaining("missing"), 0.0);
        assert!(!state.is_active("missing"));
        assert!(!state.any_active());
    }
}
