//! Payoff Strategy Module
//!
//! Determines the fixed priority order in which debts receive the extra
//! monthly budget. The order is computed once at the start of a run and
//! never changes while the simulation advances.
//!
//! Two strategies are supported:
//! 1. **Snowball**: smallest balance first (motivational quick wins)
//! 2. **Avalanche**: highest interest rate first (minimizes interest paid)
//!
//! Ties are broken by original input order (stable sort), so the ordering is
//! deterministic for a given input list: it depends only on the debt values,
//! never on wall-clock time or randomness.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::debt::DebtRecord;

/// Debt allocation strategy
///
/// A closed two-variant enum rather than an open string, so comparison code
/// is exhaustiveness-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    /// Pay the smallest balance first
    Snowball,

    /// Pay the highest interest rate first
    Avalanche,
}

impl PayoffStrategy {
    /// Canonical lowercase name ("snowball" / "avalanche")
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffStrategy::Snowball => "snowball",
            PayoffStrategy::Avalanche => "avalanche",
        }
    }
}

impl fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized strategy names
#[derive(Debug, Error, PartialEq)]
#[error("unknown payoff strategy: {0:?} (expected \"snowball\" or \"avalanche\")")]
pub struct ParseStrategyError(String);

impl FromStr for PayoffStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "snowball" => Ok(PayoffStrategy::Snowball),
            "avalanche" => Ok(PayoffStrategy::Avalanche),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

/// Compute the fixed priority order of debts for one strategy
///
/// Debts with zero balance are excluded before ordering and never appear in
/// a simulation. Returns debt ids, highest priority first.
///
/// # Example
///
/// ```rust
/// use debt_payoff_core_rs::{payoff_order, DebtRecord, PayoffStrategy};
///
/// let debts = vec![
///     DebtRecord::with_id("big".to_string(), "Big".to_string(), 9_000.0, 0.10, 200.0),
///     DebtRecord::with_id("small".to_string(), "Small".to_string(), 1_000.0, 0.30, 50.0),
/// ];
///
/// let order = payoff_order(&debts, PayoffStrategy::Snowball);
/// assert_eq!(order, vec!["small".to_string(), "big".to_string()]);
/// ```
pub fn payoff_order(debts: &[DebtRecord], strategy: PayoffStrategy) -> Vec<String> {
    let mut active: Vec<&DebtRecord> = debts.iter().filter(|debt| !debt.is_settled()).collect();

    // Stable sorts keep input order on ties.
    match strategy {
        PayoffStrategy::Snowball => active.sort_by(|a, b| {
            a.balance()
                .partial_cmp(&b.balance())
                .unwrap_or(Ordering::Equal)
        }),
        PayoffStrategy::Avalanche => active.sort_by(|a, b| {
            b.annual_interest_rate()
                .partial_cmp(&a.annual_interest_rate())
                .unwrap_or(Ordering::Equal)
        }),
    }

    active.iter().map(|debt| debt.id().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debt(id: &str, balance: f64, rate: f64) -> DebtRecord {
        DebtRecord::with_id(id.to_string(), id.to_string(), balance, rate, 50.0)
    }

    #[test]
    fn test_snowball_orders_by_ascending_balance() {
        let debts = vec![
            debt("a", 5_000.0, 0.10),
            debt("b", 1_000.0, 0.20),
            debt("c", 3_000.0, 0.30),
        ];

        let order = payoff_order(&debts, PayoffStrategy::Snowball);

        assert_eq!(order, vec!["b".to_string(), "a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_avalanche_orders_by_descending_rate() {
        let debts = vec![
            debt("a", 5_000.0, 0.10),
            debt("b", 1_000.0, 0.20),
            debt("c", 3_000.0, 0.30),
        ];

        let order = payoff_order(&debts, PayoffStrategy::Avalanche);

        assert_eq!(order, vec!["c".to_string(), "b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let debts = vec![
            debt("first", 1_000.0, 0.20),
            debt("second", 1_000.0, 0.20),
            debt("third", 1_000.0, 0.20),
        ];

        let snowball = payoff_order(&debts, PayoffStrategy::Snowball);
        let avalanche = payoff_order(&debts, PayoffStrategy::Avalanche);

        let expected: Vec<String> = vec!["first".into(), "second".into(), "third".into()];
        assert_eq!(snowball, expected);
        assert_eq!(avalanche, expected);
    }

    #[test]
    fn test_settled_debts_are_excluded() {
        let debts = vec![debt("a", 0.0, 0.50), debt("b", 1_000.0, 0.20)];

        let order = payoff_order(&debts, PayoffStrategy::Avalanche);

        assert_eq!(order, vec!["b".to_string()]);
    }

    #[test]
    fn test_strategy_parse_and_display() {
        assert_eq!("snowball".parse::<PayoffStrategy>().unwrap(), PayoffStrategy::Snowball);
        assert_eq!("avalanche".parse::<PayoffStrategy>().unwrap(), PayoffStrategy::Avalanche);
        assert!("biggest-first".parse::<PayoffStrategy>().is_err());

        assert_eq!(PayoffStrategy::Snowball.to_string(), "snowball");
        assert_eq!(PayoffStrategy::Avalanche.to_string(), "avalanche");
    }

    #[test]
    fn test_strategy_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&PayoffStrategy::Avalanche).unwrap();
        assert_eq!(json, "\"avalanche\"");

        let back: PayoffStrategy = serde_json::from_str("\"snowball\"").unwrap();
        assert_eq!(back, PayoffStrategy::Snowball);
    }
}
