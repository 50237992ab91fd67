//! Amortization Simulator Engine
//!
//! Month loop advancing every debt until all balances reach zero:
//!
//! ```text
//! For each month m:
//! 1. Accrue interest on every active debt (annual rate / 12)
//! 2. Apply scheduled minimum payments (capped at what extinguishes the debt)
//! 3. Pick the target debt: first debt in the fixed strategy order still active
//! 4. Apply the extra monthly budget to the target (optionally cascading)
//! 5. Record a ledger entry for every debt that paid anything
//! 6. Stop when no debt is active, or fail once the safety bound is hit
//! ```
//!
//! The simulator owns its [`SimulationState`] for the duration of one run and
//! consumes itself on [`Simulator::run`], so state is never shared across
//! runs. Hosts that animate the schedule month by month can instead drive
//! [`Simulator::step_month`] directly and read the per-month [`MonthResult`].
//!
//! # Example
//!
//! ```rust
//! use debt_payoff_core_rs::simulator::{Simulator, SimulatorConfig};
//! use debt_payoff_core_rs::{DebtRecord, PayoffStrategy};
//!
//! let debts = vec![
//!     DebtRecord::with_id("card".to_string(), "Card".to_string(), 1_000.0, 0.0, 100.0),
//! ];
//!
//! let config = SimulatorConfig::new(PayoffStrategy::Snowball, 0.0);
//! let trace = Simulator::new(&debts, config).unwrap().run().unwrap();
//!
//! assert_eq!(trace.total_months, 10);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::debt::DebtRecord;
use crate::models::entry::MonthlyPaymentEntry;
use crate::models::state::SimulationState;
use crate::strategy::{payoff_order, PayoffStrategy};
use std::collections::HashMap;

/// Safety bound on simulated months (50 years)
///
/// A run that has not fully amortized by this point indicates payments are
/// insufficient to cover interest; the run fails with
/// [`SimulationError::NonAmortizing`] instead of looping forever.
pub const MAX_CALCULATION_MONTHS: usize = 600;

/// What happens to the unused part of the extra budget when the target debt's
/// balance is smaller than the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraPaymentPolicy {
    /// The whole budget targets a single debt; any remainder is forfeited for
    /// that month. This is the default.
    SingleTarget,

    /// The remainder rolls over to the next active debt in strategy order
    /// within the same month, repeating until the budget is exhausted.
    Cascade,
}

impl Default for ExtraPaymentPolicy {
    fn default() -> Self {
        ExtraPaymentPolicy::SingleTarget
    }
}

/// Configuration for one simulation run
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Debt allocation strategy
    pub strategy: PayoffStrategy,

    /// Extra monthly budget beyond all minimum payments
    pub extra_monthly_payment: f64,

    /// Overflow handling for the extra budget
    pub extra_payment_policy: ExtraPaymentPolicy,

    /// Safety bound on simulated months
    pub max_months: usize,
}

impl SimulatorConfig {
    /// Configuration with the default overflow policy and safety bound
    pub fn new(strategy: PayoffStrategy, extra_monthly_payment: f64) -> Self {
        Self {
            strategy,
            extra_monthly_payment,
            extra_payment_policy: ExtraPaymentPolicy::default(),
            max_months: MAX_CALCULATION_MONTHS,
        }
    }

    /// Builder: select an overflow policy for the extra budget
    pub fn with_extra_payment_policy(mut self, policy: ExtraPaymentPolicy) -> Self {
        self.extra_payment_policy = policy;
        self
    }
}

/// Simulation error types
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// A debt record failed validation; nothing was simulated
    #[error("invalid debt record {debt_id}: {reason}")]
    InvalidDebt { debt_id: String, reason: String },

    /// The safety bound was hit before all balances reached zero
    #[error("{strategy} plan does not amortize within {months} months; payments are insufficient to cover interest")]
    NonAmortizing {
        strategy: PayoffStrategy,
        months: usize,
    },
}

/// Result of a single simulated month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthResult {
    /// Month number (1-based)
    pub month: usize,

    /// Total paid across all debts this month
    pub total_paid: f64,

    /// Principal portion of this month's payments (includes extra budget)
    pub principal_paid: f64,

    /// Interest portion of this month's payments
    pub interest_paid: f64,

    /// Extra budget actually applied this month
    pub extra_applied: f64,

    /// Debts whose balance reached zero this month
    pub debts_settled: usize,

    /// Sum of balances remaining after this month
    pub remaining_total: f64,
}

/// Complete output of one simulation run
///
/// The raw trace consumed by the plan aggregator; hosts normally receive the
/// aggregated [`crate::PayoffPlan`] instead.
#[derive(Debug, Clone)]
pub struct SimulationTrace {
    /// Strategy the run was ordered by
    pub strategy: PayoffStrategy,

    /// Extra monthly budget the run was configured with
    pub extra_monthly_payment: f64,

    /// Debt ids in the fixed priority order used for the whole run
    pub debt_order: Vec<String>,

    /// Every payment entry, chronological then by processing order
    pub entries: Vec<MonthlyPaymentEntry>,

    /// Months until full payoff (0 for an empty run)
    pub total_months: usize,

    /// Sum of the input balances at the start of the run
    pub original_principal: f64,
}

/// Month-by-month amortization simulator for one debt list and one strategy
#[derive(Debug)]
pub struct Simulator {
    /// Active debts in strategy processing order
    debts: Vec<DebtRecord>,

    /// Fixed priority order (ids of `debts`, same order)
    debt_order: Vec<String>,

    /// Remaining balance per debt, owned by this run
    state: SimulationState,

    /// Run configuration
    config: SimulatorConfig,

    /// Months completed so far
    month: usize,

    /// Ledger of all payments recorded so far
    entries: Vec<MonthlyPaymentEntry>,

    /// Sum of the input balances at the start of the run
    original_principal: f64,
}

impl Simulator {
    /// Create a simulator for a debt list
    ///
    /// Validates every record up front (fail fast, no partial results),
    /// computes the fixed strategy order once, and seeds the per-run state.
    /// Debts with zero balance are excluded from the run.
    ///
    /// # Errors
    ///
    /// [`SimulationError::InvalidDebt`] if any record carries a negative or
    /// non-finite balance, rate, or minimum payment.
    pub fn new(debts: &[DebtRecord], config: SimulatorConfig) -> Result<Self, SimulationError> {
        for debt in debts {
            debt.validate().map_err(|e| SimulationError::InvalidDebt {
                debt_id: debt.id().to_string(),
                reason: e.to_string(),
            })?;
        }

        let debt_order = payoff_order(debts, config.strategy);

        // Index once; the month loop never re-scans the input list.
        let by_id: HashMap<&str, &DebtRecord> =
            debts.iter().map(|debt| (debt.id(), debt)).collect();
        let ordered: Vec<DebtRecord> = debt_order
            .iter()
            .map(|id| (*by_id[id.as_str()]).clone())
            .collect();

        let state = SimulationState::new(&ordered);
        let original_principal = ordered.iter().map(|debt| debt.balance()).sum();

        Ok(Self {
            debts: ordered,
            debt_order,
            state,
            config,
            month: 0,
            entries: Vec::new(),
            original_principal,
        })
    }

    /// Whether every debt has reached zero balance
    pub fn is_complete(&self) -> bool {
        !self.state.any_active()
    }

    /// Months completed so far
    pub fn current_month(&self) -> usize {
        self.month
    }

    /// Remaining balances for the run so far
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Fixed priority order for this run
    pub fn debt_order(&self) -> &[String] {
        &self.debt_order
    }

    /// Ledger entries recorded so far
    pub fn entries(&self) -> &[MonthlyPaymentEntry] {
        &self.entries
    }

    /// Advance the simulation by one month
    ///
    /// Applies interest and scheduled minimum payments to every active debt,
    /// then the extra budget to the target debt per the overflow policy, and
    /// records ledger entries. A no-op returning an empty result once the
    /// run is complete.
    pub fn step_month(&mut self) -> MonthResult {
        if self.is_complete() {
            return MonthResult {
                month: self.month,
                total_paid: 0.0,
                principal_paid: 0.0,
                interest_paid: 0.0,
                extra_applied: 0.0,
                debts_settled: 0,
                remaining_total: 0.0,
            };
        }

        self.month += 1;
        let month = self.month;

        // Entries for this month, keyed by debt position so the ledger stays
        // in processing order even when the extra budget creates an entry for
        // a debt that had no scheduled payment.
        let mut month_entries: Vec<(usize, MonthlyPaymentEntry)> = Vec::new();

        // Interest accrual + scheduled minimum payments, in strategy order.
        for (idx, debt) in self.debts.iter().enumerate() {
            let remaining = self.state.remaining(debt.id());
            if remaining <= 0.0 {
                continue;
            }

            let interest = remaining * debt.monthly_interest_rate();
            let minimum = debt.minimum_payment();

            let (scheduled, principal) = if minimum >= remaining + interest {
                // Final payment: sized to land the balance exactly on zero.
                (remaining + interest, remaining)
            } else if minimum >= interest {
                (minimum, minimum - interest)
            } else {
                // Payment does not cover interest; shortfall capitalizes.
                (minimum, 0.0)
            };

            if principal > 0.0 {
                self.state.reduce(debt.id(), principal);
            } else if interest > scheduled {
                self.state.capitalize(debt.id(), interest - scheduled);
            }

            if scheduled > 0.0 {
                month_entries.push((
                    idx,
                    MonthlyPaymentEntry {
                        month,
                        debt_id: debt.id().to_string(),
                        debt_name: debt.name().to_string(),
                        principal_portion: principal,
                        interest_portion: scheduled - principal,
                        total_payment: scheduled,
                        remaining_balance_after_payment: self.state.remaining(debt.id()),
                        is_fully_paid_this_month: false, // finalized below
                    },
                ));
            }
        }

        // Extra budget to the first still-active debt in strategy order.
        let mut extra_applied = 0.0;
        let mut budget = self.config.extra_monthly_payment;
        if budget > 0.0 {
            for (idx, debt) in self.debts.iter().enumerate() {
                let remaining = self.state.remaining(debt.id());
                if remaining <= 0.0 {
                    continue;
                }

                let applied = budget.min(remaining);
                self.state.reduce(debt.id(), applied);
                extra_applied += applied;
                let after = self.state.remaining(debt.id());

                match month_entries.iter().position(|(slot, _)| *slot == idx) {
                    Some(pos) => {
                        let entry = &mut month_entries[pos].1;
                        entry.principal_portion += applied;
                        entry.total_payment += applied;
                        entry.remaining_balance_after_payment = after;
                    }
                    None => month_entries.push((
                        idx,
                        MonthlyPaymentEntry {
                            month,
                            debt_id: debt.id().to_string(),
                            debt_name: debt.name().to_string(),
                            principal_portion: applied,
                            interest_portion: 0.0,
                            total_payment: applied,
                            remaining_balance_after_payment: after,
                            is_fully_paid_this_month: false,
                        },
                    )),
                }

                match self.config.extra_payment_policy {
                    // Single pool, single target: the remainder is forfeited
                    // for this month.
                    ExtraPaymentPolicy::SingleTarget => break,
                    ExtraPaymentPolicy::Cascade => {
                        budget -= applied;
                        if budget <= 0.0 {
                            break;
                        }
                    }
                }
            }
        }

        month_entries.sort_by_key(|(idx, _)| *idx);

        let mut principal_paid = 0.0;
        let mut interest_paid = 0.0;
        let mut debts_settled = 0;
        for (_, entry) in month_entries.iter_mut() {
            entry.is_fully_paid_this_month = entry.remaining_balance_after_payment == 0.0;
            if entry.is_fully_paid_this_month {
                debts_settled += 1;
            }
            principal_paid += entry.principal_portion;
            interest_paid += entry.interest_portion;
        }

        self.entries
            .extend(month_entries.into_iter().map(|(_, entry)| entry));

        MonthResult {
            month,
            total_paid: principal_paid + interest_paid,
            principal_paid,
            interest_paid,
            extra_applied,
            debts_settled,
            remaining_total: self.state.total_remaining(),
        }
    }

    /// Run the simulation to completion and return the full trace
    ///
    /// # Errors
    ///
    /// [`SimulationError::NonAmortizing`] if the safety bound is reached
    /// before every balance hits zero.
    pub fn run(mut self) -> Result<SimulationTrace, SimulationError> {
        while !self.is_complete() {
            if self.month >= self.config.max_months {
                return Err(SimulationError::NonAmortizing {
                    strategy: self.config.strategy,
                    months: self.month,
                });
            }
            self.step_month();
        }

        Ok(SimulationTrace {
            strategy: self.config.strategy,
            extra_monthly_payment: self.config.extra_monthly_payment,
            debt_order: self.debt_order,
            entries: self.entries,
            total_months: self.month,
            original_principal: self.original_principal,
        })
    }
}
