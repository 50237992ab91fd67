//! Report Module
//!
//! The aggregation layer on top of the simulator:
//! - Fold a simulation trace into a [`PayoffPlan`]
//! - Run and compare both strategies on the same inputs
//! - Compute the no-simulation [`PayoffSummary`] quick view
//!
//! # Critical Invariants
//!
//! 1. **Principal conservation**: `total_principal_paid` equals the sum of
//!    the input balances, whichever strategy produced the plan
//! 2. **Total consistency**: `total_payment = total_principal_paid +
//!    total_interest_paid`, exactly
//! 3. **Independent runs**: snowball and avalanche runs never share state;
//!    a non-amortizing failure names the strategy that hit it
//!
//! # Example
//!
//! ```rust
//! use debt_payoff_core_rs::{compare, DebtRecord, PayoffStrategy};
//!
//! let debts = vec![
//!     DebtRecord::with_id("card".to_string(), "Card".to_string(), 2_000.0, 0.30, 100.0),
//!     DebtRecord::with_id("loan".to_string(), "Loan".to_string(), 8_000.0, 0.12, 250.0),
//! ];
//!
//! let comparison = compare(&debts, 300.0).unwrap();
//! assert_eq!(comparison.snowball.debt_order[0], "card");
//! assert_eq!(comparison.avalanche.debt_order[0], "card");
//! ```

use crate::models::debt::DebtRecord;
use crate::models::plan::{PayoffComparison, PayoffPlan, PayoffSummary};
use crate::simulator::{
    ExtraPaymentPolicy, SimulationError, SimulationTrace, Simulator, SimulatorConfig,
};
use crate::strategy::PayoffStrategy;

/// Fold a simulation trace into a payoff plan
///
/// `total_interest_paid` sums the interest portions of every ledger entry;
/// `total_principal_paid` is the sum of the input balances (what the whole
/// run amortized).
pub fn aggregate(trace: SimulationTrace) -> PayoffPlan {
    let total_interest_paid: f64 = trace
        .entries
        .iter()
        .map(|entry| entry.interest_portion)
        .sum();
    let total_principal_paid = trace.original_principal;

    PayoffPlan {
        method: trace.strategy,
        total_months: trace.total_months,
        total_interest_paid,
        total_principal_paid,
        total_payment: total_principal_paid + total_interest_paid,
        monthly_extra_payment: trace.extra_monthly_payment,
        monthly_payments: trace.entries,
        debt_order: trace.debt_order,
    }
}

/// Simulate one strategy with the default overflow policy
///
/// # Errors
///
/// [`SimulationError::InvalidDebt`] for bad input records,
/// [`SimulationError::NonAmortizing`] if payments cannot amortize the debts
/// within the safety bound.
pub fn simulate(
    debts: &[DebtRecord],
    extra_monthly_payment: f64,
    strategy: PayoffStrategy,
) -> Result<PayoffPlan, SimulationError> {
    simulate_with_policy(
        debts,
        extra_monthly_payment,
        strategy,
        ExtraPaymentPolicy::default(),
    )
}

/// Simulate one strategy with an explicit extra-payment overflow policy
pub fn simulate_with_policy(
    debts: &[DebtRecord],
    extra_monthly_payment: f64,
    strategy: PayoffStrategy,
    policy: ExtraPaymentPolicy,
) -> Result<PayoffPlan, SimulationError> {
    let config =
        SimulatorConfig::new(strategy, extra_monthly_payment).with_extra_payment_policy(policy);
    let trace = Simulator::new(debts, config)?.run()?;
    Ok(aggregate(trace))
}

/// Run both strategies on the same inputs and recommend one
///
/// Recommendation policy: avalanche whenever it strictly saves interest over
/// snowball; otherwise snowball. An equal-interest tie resolves to snowball
/// (the motivational default), not a numeric artifact.
///
/// # Errors
///
/// A [`SimulationError::NonAmortizing`] failure names the strategy that hit
/// the bound; callers wanting the surviving plan can run [`simulate`] for
/// the other strategy directly.
pub fn compare(
    debts: &[DebtRecord],
    extra_monthly_payment: f64,
) -> Result<PayoffComparison, SimulationError> {
    compare_with_policy(debts, extra_monthly_payment, ExtraPaymentPolicy::default())
}

/// [`compare`] with an explicit extra-payment overflow policy
pub fn compare_with_policy(
    debts: &[DebtRecord],
    extra_monthly_payment: f64,
    policy: ExtraPaymentPolicy,
) -> Result<PayoffComparison, SimulationError> {
    let snowball =
        simulate_with_policy(debts, extra_monthly_payment, PayoffStrategy::Snowball, policy)?;
    let avalanche = simulate_with_policy(
        debts,
        extra_monthly_payment,
        PayoffStrategy::Avalanche,
        policy,
    )?;

    let months_difference = snowball.total_months as i64 - avalanche.total_months as i64;
    let interest_difference = snowball.total_interest_paid - avalanche.total_interest_paid;

    let recommended_method = if interest_difference > 0.0 {
        PayoffStrategy::Avalanche
    } else {
        PayoffStrategy::Snowball
    };

    Ok(PayoffComparison {
        snowball,
        avalanche,
        months_difference,
        interest_difference,
        recommended_method,
    })
}

/// Aggregate quick view over a debt list, no simulation
///
/// `available_extra_payment` is the budget left after expenses and all
/// minimum payments, clamped at zero.
pub fn summarize(
    debts: &[DebtRecord],
    monthly_income: f64,
    monthly_expenses: f64,
) -> PayoffSummary {
    let total_debts = debts.len();
    let total_balance: f64 = debts.iter().map(|debt| debt.balance()).sum();
    let total_minimum_payment: f64 = debts.iter().map(|debt| debt.minimum_payment()).sum();
    let average_interest_rate = if total_debts == 0 {
        0.0
    } else {
        debts
            .iter()
            .map(|debt| debt.annual_interest_rate())
            .sum::<f64>()
            / total_debts as f64
    };
    let available_extra_payment =
        (monthly_income - monthly_expenses - total_minimum_payment).max(0.0);

    PayoffSummary {
        total_debts,
        total_balance,
        total_minimum_payment,
        average_interest_rate,
        available_extra_payment,
    }
}
