//! Debt Payoff Core - Rust Engine
//!
//! Debt amortization and payoff-strategy simulation with deterministic
//! execution.
//!
//! # Architecture
//!
//! - **models**: Domain types (DebtRecord, MonthlyPaymentEntry, plans, state)
//! - **strategy**: Payoff strategies and the fixed debt ordering
//! - **simulator**: Month-by-month amortization loop
//! - **report**: Plan aggregation, strategy comparison, quick summary
//!
//! # Critical Invariants
//!
//! 1. All money values are f64; rounding happens at presentation time only
//! 2. Simulation is deterministic: outputs depend only on the inputs, never
//!    on wall-clock time or randomness
//! 3. FFI boundary is minimal and safe

// Module declarations
pub mod models;
pub mod report;
pub mod simulator;
pub mod strategy;

// Re-exports for convenience
pub use models::{
    debt::{DebtError, DebtRecord},
    entry::MonthlyPaymentEntry,
    plan::{PayoffComparison, PayoffPlan, PayoffSummary},
    state::SimulationState,
};
pub use report::{
    aggregate, compare, compare_with_policy, simulate, simulate_with_policy, summarize,
};
pub use simulator::{
    ExtraPaymentPolicy, MonthResult, SimulationError, SimulationTrace, Simulator,
    SimulatorConfig, MAX_CALCULATION_MONTHS,
};
pub use strategy::{payoff_order, ParseStrategyError, PayoffStrategy};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn debt_payoff_core_rs(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::simulate_json, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::compare_json, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::summarize_json, m)?)?;
    m.add("MAX_CALCULATION_MONTHS", MAX_CALCULATION_MONTHS)?;
    Ok(())
}
