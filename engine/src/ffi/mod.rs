//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings for exposing the payoff engine to a Python host.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only the three entry points cross
//! 2. **Simple types**: JSON strings and primitives at the boundary
//! 3. **Validate inputs**: Bad debts raise ValueError before any simulation
//! 4. **Safe errors**: Non-amortizing inputs raise RuntimeError
//! 5. **No references**: The host gets serialized copies, never Rust state

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::models::debt::DebtRecord;
use crate::report;
use crate::simulator::SimulationError;
use crate::strategy::PayoffStrategy;

fn parse_debts(debts_json: &str) -> PyResult<Vec<DebtRecord>> {
    serde_json::from_str(debts_json)
        .map_err(|e| PyValueError::new_err(format!("invalid debts JSON: {}", e)))
}

fn parse_strategy(strategy: &str) -> PyResult<PayoffStrategy> {
    strategy
        .parse()
        .map_err(|e: crate::strategy::ParseStrategyError| PyValueError::new_err(e.to_string()))
}

fn simulation_error_to_py(err: SimulationError) -> PyErr {
    match &err {
        SimulationError::InvalidDebt { .. } => PyValueError::new_err(err.to_string()),
        SimulationError::NonAmortizing { .. } => PyRuntimeError::new_err(err.to_string()),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value)
        .map_err(|e| PyRuntimeError::new_err(format!("serialization failed: {}", e)))
}

/// Simulate one strategy over a JSON debt list
///
/// # Arguments
///
/// * `debts_json` - JSON array of debt records
/// * `extra_monthly_payment` - Extra budget beyond all minimum payments
/// * `strategy` - `"snowball"` or `"avalanche"`
///
/// # Returns
///
/// The payoff plan as a JSON string
#[pyfunction]
pub fn simulate_json(
    debts_json: &str,
    extra_monthly_payment: f64,
    strategy: &str,
) -> PyResult<String> {
    let debts = parse_debts(debts_json)?;
    let strategy = parse_strategy(strategy)?;
    let plan = report::simulate(&debts, extra_monthly_payment, strategy)
        .map_err(simulation_error_to_py)?;
    to_json(&plan)
}

/// Run both strategies over a JSON debt list and compare them
///
/// # Returns
///
/// The payoff comparison (both plans plus the recommendation) as a JSON
/// string
#[pyfunction]
pub fn compare_json(debts_json: &str, extra_monthly_payment: f64) -> PyResult<String> {
    let debts = parse_debts(debts_json)?;
    let comparison =
        report::compare(&debts, extra_monthly_payment).map_err(simulation_error_to_py)?;
    to_json(&comparison)
}

/// Compute the quick summary over a JSON debt list, no simulation
///
/// # Returns
///
/// The payoff summary as a JSON string
#[pyfunction]
pub fn summarize_json(
    debts_json: &str,
    monthly_income: f64,
    monthly_expenses: f64,
) -> PyResult<String> {
    let debts = parse_debts(debts_json)?;
    let summary = report::summarize(&debts, monthly_income, monthly_expenses);
    to_json(&summary)
}
