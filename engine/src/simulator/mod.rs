//! Simulator - month-by-month amortization loop
//!
//! Advances every debt one simulated month at a time until all balances
//! reach zero or the safety bound is hit.
//!
//! See `engine.rs` for full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{
    ExtraPaymentPolicy, MonthResult, SimulationError, SimulationTrace, Simulator,
    SimulatorConfig, MAX_CALCULATION_MONTHS,
};
