//! Domain models for the payoff engine

pub mod debt;
pub mod entry;
pub mod plan;
pub mod state;

// Re-exports
pub use debt::{DebtError, DebtRecord};
pub use entry::MonthlyPaymentEntry;
pub use plan::{PayoffComparison, PayoffPlan, PayoffSummary};
pub use state::SimulationState;
