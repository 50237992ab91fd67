//! Debt record model
//!
//! Represents a single debt tracked by the host application.
//! Each debt has:
//! - A unique identifier (UUID unless the caller restores a persisted id)
//! - Current balance (f64, monetary)
//! - Annual interest rate as a fraction (0.25 = 25%/year)
//! - Contractual minimum monthly payment
//! - Optional due day of month (informational only, not used in simulation math)
//!
//! CRITICAL: All money values are f64; rounding happens at presentation time only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when validating a debt record
#[derive(Debug, Error, PartialEq)]
pub enum DebtError {
    #[error("balance must be non-negative, got {value}")]
    NegativeBalance { value: f64 },

    #[error("annual interest rate must be non-negative, got {value}")]
    NegativeRate { value: f64 },

    #[error("minimum payment must be non-negative, got {value}")]
    NegativePayment { value: f64 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

/// A single debt as supplied by the caller
///
/// Immutable for the duration of a simulation run; the engine tracks
/// remaining balances separately in its per-run state.
///
/// # Example
/// ```
/// use debt_payoff_core_rs::DebtRecord;
///
/// let debt = DebtRecord::new("Credit card".to_string(), 5_000.0, 0.30, 250.0);
/// assert_eq!(debt.name(), "Credit card");
/// assert!(debt.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtRecord {
    /// Unique debt identifier (UUID unless restored)
    id: String,

    /// Display name chosen by the user
    name: String,

    /// Current outstanding balance
    balance: f64,

    /// Annual interest rate as a fraction (0.25 = 25%/year)
    annual_interest_rate: f64,

    /// Contractual minimum monthly payment
    minimum_payment: f64,

    /// Day of month the payment is due (informational only)
    due_date: Option<u32>,
}

impl DebtRecord {
    /// Create a new debt record with a generated UUID id
    ///
    /// # Arguments
    /// * `name` - Display name for the debt
    /// * `balance` - Current outstanding balance
    /// * `annual_interest_rate` - Annual rate as a fraction (0.25 = 25%/year)
    /// * `minimum_payment` - Contractual minimum monthly payment
    ///
    /// Values are not validated here; call [`DebtRecord::validate`] (the
    /// simulator does this for every record before running).
    pub fn new(name: String, balance: f64, annual_interest_rate: f64, minimum_payment: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            balance,
            annual_interest_rate,
            minimum_payment,
            due_date: None,
        }
    }

    /// Create a debt record with an explicit id
    ///
    /// Used when restoring debts the host application has persisted, so the
    /// schedule entries produced by the engine reference the stored ids.
    pub fn with_id(
        id: String,
        name: String,
        balance: f64,
        annual_interest_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        Self {
            id,
            name,
            balance,
            annual_interest_rate,
            minimum_payment,
            due_date: None,
        }
    }

    /// Builder: attach a due day of month (1-31, informational)
    pub fn with_due_date(mut self, day_of_month: u32) -> Self {
        self.due_date = Some(day_of_month);
        self
    }

    /// Unique debt identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current outstanding balance
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Annual interest rate as a fraction
    pub fn annual_interest_rate(&self) -> f64 {
        self.annual_interest_rate
    }

    /// Monthly interest rate (annual / 12)
    pub fn monthly_interest_rate(&self) -> f64 {
        self.annual_interest_rate / 12.0
    }

    /// Contractual minimum monthly payment
    pub fn minimum_payment(&self) -> f64 {
        self.minimum_payment
    }

    /// Due day of month, if recorded
    pub fn due_date(&self) -> Option<u32> {
        self.due_date
    }

    /// A debt with zero balance is already settled and never simulated
    pub fn is_settled(&self) -> bool {
        self.balance <= 0.0
    }

    /// Validate the record for simulation
    ///
    /// Rejects negative or non-finite balance, rate, or minimum payment.
    /// A zero balance is valid (the debt is simply excluded from the run).
    pub fn validate(&self) -> Result<(), DebtError> {
        if !self.balance.is_finite() {
            return Err(DebtError::NonFinite { field: "balance" });
        }
        if !self.annual_interest_rate.is_finite() {
            return Err(DebtError::NonFinite {
                field: "annual interest rate",
            });
        }
        if !self.minimum_payment.is_finite() {
            return Err(DebtError::NonFinite {
                field: "minimum payment",
            });
        }
        if self.balance < 0.0 {
            return Err(DebtError::NegativeBalance {
                value: self.balance,
            });
        }
        if self.annual_interest_rate < 0.0 {
            return Err(DebtError::NegativeRate {
                value: self.annual_interest_rate,
            });
        }
        if self.minimum_payment < 0.0 {
            return Err(DebtError::NegativePayment {
                value: self.minimum_payment,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let a = DebtRecord::new("Card".to_string(), 1_000.0, 0.2, 50.0);
        let b = DebtRecord::new("Card".to_string(), 1_000.0, 0.2, 50.0);

        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_with_id_preserves_id() {
        let debt = DebtRecord::with_id("debt-1".to_string(), "Loan".to_string(), 500.0, 0.1, 25.0);

        assert_eq!(debt.id(), "debt-1");
        assert_eq!(debt.balance(), 500.0);
    }

    #[test]
    fn test_monthly_interest_rate() {
        let debt = DebtRecord::new("Loan".to_string(), 1_000.0, 0.24, 50.0);

        assert!((debt.monthly_interest_rate() - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_validate_accepts_zero_balance() {
        let debt = DebtRecord::new("Paid off".to_string(), 0.0, 0.2, 50.0);

        assert!(debt.validate().is_ok());
        assert!(debt.is_settled());
    }

    #[test]
    fn test_validate_rejects_negative_balance() {
        let debt = DebtRecord::new("Bad".to_string(), -100.0, 0.2, 50.0);

        assert_eq!(
            debt.validate(),
            Err(DebtError::NegativeBalance { value: -100.0 })
        );
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let debt = DebtRecord::new("Bad".to_string(), 100.0, -0.2, 50.0);

        assert_eq!(debt.validate(), Err(DebtError::NegativeRate { value: -0.2 }));
    }

    #[test]
    fn test_validate_rejects_negative_payment() {
        let debt = DebtRecord::new("Bad".to_string(), 100.0, 0.2, -50.0);

        assert_eq!(
            debt.validate(),
            Err(DebtError::NegativePayment { value: -50.0 })
        );
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let debt = DebtRecord::new("Bad".to_string(), f64::NAN, 0.2, 50.0);

        assert_eq!(debt.validate(), Err(DebtError::NonFinite { field: "balance" }));
    }

    #[test]
    fn test_serde_round_trip() {
        let debt = DebtRecord::with_id("d1".to_string(), "Loan".to_string(), 750.0, 0.15, 35.0)
            .with_due_date(12);

        let json = serde_json::to_string(&debt).unwrap();
        let back: DebtRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id(), "d1");
        assert_eq!(back.due_date(), Some(12));
        assert_eq!(back.minimum_payment(), 35.0);
    }
}
