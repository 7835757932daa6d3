//! Engine error taxonomy.

use thiserror::Error;

/// Errors raised by the simulation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A tunable is outside its legal range. Raised at construction time.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A ratio or average was requested with a zero denominator.
    #[error("division undefined: {what}")]
    DivisionUndefined { what: &'static str },
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Rejects probabilities outside `[0, 1]`, including NaN.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<(), SimError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::invalid(
            name,
            format!("probability must lie in [0, 1], got {}", value),
        ))
    }
}

/// Rejects zero for counts that must be positive.
pub(crate) fn check_positive(name: &'static str, value: u64) -> Result<(), SimError> {
    if value > 0 {
        Ok(())
    } else {
        Err(SimError::invalid(name, "must be greater than zero"))
    }
}
