//! Statistics Output
//!
//! Simple summaries over per-society measurements.

use crate::error::SimError;

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64, SimError> {
    if values.is_empty() {
        return Err(SimError::DivisionUndefined {
            what: "mean of an empty list",
        });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median; the average of the two middle values for even lengths.
pub fn median(values: &[f64]) -> Result<f64, SimError> {
    if values.is_empty() {
        return Err(SimError::DivisionUndefined {
            what: "median of an empty list",
        });
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}
