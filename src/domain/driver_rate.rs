use std::fmt;

use thiserror::Error;

use super::format::format_currency;

pub const DEFAULT_DRIVER_RATE: f64 = 1.50;

/// What it costs the driver to run one mile. Always finite and positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriverRate(f64);

#[derive(Clone, Debug, PartialEq, Error)]
pub enum RateError {
    #[error("invalid cost per mile {0:?}: must be a number greater than zero")]
    InvalidRate(String),
}

impl DriverRate {
    pub fn new(per_mile: f64) -> Result<Self, RateError> {
        if per_mile.is_finite() && per_mile > 0.0 {
            Ok(Self(per_mile))
        } else {
            Err(RateError::InvalidRate(per_mile.to_string()))
        }
    }

    pub fn per_mile(&self) -> f64 {
        self.0
    }

    /// Two-decimal text for the stock rate's first dialog draft.
    pub fn draft_text(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl Default for DriverRate {
    fn default() -> Self {
        Self(DEFAULT_DRIVER_RATE)
    }
}

impl fmt::Display for DriverRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(self.0))
    }
}

/// Reads a proposed rate from dialog text without judging its value.
pub fn parse_proposal(raw: &str) -> Result<f64, RateError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| RateError::InvalidRate(trimmed.to_string()))
}

/// Replaces `current` with `new_rate` when it is a valid rate. On failure the
/// caller keeps using `current`.
pub fn update_driver_rate(new_rate: f64, current: DriverRate) -> Result<DriverRate, RateError> {
    match DriverRate::new(new_rate) {
        Ok(rate) => {
            tracing::debug!(
                previous = current.per_mile(),
                next = rate.per_mile(),
                "driver rate updated"
            );
            Ok(rate)
        }
        Err(err) => {
            tracing::debug!(
                previous = current.per_mile(),
                rejected = new_rate,
                "driver rate rejected"
            );
            Err(err)
        }
    }
}
