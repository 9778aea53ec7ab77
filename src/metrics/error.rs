use thiserror::Error;

/// Failures raised while validating dashboard records or deriving ratios.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    /// A record violates one of its documented invariants.
    #[error("Invalid metric `{field}`: {reason}")]
    InvalidMetric {
        /// Dotted path of the offending field, e.g. `training.epoch`.
        field: String,
        /// Human-readable description of the violated rule.
        reason: String,
    },
    /// A percentage or improvement was requested against a zero denominator.
    #[error("Cannot compute {context}: denominator is zero (numerator {numerator})")]
    DivisionByZero {
        /// Numerator that was about to be divided.
        numerator: f64,
        /// What was being computed.
        context: &'static str,
    },
}

impl MetricError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMetric {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
