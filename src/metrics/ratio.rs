use serde::{Deserialize, Serialize};

use super::MetricError;

/// How view models resolve a zero denominator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroRatioPolicy {
    /// Surface [`MetricError::DivisionByZero`] in place of the figure.
    #[default]
    Error,
    /// Display the figure as zero.
    Zero,
}

impl ZeroRatioPolicy {
    /// Apply the policy to a ratio result.
    pub fn resolve(self, result: Result<f64, MetricError>) -> Result<f64, MetricError> {
        match (self, result) {
            (Self::Zero, Err(MetricError::DivisionByZero { .. })) => Ok(0.0),
            (_, other) => other,
        }
    }
}

/// Share of `part` in `whole`, as a percentage.
pub fn percentage(part: f64, whole: f64) -> Result<f64, MetricError> {
    if whole == 0.0 {
        return Err(MetricError::DivisionByZero {
            numerator: part,
            context: "percentage",
        });
    }
    Ok(part / whole * 100.0)
}

/// Relative reduction from `before` to `after`, as a percentage of `before`.
///
/// Positive values mean `after` is lower, which for error rates is an
/// improvement.
pub fn improvement_percent(before: f64, after: f64) -> Result<f64, MetricError> {
    if before == 0.0 {
        return Err(MetricError::DivisionByZero {
            numerator: before - after,
            context: "improvement",
        });
    }
    Ok((before - after) / before * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_full_and_empty_counts() {
        assert_eq!(percentage(8500.0, 8500.0).unwrap(), 100.0);
        assert_eq!(percentage(0.0, 8500.0).unwrap(), 0.0);
        assert_eq!(percentage(5.0, 10.0).unwrap(), 50.0);
    }

    #[test]
    fn percentage_rejects_zero_whole() {
        let err = percentage(3.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            MetricError::DivisionByZero {
                context: "percentage",
                ..
            }
        ));
    }

    #[test]
    fn improvement_matches_wer_reduction() {
        let value = improvement_percent(24.8, 18.6).unwrap();
        assert!((value - 25.0).abs() < 0.1, "got {value}");
    }

    #[test]
    fn improvement_is_negative_when_metric_regresses() {
        let value = improvement_percent(10.0, 12.0).unwrap();
        assert!((value + 20.0).abs() < 1e-9);
    }

    #[test]
    fn improvement_rejects_zero_baseline() {
        assert!(improvement_percent(0.0, 1.0).is_err());
    }

    #[test]
    fn zero_policy_only_swallows_division_errors() {
        let zero = ZeroRatioPolicy::Zero;
        assert_eq!(zero.resolve(percentage(1.0, 0.0)).unwrap(), 0.0);
        assert!(zero.resolve(Err(MetricError::invalid("x", "bad"))).is_err());
        assert!(ZeroRatioPolicy::Error.resolve(percentage(1.0, 0.0)).is_err());
        assert_eq!(ZeroRatioPolicy::Error.resolve(Ok(4.0)).unwrap(), 4.0);
    }
}
