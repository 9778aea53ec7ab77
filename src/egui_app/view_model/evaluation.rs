use super::{Badge, BadgeVariant, StatCard, fraction_of_percent};
use crate::dashboard::{EvaluationData, SampleTranscription};
use crate::metrics::{
    self, MetricError, ZeroRatioPolicy, format_fixed, format_percent, improvement_percent,
};

/// Fill colour of an error-share bar, cycling by row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarTone {
    Primary,
    Success,
    Warning,
}

impl BarTone {
    fn for_row(index: usize) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Success,
            _ => Self::Warning,
        }
    }
}

/// One row of the model comparison table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonRow {
    pub model: String,
    pub wer: Badge,
    pub cer: String,
    pub bleu: String,
    pub duration: String,
    pub status: Badge,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DomainRow {
    pub domain: String,
    pub baseline_label: String,
    pub finetuned_label: String,
    pub baseline_fraction: f32,
    pub finetuned_fraction: f32,
}

/// Share of the fine-tuned model's errors falling in one category.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorShare {
    pub category: String,
    pub share_label: String,
    pub fraction: f32,
    pub tone: BarTone,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorReduction {
    pub category: String,
    /// e.g. `45 → 32`.
    pub counts: String,
    pub badge: Badge,
}

/// Display model for the evaluation results section.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationView {
    pub subtitle: String,
    pub cards: Vec<StatCard>,
    pub rows: Vec<ComparisonRow>,
    pub domains: Vec<DomainRow>,
    pub error_shares: Vec<ErrorShare>,
    pub error_reductions: Vec<ErrorReduction>,
    pub samples: Vec<SampleTranscription>,
}

/// Build the evaluation section from validated records.
///
/// The first result is the baseline; the lowest-WER result is reported as best.
pub fn evaluation_view(
    data: &EvaluationData,
    policy: ZeroRatioPolicy,
) -> Result<EvaluationView, MetricError> {
    data.validate()?;
    let (Some(baseline), Some(best_index)) = (data.baseline(), data.best_index()) else {
        return Err(MetricError::invalid(
            "evaluation.results",
            "at least one model result is required",
        ));
    };
    let best = &data.results[best_index];
    let improvement = policy.resolve(improvement_percent(baseline.wer, best.wer))?;

    let cards = vec![
        StatCard {
            title: "Best WER",
            value: format_percent(best.wer),
            caption: if best_index == 0 {
                "Baseline model".to_string()
            } else {
                "Fine-tuned model".to_string()
            },
        },
        StatCard {
            title: "Improvement",
            value: format_reduction(improvement),
            caption: "WER reduction".to_string(),
        },
        StatCard {
            title: "Best BLEU",
            value: best.bleu.to_string(),
            caption: "BLEU score".to_string(),
        },
        StatCard {
            title: "Test Samples",
            value: baseline.samples.to_string(),
            caption: format!("{} test set", data.test_set),
        },
    ];

    let rows = data
        .results
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            let is_best = idx == best_index;
            let status = if is_best {
                Badge::new("Best", BadgeVariant::Success)
            } else if idx == 0 {
                Badge::new("Baseline", BadgeVariant::Outline)
            } else {
                Badge::new("Candidate", BadgeVariant::Outline)
            };
            ComparisonRow {
                model: result.model.clone(),
                wer: Badge::new(
                    format_percent(result.wer),
                    if is_best {
                        BadgeVariant::Success
                    } else {
                        BadgeVariant::Secondary
                    },
                ),
                cer: format_percent(result.cer),
                bleu: result.bleu.to_string(),
                duration: result.duration.clone(),
                status,
            }
        })
        .collect();

    let domains = data
        .domains
        .iter()
        .map(|domain| DomainRow {
            domain: domain.domain.clone(),
            baseline_label: format!("Baseline: {}", format_percent(domain.baseline_wer)),
            finetuned_label: format!("Fine-tuned: {}", format_percent(domain.finetuned_wer)),
            baseline_fraction: fraction_of_percent(domain.baseline_wer),
            finetuned_fraction: fraction_of_percent(domain.finetuned_wer),
        })
        .collect();

    let total_errors: u64 = data
        .error_breakdown
        .iter()
        .map(|e| u64::from(e.finetuned))
        .sum();
    let error_shares = data
        .error_breakdown
        .iter()
        .enumerate()
        .map(|(idx, error)| {
            let share = policy.resolve(metrics::percentage(
                error.finetuned as f64,
                total_errors as f64,
            ))?;
            Ok(ErrorShare {
                category: error.category.clone(),
                share_label: format!("{}%", format_fixed(share, 1)),
                fraction: fraction_of_percent(share),
                tone: BarTone::for_row(idx),
            })
        })
        .collect::<Result<Vec<_>, MetricError>>()?;

    let error_reductions = data
        .error_breakdown
        .iter()
        .map(|error| {
            let reduction = policy.resolve(improvement_percent(
                error.baseline as f64,
                error.finetuned as f64,
            ))?;
            Ok(ErrorReduction {
                category: error.category.clone(),
                counts: format!("{} → {}", error.baseline, error.finetuned),
                badge: Badge::new(format_reduction(reduction), BadgeVariant::Success),
            })
        })
        .collect::<Result<Vec<_>, MetricError>>()?;

    Ok(EvaluationView {
        subtitle: format!("Performance comparison on {} test set", data.test_set),
        cards,
        rows,
        domains,
        error_shares,
        error_reductions,
        samples: data.samples.clone(),
    })
}

/// Render a reduction as a signed change: a 25% reduction shows as `-25.0%`.
fn format_reduction(percent: f64) -> String {
    if percent < 0.0 {
        format!("+{}%", format_fixed(-percent, 1))
    } else {
        format!("-{}%", format_fixed(percent, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{DashboardData, ErrorBreakdown};

    fn sample() -> EvaluationData {
        DashboardData::sample().evaluation
    }

    #[test]
    fn headline_cards_match_sample_results() {
        let view = evaluation_view(&sample(), ZeroRatioPolicy::Error).unwrap();
        let values: Vec<_> = view.cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["18.6%", "-25.0%", "78.4", "500"]);
        assert_eq!(view.cards[3].caption, "FLEURS Hindi test set");
        assert_eq!(
            view.subtitle,
            "Performance comparison on FLEURS Hindi test set"
        );
    }

    #[test]
    fn comparison_rows_flag_best_model() {
        let view = evaluation_view(&sample(), ZeroRatioPolicy::Error).unwrap();
        assert_eq!(view.rows[0].status, Badge::new("Baseline", BadgeVariant::Outline));
        assert_eq!(view.rows[0].wer, Badge::new("24.8%", BadgeVariant::Secondary));
        assert_eq!(view.rows[1].status, Badge::new("Best", BadgeVariant::Success));
        assert_eq!(view.rows[1].wer.variant, BadgeVariant::Success);
        assert_eq!(view.rows[1].cer, "9.1%");
        assert_eq!(view.rows[1].duration, "2h 15m");
    }

    #[test]
    fn error_shares_and_reductions() {
        let view = evaluation_view(&sample(), ZeroRatioPolicy::Error).unwrap();
        let shares: Vec<_> = view
            .error_shares
            .iter()
            .map(|s| s.share_label.as_str())
            .collect();
        assert_eq!(shares, vec!["44.4%", "30.6%", "25.0%"]);
        assert_eq!(view.error_shares[2].tone, BarTone::Warning);
        let reductions: Vec<_> = view
            .error_reductions
            .iter()
            .map(|r| r.badge.label.as_str())
            .collect();
        assert_eq!(reductions, vec!["-28.9%", "-21.4%", "-33.3%"]);
        assert_eq!(view.error_reductions[0].counts, "45 → 32");
    }

    #[test]
    fn domain_rows_use_wer_as_bar_width() {
        let view = evaluation_view(&sample(), ZeroRatioPolicy::Error).unwrap();
        let noisy = &view.domains[3];
        assert_eq!(noisy.baseline_label, "Baseline: 41.3%");
        assert_eq!(noisy.finetuned_label, "Fine-tuned: 29.7%");
        assert!((noisy.baseline_fraction - 0.413).abs() < 1e-6);
    }

    #[test]
    fn zero_error_counts_follow_policy() {
        let mut data = sample();
        data.error_breakdown = vec![ErrorBreakdown {
            category: "Substitution".to_string(),
            baseline: 0,
            finetuned: 0,
        }];
        assert!(evaluation_view(&data, ZeroRatioPolicy::Error).is_err());
        let view = evaluation_view(&data, ZeroRatioPolicy::Zero).unwrap();
        assert_eq!(view.error_shares[0].share_label, "0.0%");
        assert_eq!(view.error_reductions[0].badge.label, "-0.0%");
    }

    #[test]
    fn large_error_counts_do_not_overflow_the_total() {
        let mut data = sample();
        data.error_breakdown = vec![
            ErrorBreakdown {
                category: "Substitution".to_string(),
                baseline: u32::MAX,
                finetuned: u32::MAX,
            },
            ErrorBreakdown {
                category: "Deletion".to_string(),
                baseline: 1,
                finetuned: 1,
            },
        ];
        assert!(data.validate().is_ok());
        let view = evaluation_view(&data, ZeroRatioPolicy::Error).unwrap();
        assert_eq!(view.error_shares[0].share_label, "100.0%");
        assert_eq!(view.error_shares[1].share_label, "0.0%");
    }

    #[test]
    fn baseline_winning_is_captioned_as_baseline() {
        let mut data = sample();
        data.results[1].wer = 30.0;
        let view = evaluation_view(&data, ZeroRatioPolicy::Error).unwrap();
        assert_eq!(view.cards[0].value, "24.8%");
        assert_eq!(view.cards[0].caption, "Baseline model");
        assert_eq!(view.rows[0].status, Badge::new("Best", BadgeVariant::Success));
        let view = evaluation_view(&sample(), ZeroRatioPolicy::Error).unwrap();
        assert_eq!(view.cards[0].caption, "Fine-tuned model");
    }

    #[test]
    fn regression_shows_as_increase() {
        assert_eq!(format_reduction(-12.5), "+12.5%");
        assert_eq!(format_reduction(25.0), "-25.0%");
    }
}
