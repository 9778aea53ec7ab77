use serde::{Deserialize, Serialize};

use super::{ensure, ensure_non_negative};
use crate::metrics::MetricError;

/// Error rates for one model on the evaluation set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WerResult {
    pub model: String,
    /// Word error rate, percent.
    pub wer: f64,
    /// Character error rate, percent.
    pub cer: f64,
    pub bleu: f64,
    pub samples: u32,
    /// Wall-clock label of the evaluation pass, e.g. `2h 15m`.
    pub duration: String,
}

/// Error counts of one kind before and after fine-tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBreakdown {
    pub category: String,
    pub baseline: u32,
    pub finetuned: u32,
}

/// WER per speech domain for the baseline and fine-tuned models.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainPerformance {
    pub domain: String,
    pub baseline_wer: f64,
    pub finetuned_wer: f64,
}

/// Reference sentence with both model outputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleTranscription {
    pub reference: String,
    pub baseline: String,
    pub finetuned: String,
}

/// Everything the evaluation view displays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationData {
    /// Name of the evaluation set, e.g. `FLEURS Hindi`.
    pub test_set: String,
    /// Baseline first, followed by candidate models.
    pub results: Vec<WerResult>,
    pub error_breakdown: Vec<ErrorBreakdown>,
    pub domains: Vec<DomainPerformance>,
    pub samples: Vec<SampleTranscription>,
}

impl EvaluationData {
    pub fn validate(&self) -> Result<(), MetricError> {
        ensure(
            !self.results.is_empty(),
            "evaluation.results",
            "at least one model result is required",
        )?;
        for (idx, result) in self.results.iter().enumerate() {
            ensure_non_negative(&format!("evaluation.results[{idx}].wer"), result.wer)?;
            ensure_non_negative(&format!("evaluation.results[{idx}].cer"), result.cer)?;
            ensure_non_negative(&format!("evaluation.results[{idx}].bleu"), result.bleu)?;
            ensure(
                result.samples > 0,
                format!("evaluation.results[{idx}].samples"),
                "must be greater than zero",
            )?;
        }
        for (idx, domain) in self.domains.iter().enumerate() {
            ensure_non_negative(
                &format!("evaluation.domains[{idx}].baseline_wer"),
                domain.baseline_wer,
            )?;
            ensure_non_negative(
                &format!("evaluation.domains[{idx}].finetuned_wer"),
                domain.finetuned_wer,
            )?;
        }
        Ok(())
    }

    /// The reference row every improvement is measured against.
    pub fn baseline(&self) -> Option<&WerResult> {
        self.results.first()
    }

    /// Index of the lowest-WER row; ties keep the earliest row.
    pub fn best_index(&self) -> Option<usize> {
        self.results
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.wer.total_cmp(&b.wer))
            .map(|(idx, _)| idx)
    }
}
