use super::*;

impl DashboardData {
    /// Built-in research figures for the Hindi Whisper fine-tuning study.
    pub fn sample() -> Self {
        Self {
            dataset: sample_dataset(),
            training: sample_training(),
            evaluation: sample_evaluation(),
        }
    }
}

fn sample_dataset() -> DatasetData {
    DatasetData {
        stats: DatasetStats {
            total_recordings: 8500,
            total_duration: 36_000.0,
            unique_speakers: 125,
            avg_duration: 4.2,
            processed_count: 8500,
        },
        duration_buckets: vec![
            bucket("0-5s", 2456, Tone::Success),
            bucket("5-10s", 3721, Tone::Info),
            bucket("10-15s", 1892, Tone::Warning),
            bucket("15s+", 431, Tone::Destructive),
        ],
        speakers: vec![
            speaker("Top 10 speakers", "65% of data"),
            speaker("Gender distribution", "52% F / 48% M"),
            speaker("Age groups", "18-65 years"),
        ],
        quality: AudioQuality {
            sample_rate_khz: 16,
            bit_depth: 16,
            snr_min_db: 15,
            snr_max_db: 45,
            format: "WAV".to_string(),
        },
    }
}

fn sample_training() -> TrainingData {
    TrainingData {
        model: "whisper-small".to_string(),
        metrics: TrainingMetrics {
            epoch: 5,
            total_epochs: 10,
            loss: 0.85,
            learning_rate: 1e-5,
            time_elapsed: 18_000.0,
            estimated_time_remaining: 18_000.0,
            status: TrainingStatus::Training,
        },
        loss_curve: [
            (0, 2.45, 2.52),
            (1, 1.89, 1.95),
            (2, 1.42, 1.48),
            (3, 1.18, 1.25),
            (4, 0.98, 1.09),
            (5, 0.85, 0.96),
        ]
        .into_iter()
        .map(|(epoch, loss, val_loss)| LossPoint {
            epoch,
            loss,
            val_loss,
        })
        .collect(),
        hyperparameters: Hyperparameters {
            batch_size: 16,
            learning_rate: 1e-5,
            optimizer: "AdamW".to_string(),
            scheduler: "Linear".to_string(),
            warmup_steps: 500,
            max_length: 448,
        },
        logs: vec![
            log("2024-01-15 14:32:15", "Epoch 5/10 - Step 1250/2500", LogLevel::Progress),
            log("2024-01-15 14:32:10", "Loss: 0.8524, Val Loss: 0.9612", LogLevel::Info),
            log("2024-01-15 14:32:05", "Learning rate: 8.5e-06", LogLevel::Info),
            log("2024-01-15 14:32:00", "Saving checkpoint...", LogLevel::Checkpoint),
            log("2024-01-15 14:31:55", "Batch processed: 1249/2500", LogLevel::Info),
            log("2024-01-15 14:31:50", "GPU memory: 85% utilized", LogLevel::Warning),
        ],
    }
}

fn sample_evaluation() -> EvaluationData {
    EvaluationData {
        test_set: "FLEURS Hindi".to_string(),
        results: vec![
            wer_result("Whisper-small (Baseline)", 24.8, 12.3, 71.2),
            wer_result("Whisper-small (Fine-tuned)", 18.6, 9.1, 78.4),
        ],
        error_breakdown: vec![
            errors("Substitution", 45, 32),
            errors("Deletion", 28, 22),
            errors("Insertion", 27, 18),
        ],
        domains: vec![
            domain("Conversational", 28.5, 20.3),
            domain("Read Speech", 18.2, 14.1),
            domain("Spontaneous", 32.1, 24.8),
            domain("Noisy", 41.3, 29.7),
        ],
        samples: vec![
            transcription(
                "मैं आज बाजार जा रहा हूँ",
                "मैं आज बाज़ार जा रहा हु",
                "मैं आज बाजार जा रहा हूँ",
            ),
            transcription(
                "यह किताब बहुत अच्छी है",
                "यह किताब बहुत अछी है",
                "यह किताब बहुत अच्छी है",
            ),
            transcription(
                "क्या आप हिंदी बोल सकते हैं",
                "क्या आप हिन्दी बोल सकते है",
                "क्या आप हिंदी बोल सकते हैं",
            ),
        ],
    }
}

fn bucket(label: &str, count: u64, tone: Tone) -> DurationBucket {
    DurationBucket {
        label: label.to_string(),
        count,
        tone,
    }
}

fn speaker(label: &str, value: &str) -> SpeakerSummary {
    SpeakerSummary {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn log(timestamp: &str, message: &str, level: LogLevel) -> TrainingLogEntry {
    TrainingLogEntry {
        timestamp: timestamp.to_string(),
        message: message.to_string(),
        level,
    }
}

fn wer_result(model: &str, wer: f64, cer: f64, bleu: f64) -> WerResult {
    WerResult {
        model: model.to_string(),
        wer,
        cer,
        bleu,
        samples: 500,
        duration: "2h 15m".to_string(),
    }
}

fn errors(category: &str, baseline: u32, finetuned: u32) -> ErrorBreakdown {
    ErrorBreakdown {
        category: category.to_string(),
        baseline,
        finetuned,
    }
}

fn domain(name: &str, baseline_wer: f64, finetuned_wer: f64) -> DomainPerformance {
    DomainPerformance {
        domain: name.to_string(),
        baseline_wer,
        finetuned_wer,
    }
}

fn transcription(reference: &str, baseline: &str, finetuned: &str) -> SampleTranscription {
    SampleTranscription {
        reference: reference.to_string(),
        baseline: baseline.to_string(),
        finetuned: finetuned.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_data_is_valid() {
        DashboardData::sample().validate().unwrap();
    }

    #[test]
    fn sample_buckets_cover_every_recording() {
        let data = DashboardData::sample();
        let bucketed: u64 = data.dataset.duration_buckets.iter().map(|b| b.count).sum();
        assert_eq!(bucketed, data.dataset.stats.total_recordings);
    }

    #[test]
    fn sample_loss_curve_ends_at_current_loss() {
        let training = DashboardData::sample().training;
        let last = training.loss_curve.last().unwrap();
        assert_eq!(last.epoch, training.metrics.epoch);
        assert_eq!(last.loss, training.metrics.loss);
    }
}
