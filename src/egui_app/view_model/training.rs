use super::{Badge, BadgeVariant, Fact, StatCard, fraction_of_percent};
use crate::dashboard::{LogLevel, TrainingData, TrainingMetrics, TrainingStatus};
use crate::metrics::{
    self, MetricError, ZeroRatioPolicy, format_exponential, format_fixed, format_time,
};

/// Loss value mapped to an empty bar.
const LOSS_CHART_CEILING: f64 = 2.5;
/// Pixels per unit of loss below the ceiling.
const LOSS_BAR_SCALE: f32 = 20.0;
const LOSS_BAR_MIN_HEIGHT: f32 = 4.0;

/// Primary run control offered for the current status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrainingControl {
    Pause,
    Resume,
    Start,
}

impl TrainingControl {
    pub fn for_status(status: TrainingStatus) -> Self {
        match status {
            TrainingStatus::Training => Self::Pause,
            TrainingStatus::Paused => Self::Resume,
            TrainingStatus::Idle | TrainingStatus::Completed => Self::Start,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pause => "Pause",
            Self::Resume => "Resume",
            Self::Start => "Start Training",
        }
    }

    pub fn variant(self) -> BadgeVariant {
        match self {
            Self::Pause => BadgeVariant::Warning,
            Self::Resume => BadgeVariant::Success,
            Self::Start => BadgeVariant::Default,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LossBar {
    pub epoch_label: String,
    /// Bar height in points.
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    pub text: String,
    pub level: LogLevel,
}

/// Display model for the training dashboard section.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingView {
    pub status_badge: Badge,
    /// e.g. `Model: whisper-small`.
    pub model_caption: String,
    pub cards: Vec<StatCard>,
    /// e.g. `Epoch 5 / 10`.
    pub epoch_line: String,
    pub progress_badge: Badge,
    pub progress_fraction: f32,
    pub elapsed_line: String,
    pub remaining_line: String,
    /// Latest training and validation loss from the curve.
    pub latest_losses: Option<(String, String)>,
    pub loss_bars: Vec<LossBar>,
    pub hyperparameters: Vec<Fact>,
    pub logs: Vec<LogLine>,
    pub control: TrainingControl,
}

/// Epoch progress as a percentage of the configured epochs.
pub fn training_progress(metrics: &TrainingMetrics) -> Result<f64, MetricError> {
    metrics::percentage(metrics.epoch as f64, metrics.total_epochs as f64)
}

/// Status dot label shown in the window header.
pub fn header_indicator(status: TrainingStatus) -> (&'static str, BadgeVariant) {
    let label = match status {
        TrainingStatus::Idle => "Training Idle",
        TrainingStatus::Training => "Training Active",
        TrainingStatus::Paused => "Training Paused",
        TrainingStatus::Completed => "Training Complete",
    };
    (label, status.badge())
}

/// Build the training dashboard from validated records.
pub fn training_view(
    data: &TrainingData,
    policy: ZeroRatioPolicy,
) -> Result<TrainingView, MetricError> {
    data.validate()?;
    let run = &data.metrics;
    let progress = policy.resolve(training_progress(run))?;
    let hyper = &data.hyperparameters;

    Ok(TrainingView {
        status_badge: Badge::new(run.status.as_str().to_uppercase(), run.status.badge()),
        model_caption: format!("Model: {}", data.model),
        cards: vec![
            StatCard {
                title: "Current Loss",
                value: format_fixed(run.loss, 4),
                caption: "Training loss".to_string(),
            },
            StatCard {
                title: "Learning Rate",
                value: format_exponential(run.learning_rate, 1),
                caption: "Current LR".to_string(),
            },
            StatCard {
                title: "Time Remaining",
                value: format_time(run.estimated_time_remaining),
                caption: "Estimated".to_string(),
            },
        ],
        epoch_line: format!("Epoch {} / {}", run.epoch, run.total_epochs),
        progress_badge: Badge::new(
            format!("{}%", format_fixed(progress, 1)),
            BadgeVariant::Outline,
        ),
        progress_fraction: fraction_of_percent(progress),
        elapsed_line: format!("Elapsed: {}", format_time(run.time_elapsed)),
        remaining_line: format!("Remaining: {}", format_time(run.estimated_time_remaining)),
        latest_losses: data
            .loss_curve
            .last()
            .map(|point| (point.loss.to_string(), point.val_loss.to_string())),
        loss_bars: data
            .loss_curve
            .iter()
            .map(|point| LossBar {
                epoch_label: point.epoch.to_string(),
                height: loss_bar_height(point.loss),
            })
            .collect(),
        hyperparameters: vec![
            Fact {
                label: "Batch Size",
                value: hyper.batch_size.to_string(),
            },
            Fact {
                label: "Learning Rate",
                value: format!("{:e}", hyper.learning_rate),
            },
            Fact {
                label: "Optimizer",
                value: hyper.optimizer.clone(),
            },
            Fact {
                label: "Scheduler",
                value: hyper.scheduler.clone(),
            },
            Fact {
                label: "Warmup Steps",
                value: hyper.warmup_steps.to_string(),
            },
            Fact {
                label: "Max Length",
                value: hyper.max_length.to_string(),
            },
        ],
        logs: data
            .logs
            .iter()
            .map(|entry| LogLine {
                text: format!("[{}] {}", entry.timestamp, entry.message),
                level: entry.level,
            })
            .collect(),
        control: TrainingControl::for_status(run.status),
    })
}

fn loss_bar_height(loss: f64) -> f32 {
    let height = (LOSS_CHART_CEILING - loss) as f32 * LOSS_BAR_SCALE;
    height.max(LOSS_BAR_MIN_HEIGHT)
}
