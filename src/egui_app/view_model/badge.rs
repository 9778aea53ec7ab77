use crate::dashboard::TrainingStatus;

/// Visual family of a badge, mirroring the dashboard's badge styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Success,
    Warning,
    Outline,
    Destructive,
}

/// Short label rendered inside a coloured pill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub variant: BadgeVariant,
}

impl Badge {
    pub fn new(label: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }
}

impl TrainingStatus {
    /// Badge variant used for this status.
    pub fn badge(self) -> BadgeVariant {
        match self {
            Self::Idle => BadgeVariant::Secondary,
            Self::Training => BadgeVariant::Success,
            Self::Paused => BadgeVariant::Warning,
            Self::Completed => BadgeVariant::Default,
        }
    }
}

/// Badge variant for a raw status label; unknown labels render as secondary.
pub fn badge_for_status_label(label: &str) -> BadgeVariant {
    TrainingStatus::parse(label)
        .map(TrainingStatus::badge)
        .unwrap_or(BadgeVariant::Secondary)
}

/// Whether preprocessing has covered every recording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionState {
    Complete,
    InProgress,
}

impl CompletionState {
    pub fn badge(self) -> BadgeVariant {
        match self {
            Self::Complete => BadgeVariant::Default,
            Self::InProgress => BadgeVariant::Secondary,
        }
    }
}
