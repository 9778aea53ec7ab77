//! Navigational state for the dashboard's tab groups.
//!
//! Each tab group owns a single selection. Selection is synchronous and is
//! never persisted between launches.

use serde::{Deserialize, Serialize};

/// A closed set of tabs rendered as one tab bar.
pub trait Tab: Copy + Eq + std::fmt::Debug + 'static {
    /// Tabs in display order.
    const ALL: &'static [Self];

    /// Text shown on the tab button.
    fn label(self) -> &'static str;
}

/// The selected tab of one tab group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabState<T: Tab> {
    selected: T,
}

impl<T: Tab> TabState<T> {
    pub fn new(initial: T) -> Self {
        Self { selected: initial }
    }

    pub fn selected(&self) -> T {
        self.selected
    }

    pub fn is_selected(&self, tab: T) -> bool {
        self.selected == tab
    }

    /// Select `tab`, returning whether the selection changed.
    pub fn select(&mut self, tab: T) -> bool {
        if self.selected == tab {
            return false;
        }
        self.selected = tab;
        true
    }
}

impl<T: Tab + Default> Default for TabState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Top-level dashboard sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dataset,
    Training,
    Evaluation,
}

impl Tab for Section {
    const ALL: &'static [Self] = &[Self::Dataset, Self::Training, Self::Evaluation];

    fn label(self) -> &'static str {
        match self {
            Self::Dataset => "Dataset Overview",
            Self::Training => "Training Dashboard",
            Self::Evaluation => "Evaluation Results",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DatasetTab {
    #[default]
    Distribution,
    Speakers,
    Quality,
}

impl Tab for DatasetTab {
    const ALL: &'static [Self] = &[Self::Distribution, Self::Speakers, Self::Quality];

    fn label(self) -> &'static str {
        match self {
            Self::Distribution => "Duration Distribution",
            Self::Speakers => "Speaker Distribution",
            Self::Quality => "Audio Quality",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrainingTab {
    #[default]
    Loss,
    Hyperparameters,
    Logs,
}

impl Tab for TrainingTab {
    const ALL: &'static [Self] = &[Self::Loss, Self::Hyperparameters, Self::Logs];

    fn label(self) -> &'static str {
        match self {
            Self::Loss => "Loss Curves",
            Self::Hyperparameters => "Hyperparameters",
            Self::Logs => "Training Logs",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvaluationTab {
    #[default]
    Domain,
    Errors,
    Examples,
}

impl Tab for EvaluationTab {
    const ALL: &'static [Self] = &[Self::Domain, Self::Errors, Self::Examples];

    fn label(self) -> &'static str {
        match self {
            Self::Domain => "Domain Analysis",
            Self::Errors => "Error Analysis",
            Self::Examples => "Sample Outputs",
        }
    }
}

/// Selection state for every tab group on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub section: TabState<Section>,
    pub dataset: TabState<DatasetTab>,
    pub training: TabState<TrainingTab>,
    pub evaluation: TabState<EvaluationTab>,
}

impl UiState {
    /// Fresh state with `section` selected and every sub-group on its first tab.
    pub fn starting_at(section: Section) -> Self {
        Self {
            section: TabState::new(section),
            ..Self::default()
        }
    }
}
