use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{JobId, StepId};
use crate::progress::Progress;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Started,
    Complete,
    Failed,
    Canceled,
}

impl JobStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Started => "In progress",
            JobStatus::Complete => "Complete",
            JobStatus::Failed => "Failed",
            JobStatus::Canceled => "Canceled",
        }
    }
}

/// An installation job as reported by the job tracker.
///
/// Read-only from the console's point of view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub steps: Vec<StepId>,
    #[serde(default)]
    pub completed_steps: Vec<StepId>,
}

impl Job {
    #[must_use]
    pub fn new(id: JobId, steps: Vec<StepId>, completed_steps: Vec<StepId>) -> Self {
        Self {
            id,
            plan: None,
            status: JobStatus::default(),
            created_at: None,
            steps,
            completed_steps,
        }
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::from_counts(self.completed_steps.len(), self.steps.len())
    }

    /// DOM id labelling this job's progress bar.
    #[must_use]
    pub fn progress_element_id(&self) -> String {
        format!("{}-progress", self.id)
    }
}
