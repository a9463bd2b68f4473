use deploy_core::model::Job;

/// Everything the progress bar needs to render one job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressBarVm {
    /// DOM id of the heading; the bar is labelled by it.
    pub element_id: String,
    pub value: u8,
    pub width_style: String,
    /// Assistive text read out for the bar.
    pub label: String,
    pub heading_label: String,
    pub is_success: bool,
}

#[must_use]
pub fn map_progress_bar(job: &Job) -> ProgressBarVm {
    let progress = job.progress();
    let value = progress.value();
    ProgressBarVm {
        element_id: job.progress_element_id(),
        value,
        width_style: format!("width: {value}%"),
        label: format!("Progress: {value}%"),
        heading_label: format!("{value}% Complete"),
        is_success: progress.is_complete(),
    }
}
