use deploy_core::model::{Job, JobId};

use crate::vm::time_fmt::format_datetime;

/// Row in the job list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobSummaryVm {
    pub id: JobId,
    pub title: String,
    pub status_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobDetailVm {
    pub title: String,
    pub status_label: &'static str,
    pub started_at_str: Option<String>,
    pub steps_label: String,
}

#[must_use]
pub fn map_job_summaries(jobs: &[Job]) -> Vec<JobSummaryVm> {
    jobs.iter()
        .map(|job| JobSummaryVm {
            id: job.id.clone(),
            title: job_title(job),
            status_label: job.status.label(),
        })
        .collect()
}

#[must_use]
pub fn map_job_detail(job: &Job) -> JobDetailVm {
    JobDetailVm {
        title: job_title(job),
        status_label: job.status.label(),
        started_at_str: job.created_at.map(format_datetime),
        steps_label: format!(
            "{} of {} steps",
            job.completed_steps.len().min(job.steps.len()),
            job.steps.len()
        ),
    }
}

fn job_title(job: &Job) -> String {
    match job.plan.as_deref().map(str::trim) {
        Some(plan) if !plan.is_empty() => plan.to_owned(),
        _ => format!("Job {}", job.id),
    }
}
