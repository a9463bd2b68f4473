use deploy_core::model::{Job, JobId};
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::jobs::ProgressBar;
use crate::vm::{JobDetailVm, map_job_detail};

#[derive(Clone, Debug, PartialEq, Eq)]
struct JobData {
    job: Job,
    detail: JobDetailVm,
}

fn load_job(ctx: &AppContext, job_id: &JobId) -> Result<JobData, ViewError> {
    let job = ctx.job(job_id).ok_or(ViewError::NotFound)?;
    let detail = map_job_detail(&job);
    Ok(JobData { job, detail })
}

#[component]
pub fn JobView(job_id: JobId) -> Element {
    let ctx = use_context::<AppContext>();
    let state = load_job(&ctx, &job_id);

    rsx! {
        div { class: "page",
            match state {
                Ok(data) => rsx! {
                    h2 { "{data.detail.title}" }
                    JobDetails { detail: data.detail.clone() }
                    ProgressBar { job: data.job.clone() }
                },
                Err(err) => rsx! {
                    h2 { "Job {job_id}" }
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn JobDetails(detail: JobDetailVm) -> Element {
    rsx! {
        dl { class: "job-details",
            dt { "Status" }
            dd { "{detail.status_label}" }

            dt { "Steps" }
            dd { "{detail.steps_label}" }

            if let Some(started) = detail.started_at_str.as_deref() {
                dt { "Started" }
                dd { "{started}" }
            }
        }
    }
}
