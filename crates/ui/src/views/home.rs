use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::jobs::ProgressBar;
use crate::vm::map_job_summaries;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let jobs = ctx.jobs();
    let summaries = map_job_summaries(&jobs);

    rsx! {
        div { class: "page",
            h2 { "Installations" }
            if jobs.is_empty() {
                p { "No installation jobs yet." }
            } else {
                ul { class: "job-list",
                    for (job, summary) in jobs.into_iter().zip(summaries) {
                        li { key: "{summary.id}",
                            Link { to: Route::Job { job_id: summary.id.clone() }, "{summary.title}" }
                            span { class: "job-status", " ({summary.status_label})" }
                            ProgressBar { job }
                        }
                    }
                }
            }
        }
    }
}
