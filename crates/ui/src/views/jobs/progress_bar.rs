use deploy_core::model::Job;
use dioxus::prelude::*;

use crate::vm::map_progress_bar;

/// Read-only completion bar for an installation job.
#[component]
pub fn ProgressBar(job: Job) -> Element {
    let vm = map_progress_bar(&job);
    let value_class = if vm.is_success {
        "progress-bar__value progress-bar__value_success"
    } else {
        "progress-bar__value"
    };

    rsx! {
        div { class: "job-progress",
            div { id: "{vm.element_id}", class: "job-progress__heading",
                span {
                    strong { "Installation Progress" }
                }
                span { aria_hidden: "true",
                    strong { "{vm.heading_label}" }
                }
            }
            div {
                class: "progress-bar progress-bar_large",
                role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{vm.value}",
                aria_labelledby: "{vm.element_id}",
                span { class: value_class, style: "{vm.width_style}",
                    span { class: "assistive-text", "{vm.label}" }
                }
            }
        }
    }
}
