use deploy_core::model::JobId;
use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{HomeView, JobView, OfflineAlert, UserMenu, use_offline_status};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/jobs/:job_id", JobView)] Job { job_id: JobId },
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let offline = use_offline_status(ctx.starts_offline());

    rsx! {
        div { class: "app",
            Header { title: ctx.app_name() }
            if offline() {
                OfflineAlert {}
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header(title: String) -> Element {
    rsx! {
        header { class: "app-header",
            h1 {
                Link { to: Route::Home {}, "{title}" }
            }
            UserMenu {}
        }
    }
}
