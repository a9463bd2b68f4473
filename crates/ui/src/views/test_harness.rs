use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use deploy_core::UserAction;
use deploy_core::model::{Job, JobId, StepId, User};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use crate::context::{PageReloader, UiApp, build_app_context};
use crate::routes::Route;
use crate::store::{SessionStore, use_session_provider};
use crate::views::header::UserMenuTestHandles;
use crate::views::offline_alert::OfflineAlertTestHandles;
use crate::views::{HomeView, JobView, OfflineAlert, ProgressBar, UserMenu};

#[derive(Default)]
pub struct CountingReloader {
    count: AtomicUsize,
}

impl CountingReloader {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl PageReloader for CountingReloader {
    fn reload(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Clone, Default)]
pub struct TestApp {
    jobs: Vec<Job>,
    user: User,
    offline: bool,
    reloader: Arc<CountingReloader>,
}

impl TestApp {
    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            ..Self::default()
        }
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = user;
        self
    }

    pub fn starting_offline(mut self) -> Self {
        self.offline = true;
        self
    }
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "Deploy Console"
    }

    fn jobs(&self) -> Vec<Job> {
        self.jobs.clone()
    }

    fn job(&self, id: &JobId) -> Option<Job> {
        self.jobs.iter().find(|job| &job.id == id).cloned()
    }

    fn initial_user(&self) -> User {
        self.user.clone()
    }

    fn starts_offline(&self) -> bool {
        self.offline
    }

    fn page_reloader(&self) -> Arc<dyn PageReloader> {
        self.reloader.clone()
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    /// The application router with its header and offline banner.
    App,
    Home,
    Job(JobId),
    UserMenu,
    OfflineAlert,
    Progress(Job),
}

#[derive(Clone, Default)]
pub struct HarnessHandles {
    store: Rc<RefCell<Option<SessionStore>>>,
    user_menu: UserMenuTestHandles,
    offline_alert: OfflineAlertTestHandles,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(app));
    let store = use_session_provider(|| props.app.initial_user());
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.handles.user_menu.clone());
    use_context_provider(|| props.handles.offline_alert.clone());
    *props.handles.store.borrow_mut() = Some(store);
    match props.view {
        ViewKind::App => rsx! { Router::<Route> {} },
        _ => rsx! { Router::<TestRoute> {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::App | ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Job(job_id) => rsx! { JobView { job_id } },
        ViewKind::UserMenu => rsx! { UserMenu {} },
        ViewKind::OfflineAlert => rsx! { OfflineAlert {} },
        ViewKind::Progress(job) => rsx! { ProgressBar { job } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub app: Arc<TestApp>,
    pub handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn reload_count(&self) -> usize {
        self.app.reloader.count()
    }

    pub fn store(&self) -> SessionStore {
        (*self.handles.store.borrow()).expect("session store registered")
    }

    pub fn current_user(&self) -> User {
        let store = self.store();
        self.dom.in_runtime(|| store.peek())
    }

    pub fn dispatch(&mut self, action: UserAction) {
        let store = self.store();
        self.dom.in_runtime(|| store.dispatch(action));
        drive_dom(&mut self.dom);
    }

    pub fn click_log_out(&mut self) {
        let log_out = self.handles.user_menu.log_out();
        self.dom.in_runtime(|| log_out.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn click_reload(&mut self) {
        let reload = self.handles.offline_alert.reload();
        self.dom.in_runtime(|| reload.call(()));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, app: TestApp) -> ViewHarness {
    let app = Arc::new(app);
    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::clone(&app),
            view,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness { dom, app, handles };
    harness.rebuild();
    harness
}

pub fn sample_job(id: &str, total: usize, completed: usize) -> Job {
    let ids = |count: usize| -> Vec<StepId> {
        (0..count)
            .map(|i| StepId::new(format!("step-{i}")).expect("step id"))
            .collect()
    };
    Job::new(JobId::new(id).expect("job id"), ids(total), ids(completed))
}
