use std::sync::Arc;

use deploy_core::model::{Job, JobId, User};

/// Performs a full page reload.
pub trait PageReloader: Send + Sync {
    fn reload(&self);
}

/// Reloads the hosting webview through the document bridge.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebviewReloader;

impl PageReloader for WebviewReloader {
    fn reload(&self) {
        tracing::info!("reloading page");
        let _ = dioxus::document::eval("window.location.reload();");
    }
}

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn jobs(&self) -> Vec<Job>;
    fn job(&self, id: &JobId) -> Option<Job>;
    fn initial_user(&self) -> User;
    fn starts_offline(&self) -> bool;

    fn page_reloader(&self) -> Arc<dyn PageReloader>;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    page_reloader: Arc<dyn PageReloader>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: Arc<dyn UiApp>) -> Self {
        let page_reloader = app.page_reloader();
        Self { app, page_reloader }
    }

    #[must_use]
    pub fn app_name(&self) -> String {
        self.app.app_name().to_owned()
    }

    #[must_use]
    pub fn jobs(&self) -> Vec<Job> {
        self.app.jobs()
    }

    #[must_use]
    pub fn job(&self, id: &JobId) -> Option<Job> {
        self.app.job(id)
    }

    /// Profile the session store starts from.
    #[must_use]
    pub fn initial_user(&self) -> User {
        self.app.initial_user()
    }

    #[must_use]
    pub fn starts_offline(&self) -> bool {
        self.app.starts_offline()
    }

    #[must_use]
    pub fn page_reloader(&self) -> Arc<dyn PageReloader> {
        Arc::clone(&self.page_reloader)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
