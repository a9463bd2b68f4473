pub mod app;
pub mod context;
pub mod routes;
pub mod store;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, PageReloader, UiApp, WebviewReloader, build_app_context};
pub use store::{SessionStore, use_session_provider, use_session_store};
