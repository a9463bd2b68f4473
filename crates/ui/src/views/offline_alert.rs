use dioxus::document::eval;
use dioxus::prelude::*;

use crate::context::AppContext;
use super::scripts::CONNECTIVITY_SCRIPT;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Track whether the webview is offline, starting from `initially_offline`.
pub fn use_offline_status(initially_offline: bool) -> Signal<bool> {
    let mut offline = use_signal(|| initially_offline);

    use_future(move || async move {
        let mut offline = offline;
        let mut watcher = eval(CONNECTIVITY_SCRIPT);
        while let Ok(online) = watcher.recv::<bool>().await {
            let current = *offline.peek();
            if let Some(next) = offline_transition(current, online) {
                tracing::info!(online, "connectivity changed");
                offline.set(next);
            }
        }
    });

    offline
}

/// New offline flag after the webview reports `online`, or `None` when nothing changed.
fn offline_transition(offline: bool, online: bool) -> Option<bool> {
    (offline == online).then_some(!online)
}

#[component]
pub fn OfflineAlert() -> Element {
    let ctx = use_context::<AppContext>();
    let reloader = ctx.page_reloader();
    let reload = use_callback(move |()| reloader.reload());

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<OfflineAlertTestHandles>() {
            handles.register(reload);
        }
    }

    rsx! {
        div { class: "offline-alert", role: "alert",
            "You are no longer connected to the server. Please "
            a {
                href: "#",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    reload.call(());
                },
                "reload the page."
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct OfflineAlertTestHandles {
    reload: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl OfflineAlertTestHandles {
    pub(crate) fn register(&self, reload: Callback<()>) {
        *self.reload.borrow_mut() = Some(reload);
    }

    pub(crate) fn reload(&self) -> Callback<()> {
        (*self.reload.borrow()).expect("reload registered")
    }
}
