use deploy_core::UserAction;
use dioxus::prelude::*;

use crate::store::use_session_store;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn UserMenu() -> Element {
    let store = use_session_store();
    let user = store.current();

    let log_out = use_callback(move |()| {
        if let Some(username) = store.peek().username {
            store.dispatch(UserAction::LoggedOut(username));
        }
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<UserMenuTestHandles>() {
            handles.register(log_out);
        }
    }

    match user.display_name() {
        Some(name) if user.is_logged_in() => rsx! {
            div { class: "user-menu",
                span { class: "user-menu__name", "{name}" }
                button { r#type: "button", onclick: move |_| log_out.call(()), "Log Out" }
            }
        },
        _ => rsx! {
            div { class: "user-menu",
                span { class: "user-menu__login", "Log In" }
            }
        },
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct UserMenuTestHandles {
    log_out: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl UserMenuTestHandles {
    pub(crate) fn register(&self, log_out: Callback<()>) {
        *self.log_out.borrow_mut() = Some(log_out);
    }

    pub(crate) fn log_out(&self) -> Callback<()> {
        (*self.log_out.borrow()).expect("log out registered")
    }
}
