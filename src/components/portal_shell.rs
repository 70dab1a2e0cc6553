//! Layout for owner pages: gate, sidebar, and the logout flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route that needs an active owner. Without one the owner gate
//! sends the visitor back to `/` and the content is not rendered.
//!
//! Logout ("Switch Owner") clears the stored identity immediately, shows an
//! info toast, and reloads `/` after one second so every page starts from an
//! empty session.

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::owner_gate::install_owner_gate;
use crate::util::timer::run_after;

pub const LOGOUT_REDIRECT_MS: u64 = 1000;

#[component]
pub fn PortalShell(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    install_owner_gate(session, navigate);

    let on_logout = Callback::new(move |()| {
        // The in-memory session stays until the reload so the gate does not
        // redirect before the toast is seen.
        session.update_untracked(SessionState::clear);
        toast.update(|t| {
            t.info("Logged out successfully");
        });
        log::info!("owner session cleared");
        run_after(Duration::from_millis(LOGOUT_REDIRECT_MS), || {
            #[cfg(feature = "csr")]
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(crate::util::owner_gate::WELCOME_PATH);
            }
        });
    });

    view! {
        <div class="portal">
            <Sidebar on_logout=on_logout/>
            <main class="portal__content">
                <Show
                    when=move || session.with(|s| s.owner_id().is_some())
                    fallback=|| view! { <p class="portal__redirect">"Redirecting..."</p> }
                >
                    {children()}
                </Show>
            </main>
        </div>
    }
}
