//! Portal navigation sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `PortalShell` on every owner page. Shows the clinic brand, the
//! active owner, the four section links and the "Switch Owner" action. On
//! narrow screens it collapses behind a toggle button.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::SessionState;

pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", icon: "🏠", href: "/dashboard" },
    NavItem { label: "My Pets", icon: "🐾", href: "/pets" },
    NavItem { label: "Appointments", icon: "📅", href: "/appointments" },
    NavItem { label: "Invoices", icon: "🧾", href: "/invoices" },
];

/// Whether `href` is the current section. Nested routes such as
/// `/appointments/book` keep their parent highlighted.
pub fn is_active(pathname: &str, href: &str) -> bool {
    let pathname = pathname.trim_end_matches('/');
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar(on_logout: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let mobile_open = RwSignal::new(false);

    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let pathname = location.pathname;
            let href = item.href;
            view! {
                <a
                    class="sidebar__link"
                    class:sidebar__link--active=move || is_active(&pathname.get(), href)
                    href=href
                    on:click=move |_| mobile_open.set(false)
                >
                    <span class="sidebar__link-icon" aria-hidden="true">{item.icon}</span>
                    <span class="sidebar__link-label">{item.label}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <button
            class="sidebar-toggle"
            aria-label="Toggle navigation"
            on:click=move |_| mobile_open.update(|o| *o = !*o)
        >
            {move || if mobile_open.get() { "✕" } else { "☰" }}
        </button>
        <aside class="sidebar" class:sidebar--open=move || mobile_open.get()>
            <div class="sidebar__brand">
                <span class="sidebar__logo" aria-hidden="true">"🐾"</span>
                <span class="sidebar__title">"VETCARE"</span>
            </div>
            <div class="sidebar__owner">
                <span class="sidebar__owner-label">"Signed in as"</span>
                <span class="sidebar__owner-name">{move || session.with(|s| s.display_name().to_owned())}</span>
            </div>
            <nav class="sidebar__nav">{links}</nav>
            <button class="btn btn--ghost sidebar__logout" on:click=move |_| on_logout.run(())>
                "↩ Switch Owner"
            </button>
        </aside>
    }
}
