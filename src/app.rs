//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::portal_shell::PortalShell;
use crate::components::toast::ToastHost;
use crate::pages::{
    appointments::AppointmentsPage, book_appointment::BookAppointmentPage, dashboard::DashboardPage,
    invoices::InvoicesPage, owners::OwnersPage, pets::PetsPage, welcome::WelcomePage,
};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// Root application component.
///
/// Provides the session and toast contexts and sets up client-side routing.
/// Owner pages are wrapped in `PortalShell`, which gates them on an active
/// owner; the welcome and owners pages are open.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::load());
    let toast = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(toast);

    view! {
        <Title text="VETCARE Pet Portal"/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment("") view=WelcomePage/>
                <Route path=StaticSegment("owners") view=OwnersPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <PortalShell><DashboardPage/></PortalShell> }
                />
                <Route path=StaticSegment("pets") view=|| view! { <PortalShell><PetsPage/></PortalShell> }/>
                <Route
                    path=StaticSegment("appointments")
                    view=|| view! { <PortalShell><AppointmentsPage/></PortalShell> }
                />
                <Route
                    path=(StaticSegment("appointments"), StaticSegment("book"))
                    view=|| view! { <PortalShell><BookAppointmentPage/></PortalShell> }
                />
                <Route path=StaticSegment("invoices") view=|| view! { <PortalShell><InvoicesPage/></PortalShell> }/>
            </Routes>
        </Router>

        <ToastHost/>
    }
}
