//! Owner home: greeting, headline counts, and shortcuts.
//!
//! SYSTEM CONTEXT
//! ==============
//! First page after the welcome flow. Loads pets, appointments and invoices
//! in parallel, scopes them to the active owner, and shows the three counts
//! (skeletons until the fetch settles).

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::{ButtonSize, ButtonVariant, block_link_class};
use crate::components::card::Card;
use crate::components::skeleton::Skeleton;
use crate::net::api;
use crate::state::portfolio::{OwnerPortfolio, PortfolioStats};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

pub struct QuickLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub const QUICK_LINKS: [QuickLink; 3] = [
    QuickLink { icon: "🐾", label: "My Pets", description: "Manage your pets", href: "/pets" },
    QuickLink {
        icon: "📅",
        label: "Appointments",
        description: "View & book appointments",
        href: "/appointments",
    },
    QuickLink { icon: "🧾", label: "Invoices", description: "View invoices", href: "/invoices" },
];

pub fn greeting(display_name: &str) -> String {
    format!("Welcome back, {display_name}!")
}

/// Label, icon and value for each stat card, in display order.
pub fn stat_cards(stats: PortfolioStats) -> [(&'static str, &'static str, usize); 3] {
    [("Pets", "🐾", stats.pets), ("Appointments", "📅", stats.appointments), ("Invoices", "🧾", stats.invoices)]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let link_target = RwSignal::new(None::<&'static str>);
    Effect::new(move || {
        if let Some(href) = link_target.get() {
            navigate(href, NavigateOptions::default());
        }
    });

    let loading = RwSignal::new(true);
    let stats = RwSignal::new(PortfolioStats::default());

    if let Some(owner_id) = session.with_untracked(|s| s.owner_id().map(str::to_owned)) {
        leptos::task::spawn_local(async move {
            match futures::try_join!(api::list_pets(), api::list_appointments(), api::list_invoices()) {
                Ok((pets, appointments, invoices)) => {
                    let portfolio = OwnerPortfolio::scope(&owner_id, pets, appointments, invoices);
                    stats.set(portfolio.stats());
                }
                Err(e) => {
                    log::error!("failed to fetch dashboard stats: {e}");
                    toast.update(|t| {
                        t.error("Failed to load data");
                    });
                }
            }
            loading.set(false);
        });
    }

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <h1 class="page__title">{move || greeting(session.with(|s| s.display_name().to_owned()).as_str())}</h1>
                <p class="page__subtitle">"Manage your pets and appointments with ease"</p>
            </header>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="stat-grid">
                            {(0..3).map(|_| view! { <div class="stat-card"><Skeleton count=2/></div> }).collect::<Vec<_>>()}
                        </div>
                    }
                }
            >
                <div class="stat-grid">
                    {move || {
                        stat_cards(stats.get())
                            .into_iter()
                            .map(|(label, icon, value)| {
                                view! {
                                    <div class="stat-card">
                                        <div class="stat-card__head">
                                            <span class="stat-card__label">{label}</span>
                                            <span class="stat-card__icon" aria-hidden="true">{icon}</span>
                                        </div>
                                        <div class="stat-card__value">{value}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <section class="page__section">
                <h2 class="page__section-title">"Quick Links"</h2>
                <div class="link-grid">
                    {QUICK_LINKS
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            view! {
                                <Card
                                    hover=true
                                    class="quick-link"
                                    on_click=Callback::new(move |()| link_target.set(Some(href)))
                                >
                                    <div class="quick-link__icon" aria-hidden="true">{link.icon}</div>
                                    <h3 class="quick-link__label">{link.label}</h3>
                                    <p class="quick-link__description">{link.description}</p>
                                </Card>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="page__section">
                <h2 class="page__section-title">"Quick Actions"</h2>
                <div class="action-grid">
                    <a class=block_link_class(ButtonVariant::Primary, ButtonSize::Lg) href="/pets">"+ Add New Pet"</a>
                    <a class=block_link_class(ButtonVariant::Secondary, ButtonSize::Lg) href="/appointments/book">"📅 Book Appointment"</a>
                </div>
            </section>

            <aside class="tip">
                <h3 class="tip__title">"💡 Tip"</h3>
                <p>
                    "Keep your pet information up to date to ensure smooth appointment scheduling and accurate medical records."
                </p>
            </aside>
        </div>
    }
}
