//! Appointment list with status filters, completion and local cancel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the active owner's appointments (reached through their pets).
//! "Mark Done" posts to the complete endpoint and swaps in the returned
//! record. "Cancel" only drops the card from this page; the backend has no
//! cancel endpoint, so a reload brings it back.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeSize, BadgeVariant};
use crate::components::button::{Button, ButtonSize, ButtonVariant, block_link_class};
use crate::components::card::Card;
use crate::components::empty_state::EmptyState;
use crate::components::skeleton::Skeleton;
use crate::net::api;
use crate::net::types::{Appointment, Pet, Service};
use crate::state::portfolio::{owner_appointments, owner_pets, pet_name};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::dates;

pub const BOOK_PATH: &str = "/appointments/book";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppointmentFilter {
    #[default]
    All,
    Scheduled,
    Done,
}

impl AppointmentFilter {
    pub const TABS: [Self; 3] = [Self::All, Self::Scheduled, Self::Done];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Scheduled => "Scheduled",
            Self::Done => "Done",
        }
    }

    pub fn matches(self, appointment: &Appointment) -> bool {
        match self {
            Self::All => true,
            Self::Scheduled => !appointment.is_done(),
            Self::Done => appointment.is_done(),
        }
    }

    pub fn count(self, appointments: &[Appointment]) -> usize {
        appointments.iter().filter(|a| self.matches(a)).count()
    }

    pub fn apply(self, appointments: &[Appointment]) -> Vec<Appointment> {
        appointments.iter().filter(|a| self.matches(a)).cloned().collect()
    }

    /// Empty-state title and description for this tab.
    pub fn empty_copy(self) -> (String, &'static str) {
        match self {
            Self::All => ("No Appointments".to_owned(), "Start by booking your first appointment for your pet"),
            other => (format!("No {} appointments", other.label().to_lowercase()), "No appointments in this category"),
        }
    }
}

pub fn status_label(appointment: &Appointment) -> &'static str {
    if appointment.is_done() { "✓ DONE" } else { "SCHEDULED" }
}

pub fn status_badge(appointment: &Appointment) -> BadgeVariant {
    if appointment.is_done() { BadgeVariant::Done } else { BadgeVariant::Scheduled }
}

/// Comma-separated service names, or `Services TBD`.
pub fn services_label(services: &[Service]) -> String {
    if services.is_empty() {
        return "Services TBD".to_owned();
    }
    services.iter().map(|s| s.name.as_str()).collect::<Vec<_>>().join(", ")
}

/// Swap in `updated` where the ids match. Returns whether anything changed.
pub fn replace_appointment(appointments: &mut [Appointment], updated: Appointment) -> bool {
    match appointments.iter_mut().find(|a| a.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Drop appointment `id` from the local list. Returns whether it was present.
pub fn remove_appointment(appointments: &mut Vec<Appointment>, id: i64) -> bool {
    let before = appointments.len();
    appointments.retain(|a| a.id != id);
    appointments.len() != before
}

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let pets = RwSignal::new(Vec::<Pet>::new());
    let appointments = RwSignal::new(Vec::<Appointment>::new());
    let loading = RwSignal::new(true);
    let filter = RwSignal::new(AppointmentFilter::All);

    if let Some(owner_id) = session.with_untracked(|s| s.owner_id().map(str::to_owned)) {
        leptos::task::spawn_local(async move {
            match futures::try_join!(api::list_appointments(), api::list_pets()) {
                Ok((all_appointments, all_pets)) => {
                    let mine = owner_pets(all_pets, &owner_id);
                    appointments.set(owner_appointments(all_appointments, &mine));
                    pets.set(mine);
                }
                Err(e) => {
                    log::error!("failed to fetch appointments: {e}");
                    toast.update(|t| {
                        t.error("Failed to load appointments");
                    });
                }
            }
            loading.set(false);
        });
    }

    let on_mark_done = Callback::new(move |id: i64| {
        leptos::task::spawn_local(async move {
            match api::complete_appointment(id).await {
                Ok(updated) => {
                    log::info!("appointment {id} marked done");
                    appointments.update(|list| {
                        replace_appointment(list, updated);
                    });
                    toast.update(|t| {
                        t.success("Appointment marked as done!");
                    });
                }
                Err(e) => {
                    log::error!("failed to complete appointment {id}: {e}");
                    toast.update(|t| {
                        t.error("Failed to update appointment");
                    });
                }
            }
        });
    });

    let on_cancel = Callback::new(move |id: i64| {
        appointments.update(|list| {
            remove_appointment(list, id);
        });
        toast.update(|t| {
            t.info("Appointment cancelled");
        });
    });

    let visible = move || appointments.with(|list| filter.get().apply(list));

    view! {
        <div class="page appointments-page">
            <a class="page__back" href="/dashboard">"← Back to Dashboard"</a>
            <header class="page__header page__header--split">
                <div>
                    <h1 class="page__title">"My Appointments"</h1>
                    <p class="page__subtitle">"Schedule and manage your pet's visits"</p>
                </div>
                <a class=block_link_class(ButtonVariant::Primary, ButtonSize::Lg) href=BOOK_PATH>"+ Book Appointment"</a>
            </header>

            <Show when=move || !loading.get() && appointments.with(|a| !a.is_empty())>
                <div class="filter-tabs" role="tablist">
                    {AppointmentFilter::TABS
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="filter-tabs__tab"
                                    class:filter-tabs__tab--active=move || filter.get() == tab
                                    role="tab"
                                    on:click=move |_| filter.set(tab)
                                >
                                    {tab.label()}
                                    <span class="filter-tabs__count">
                                        {move || format!("({})", appointments.with(|a| tab.count(a)))}
                                    </span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="card-list">
                            {(0..3).map(|_| view! { <div class="card"><Skeleton count=3/></div> }).collect::<Vec<_>>()}
                        </div>
                    }
                }
            >
                <Show
                    when=move || appointments.with(|list| filter.get().count(list) > 0)
                    fallback=move || {
                        let current = filter.get();
                        let (title, description) = current.empty_copy();
                        if current == AppointmentFilter::All {
                            view! {
                                <EmptyState
                                    icon="📅"
                                    title=title
                                    description=description
                                    action_label="Book First Appointment"
                                    action_href=BOOK_PATH
                                />
                            }
                            .into_any()
                        } else {
                            view! { <EmptyState icon="📅" title=title description=description/> }.into_any()
                        }
                    }
                >
                    <div class="card-list">
                        <For
                            each=visible
                            key=|a| (a.id, a.status)
                            children=move |appointment| {
                                view! {
                                    <AppointmentCard
                                        appointment=appointment
                                        pets=pets
                                        on_mark_done=on_mark_done
                                        on_cancel=on_cancel
                                    />
                                }
                            }
                        />
                    </div>
                    <div class="action-grid">
                        <a class=block_link_class(ButtonVariant::Secondary, ButtonSize::Lg) href="/pets">
                            "🐾 View My Pets"
                        </a>
                        <a class=block_link_class(ButtonVariant::Secondary, ButtonSize::Lg) href="/invoices">
                            "🧾 View My Invoices"
                        </a>
                    </div>
                    <aside class="tip">
                        <h3 class="tip__title">"📋 Important Notes"</h3>
                        <ul>
                            <li>"Completed appointments can be invoiced from the Invoices page"</li>
                            <li>"Cancellations only hide the appointment on this page"</li>
                            <li>"Contact us directly if you need to reschedule"</li>
                        </ul>
                    </aside>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn AppointmentCard(
    appointment: Appointment,
    pets: RwSignal<Vec<Pet>>,
    on_mark_done: Callback<i64>,
    on_cancel: Callback<i64>,
) -> impl IntoView {
    let id = appointment.id;
    let pet_id = appointment.pet_id;
    let done = appointment.is_done();
    let when = dates::display_datetime(&appointment.datetime);
    let services = services_label(&appointment.services);
    let badge = status_badge(&appointment);
    let label = status_label(&appointment);
    let vet_name = appointment.vet_name.clone();

    view! {
        <Card class=if done { "appointment-card appointment-card--done" } else { "appointment-card" }>
            <div class="appointment-card__main">
                <h3 class="appointment-card__pet">{move || format!("🐾 {}", pets.with(|p| pet_name(p, pet_id)))}</h3>
                <Badge variant=badge size=BadgeSize::Sm>{label}</Badge>
                <dl class="appointment-card__details">
                    <div><dt>"📅"</dt><dd>{when}</dd></div>
                    <div><dt>"👤"</dt><dd>{vet_name}</dd></div>
                    <div><dt>"🩺"</dt><dd>{services}</dd></div>
                    <div><dt>"#"</dt><dd>{format!("ID: #{id}")}</dd></div>
                </dl>
            </div>
            <div class="appointment-card__actions">
                <Show when=move || !done>
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Sm
                        on_click=Callback::new(move |()| on_mark_done.run(id))
                    >
                        "✓ Mark Done"
                    </Button>
                </Show>
                <Button variant=ButtonVariant::Danger size=ButtonSize::Sm on_click=Callback::new(move |()| on_cancel.run(id))>
                    "🗑 Cancel"
                </Button>
            </div>
        </Card>
    }
}
