//! Booking form for a new appointment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the owner's pets and the service catalog in parallel. Without any
//! pets the page offers a link to `/pets` instead of the form. The total
//! shown is a client-side sum; only ids go to the backend, which prices the
//! appointment itself.

#[cfg(test)]
#[path = "book_appointment_test.rs"]
mod book_appointment_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::button::{Button, ButtonSize, ButtonVariant, block_link_class};
use crate::components::multi_select::MultiSelect;
use crate::components::skeleton::Skeleton;
use crate::net::api;
use crate::net::types::{NewAppointment, Pet, Service};
use crate::state::portfolio::owner_pets;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::format::{format_money, sum_prices};
use crate::util::timer::run_after;
use crate::util::{clock, dates};

pub const APPOINTMENTS_PATH: &str = "/appointments";
pub const BOOKED_REDIRECT_MS: u64 = 1500;
pub const PET_QUERY_KEY: &str = "pet";

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub pet_id: String,
    pub vet_name: String,
    pub datetime: String,
    pub service_ids: Vec<i64>,
}

impl BookingDraft {
    /// Build the request payload.
    ///
    /// # Errors
    ///
    /// Returns the toast message when pet, vet, datetime or services are
    /// missing.
    pub fn validate(&self) -> Result<NewAppointment, &'static str> {
        const MISSING: &str = "Please fill in all fields";
        let pet_id = self.pet_id.trim().parse::<i64>().map_err(|_| MISSING)?;
        let vet_name = self.vet_name.trim();
        let datetime = self.datetime.trim();
        if vet_name.is_empty() || datetime.is_empty() || self.service_ids.is_empty() {
            return Err(MISSING);
        }
        Ok(NewAppointment {
            pet_id,
            vet_name: vet_name.to_owned(),
            datetime: datetime.to_owned(),
            service_ids: self.service_ids.clone(),
        })
    }
}

/// Sum of the prices of the selected services.
pub fn selected_total(services: &[Service], selected: &[i64]) -> f64 {
    sum_prices(services.iter().filter(|s| selected.contains(&s.id)).map(|s| s.price))
}

/// Pet id from `?pet=`, kept only when it names one of `pets`.
pub fn prefill_pet(requested: Option<&str>, pets: &[Pet]) -> String {
    requested
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|id| pets.iter().any(|p| p.id == *id))
        .map(|id| id.to_string())
        .unwrap_or_default()
}

pub fn pet_option_label(pet: &Pet) -> String {
    format!("{} ({})", pet.name, pet.species)
}

#[component]
pub fn BookAppointmentPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let pets = RwSignal::new(Vec::<Pet>::new());
    let services = RwSignal::new(Vec::<Service>::new());
    let loading = RwSignal::new(true);
    let submitting = RwSignal::new(false);

    let pet_id = RwSignal::new(String::new());
    let vet_name = RwSignal::new(String::new());
    let datetime = RwSignal::new(String::new());
    let service_ids = RwSignal::new(Vec::<i64>::new());

    if let Some(owner_id) = session.with_untracked(|s| s.owner_id().map(str::to_owned)) {
        let requested = query.with_untracked(|q| q.get(PET_QUERY_KEY));
        leptos::task::spawn_local(async move {
            match futures::try_join!(api::list_pets(), api::list_services()) {
                Ok((all_pets, all_services)) => {
                    let mine = owner_pets(all_pets, &owner_id);
                    pet_id.set(prefill_pet(requested.as_deref(), &mine));
                    pets.set(mine);
                    services.set(all_services);
                }
                Err(e) => {
                    log::error!("failed to fetch booking data: {e}");
                    toast.update(|t| {
                        t.error("Failed to load data");
                    });
                }
            }
            loading.set(false);
        });
    }

    let booked = RwSignal::new(false);
    Effect::new(move || {
        if booked.get() {
            navigate(APPOINTMENTS_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let draft = BookingDraft {
            pet_id: pet_id.get(),
            vet_name: vet_name.get(),
            datetime: datetime.get(),
            service_ids: service_ids.get(),
        };
        let payload = match draft.validate() {
            Ok(payload) => payload,
            Err(message) => {
                toast.update(|t| {
                    t.error(message);
                });
                return;
            }
        };
        submitting.set(true);
        leptos::task::spawn_local(async move {
            match api::create_appointment(&payload).await {
                Ok(appointment) => {
                    log::info!("booked appointment {} for pet {}", appointment.id, appointment.pet_id);
                    toast.update(|t| {
                        t.success("Appointment booked successfully!");
                    });
                    run_after(Duration::from_millis(BOOKED_REDIRECT_MS), move || booked.set(true));
                }
                Err(e) => {
                    toast.update(|t| {
                        t.error(format!("Failed to book appointment: {e}"));
                    });
                }
            }
            submitting.set(false);
        });
    };

    let min_datetime = StoredValue::new(dates::min_booking_input(clock::now_local()));
    let total = move || services.with(|all| service_ids.with(|ids| selected_total(all, ids)));

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="page page--narrow"><Skeleton count=5 height=80/></div> }
        >
            <Show
                when=move || pets.with(|p| !p.is_empty())
                fallback=|| {
                    view! {
                        <div class="page page--narrow page--center">
                            <h1 class="page__title">"Book Appointment"</h1>
                            <div class="card">
                                <p class="page__subtitle">"You need to add a pet before booking an appointment."</p>
                                <a class=block_link_class(ButtonVariant::Primary, ButtonSize::Lg) href="/pets">
                                    "Go to My Pets"
                                </a>
                            </div>
                        </div>
                    }
                }
            >
                <div class="page page--narrow booking-page">
                    <a class="page__back" href=APPOINTMENTS_PATH>"← Back to Appointments"</a>
                    <header class="page__header">
                        <h1 class="page__title">"Book Appointment"</h1>
                        <p class="page__subtitle">"Schedule a visit for your pet"</p>
                    </header>

                    <form class="card form" on:submit=on_submit>
                        <label class="form__label">
                            "Select Your Pet *"
                            <select
                                class="form__input"
                                prop:value=move || pet_id.get()
                                on:change=move |ev| pet_id.set(event_target_value(&ev))
                            >
                                <option value="">"Choose a pet"</option>
                                {move || {
                                    pets.get()
                                        .iter()
                                        .map(|pet| {
                                            let id = pet.id.to_string();
                                            let selected = pet_id.get_untracked() == id;
                                            view! {
                                                <option value=id selected=selected>{pet_option_label(pet)}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        </label>
                        <label class="form__label">
                            "Veterinarian Name *"
                            <input
                                class="form__input"
                                type="text"
                                placeholder="e.g., Dr. Sarah Johnson"
                                prop:value=move || vet_name.get()
                                on:input=move |ev| vet_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__label">
                            "Appointment Date & Time *"
                            <input
                                class="form__input"
                                type="datetime-local"
                                min=min_datetime.get_value()
                                prop:value=move || datetime.get()
                                on:input=move |ev| datetime.set(event_target_value(&ev))
                            />
                            <span class="form__hint">"Schedule at least 1 day in advance"</span>
                        </label>
                        <div class="form__label">
                            "Select Services *"
                            <MultiSelect options=services.get_untracked() selected=service_ids placeholder="Choose services..."/>
                        </div>

                        <Show when=move || service_ids.with(|ids| !ids.is_empty())>
                            <div class="price-summary">
                                <div class="price-summary__row">
                                    <span>"Subtotal"</span>
                                    <span>{move || format_money(total())}</span>
                                </div>
                                <div class="price-summary__row price-summary__row--total">
                                    <span>"Total"</span>
                                    <span>{move || format_money(total())}</span>
                                </div>
                            </div>
                        </Show>

                        <div class="form__actions">
                            <a class=block_link_class(ButtonVariant::Ghost, ButtonSize::Lg) href=APPOINTMENTS_PATH>"Cancel"</a>
                            <Button
                                submit=true
                                size=ButtonSize::Lg
                                full_width=true
                                disabled=Signal::derive(move || submitting.get() || pet_id.with(String::is_empty))
                            >
                                {move || if submitting.get() { "Booking..." } else { "Book Appointment →" }}
                            </Button>
                        </div>
                    </form>

                    <div class="action-grid">
                        <a class=block_link_class(ButtonVariant::Secondary, ButtonSize::Lg) href="/pets">"🐾 View My Pets"</a>
                        <a class=block_link_class(ButtonVariant::Secondary, ButtonSize::Lg) href="/dashboard">"🏠 Go to Dashboard"</a>
                    </div>

                    <aside class="tip">
                        <h3 class="tip__title">"📅 About Your Appointment"</h3>
                        <ul>
                            <li>"Appointments are available 1+ days in advance"</li>
                            <li>"You can manage multiple services in one visit"</li>
                            <li>"Invoices are generated after completion"</li>
                            <li>"You'll receive a confirmation after booking"</li>
                        </ul>
                    </aside>
                </div>
            </Show>
        </Show>
    }
}
