//! "My Pets": the owner's pets and the add-pet dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists pets whose `owner_id` matches the session. New pets are posted with
//! the session owner id and appended locally without a refetch. Each card
//! links to the booking page with the pet preselected.

#[cfg(test)]
#[path = "pets_test.rs"]
mod pets_test;

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeSize};
use crate::components::button::{Button, ButtonSize, ButtonVariant, block_link_class};
use crate::components::card::Card;
use crate::components::empty_state::EmptyState;
use crate::components::modal::Modal;
use crate::components::skeleton::Skeleton;
use crate::net::api;
use crate::net::types::{NewPet, Pet};
use crate::state::portfolio::owner_pets;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::{clock, dates};

pub const SPECIES_OPTIONS: [&str; 7] = ["Dog", "Cat", "Rabbit", "Bird", "Hamster", "Guinea Pig", "Other"];

pub fn species_emoji(species: &str) -> &'static str {
    match species {
        "Dog" => "🐕",
        "Cat" => "🐈",
        "Rabbit" => "🐰",
        "Bird" => "🦜",
        "Hamster" | "Guinea Pig" => "🐹",
        _ => "🐾",
    }
}

/// Booking route with the pet preselected.
pub fn book_link(pet_id: i64) -> String {
    format!("/appointments/book?pet={pet_id}")
}

pub fn age_label(dob: Option<&str>, today: time::Date) -> String {
    format!("{} years", dates::display_age(dob, today))
}

/// Build the add-pet payload for `owner_id`.
///
/// # Errors
///
/// Returns the toast message when any field is blank.
pub fn validate_new_pet(name: &str, species: &str, breed: &str, dob: &str, owner_id: &str) -> Result<NewPet, &'static str> {
    let fields = [name.trim(), species.trim(), breed.trim(), dob.trim()];
    if fields.iter().any(|f| f.is_empty()) {
        return Err("Please fill in all fields");
    }
    let [name, species, breed, dob] = fields;
    Ok(NewPet {
        name: name.to_owned(),
        species: species.to_owned(),
        breed: breed.to_owned(),
        dob: dob.to_owned(),
        owner_id: owner_id.to_owned(),
    })
}

#[component]
pub fn PetsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let pets = RwSignal::new(Vec::<Pet>::new());
    let loading = RwSignal::new(true);
    let show_add = RwSignal::new(false);

    let name = RwSignal::new(String::new());
    let species = RwSignal::new(String::new());
    let breed = RwSignal::new(String::new());
    let dob = RwSignal::new(String::new());

    if let Some(owner_id) = session.with_untracked(|s| s.owner_id().map(str::to_owned)) {
        leptos::task::spawn_local(async move {
            match api::list_pets().await {
                Ok(all) => pets.set(owner_pets(all, &owner_id)),
                Err(e) => {
                    log::error!("failed to fetch pets: {e}");
                    toast.update(|t| {
                        t.error("Failed to load pets");
                    });
                }
            }
            loading.set(false);
        });
    }

    let reset_form = move || {
        name.set(String::new());
        species.set(String::new());
        breed.set(String::new());
        dob.set(String::new());
    };

    let open_add = Callback::new(move |()| show_add.set(true));
    let close_add = Callback::new(move |()| show_add.set(false));

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let owner_id = session.with_untracked(|s| s.owner_id().map(str::to_owned)).unwrap_or_default();
        let payload = match validate_new_pet(&name.get(), &species.get(), &breed.get(), &dob.get(), &owner_id) {
            Ok(payload) => payload,
            Err(message) => {
                toast.update(|t| {
                    t.error(message);
                });
                return;
            }
        };
        leptos::task::spawn_local(async move {
            match api::create_pet(&payload).await {
                Ok(pet) => {
                    log::info!("added pet {} for owner {}", pet.id, pet.owner_id);
                    pets.update(|list| list.push(pet));
                    toast.update(|t| {
                        t.success("Pet added successfully!");
                    });
                    show_add.set(false);
                    reset_form();
                }
                Err(e) => {
                    toast.update(|t| {
                        t.error(format!("Failed to add pet: {e}"));
                    });
                }
            }
        });
    };

    let today = clock::today();

    view! {
        <div class="page pets-page">
            <a class="page__back" href="/dashboard">"← Back to Dashboard"</a>
            <header class="page__header page__header--split">
                <div>
                    <h1 class="page__title">"My Pets"</h1>
                    <p class="page__subtitle">"Manage your beloved companions"</p>
                </div>
                <Button size=ButtonSize::Lg on_click=open_add>"+ Add Pet"</Button>
            </header>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="card-grid">
                            {(0..3).map(|_| view! { <div class="card"><Skeleton count=3/></div> }).collect::<Vec<_>>()}
                        </div>
                    }
                }
            >
                <Show
                    when=move || pets.with(|p| !p.is_empty())
                    fallback=move || {
                        view! {
                            <EmptyState
                                icon="🐾"
                                title="No Pets Yet"
                                description="Start by adding your first pet to manage appointments and invoices"
                                action_label="Add First Pet"
                                on_action=open_add
                            />
                        }
                    }
                >
                    <div class="card-grid">
                        <For
                            each=move || pets.get()
                            key=|pet| pet.id
                            children=move |pet| view! { <PetCard pet=pet today=today/> }
                        />
                    </div>
                    <div class="action-grid">
                        <a class=block_link_class(ButtonVariant::Secondary, ButtonSize::Lg) href="/appointments">
                            "📅 View My Appointments"
                        </a>
                        <a class=block_link_class(ButtonVariant::Secondary, ButtonSize::Lg) href="/invoices">
                            "🧾 View My Invoices"
                        </a>
                    </div>
                </Show>
            </Show>

            <Modal open=show_add title="Add New Pet" on_close=close_add>
                <form class="form" on:submit=on_add>
                    <label class="form__label">
                        "Pet Name *"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="e.g., Max, Whiskers"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Species *"
                        <select
                            class="form__input"
                            prop:value=move || species.get()
                            on:change=move |ev| species.set(event_target_value(&ev))
                        >
                            <option value="">"Select a species"</option>
                            {SPECIES_OPTIONS
                                .iter()
                                .map(|s| view! { <option value=*s>{*s}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="form__label">
                        "Breed *"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="e.g., Golden Retriever"
                            prop:value=move || breed.get()
                            on:input=move |ev| breed.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Date of Birth *"
                        <input
                            class="form__input"
                            type="date"
                            prop:value=move || dob.get()
                            on:input=move |ev| dob.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="form__actions">
                        <Button variant=ButtonVariant::Ghost on_click=close_add>"Cancel"</Button>
                        <Button submit=true>"Add Pet"</Button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}

#[component]
fn PetCard(pet: Pet, today: time::Date) -> impl IntoView {
    let emoji = species_emoji(&pet.species);
    let age = age_label(pet.dob.as_deref(), today);
    let dob = dates::display_date(pet.dob.as_deref());
    let breed = pet.breed.clone().unwrap_or_else(|| dates::UNKNOWN.to_owned());

    view! {
        <Card hover=true class="pet-card">
            <h3 class="pet-card__name">{format!("{emoji} {}", pet.name)}</h3>
            <p class="pet-card__id">{format!("ID: #{}", pet.id)}</p>
            <dl class="pet-card__facts">
                <div class="pet-card__fact">
                    <dt>"Species"</dt>
                    <dd><Badge size=BadgeSize::Sm>{pet.species.clone()}</Badge></dd>
                </div>
                <div class="pet-card__fact">
                    <dt>"Breed"</dt>
                    <dd>{breed}</dd>
                </div>
                <div class="pet-card__fact">
                    <dt>"Age"</dt>
                    <dd class="pet-card__age">{age}</dd>
                </div>
                <div class="pet-card__fact">
                    <dt>"DOB"</dt>
                    <dd>{dob}</dd>
                </div>
            </dl>
            <a class="pet-card__book" href=book_link(pet.id)>"📅 Book Appointment"</a>
        </Card>
    }
}
