//! Welcome page: pick an existing owner profile or create a new one.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only entry into the portal. The visitor either finds their
//! profile by email (substring, case-insensitive, over the full owner list
//! fetched on mount) or registers a new one. Either path records the owner in
//! the session and continues to `/dashboard`.

#[cfg(test)]
#[path = "welcome_test.rs"]
mod welcome_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::net::api;
use crate::net::types::{NewOwner, Owner};
use crate::state::session::{ActiveOwner, SessionState};
use crate::state::toast::ToastState;
use crate::util::timer::run_after;

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const CREATE_REDIRECT_MS: u64 = 1500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WelcomeStep {
    #[default]
    Method,
    Search,
    Create,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    EmptyQuery,
    NoMatches,
    Matches(Vec<Owner>),
}

/// Case-insensitive substring match of `query` against owner emails.
pub fn search_owners_by_email(owners: &[Owner], query: &str) -> SearchOutcome {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchOutcome::EmptyQuery;
    }
    let matches: Vec<Owner> = owners
        .iter()
        .filter(|o| o.email.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    if matches.is_empty() { SearchOutcome::NoMatches } else { SearchOutcome::Matches(matches) }
}

/// Build the create-owner payload.
///
/// # Errors
///
/// Returns the toast message when any field is blank.
pub fn validate_new_owner(name: &str, email: &str, phone: &str) -> Result<NewOwner, &'static str> {
    let (name, email, phone) = (name.trim(), email.trim(), phone.trim());
    if name.is_empty() || email.is_empty() || phone.is_empty() {
        return Err("Please fill in all fields");
    }
    Ok(NewOwner { name: name.to_owned(), email: email.to_owned(), phone: phone.to_owned() })
}

#[component]
pub fn WelcomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let step = RwSignal::new(WelcomeStep::Method);
    let owners = RwSignal::new(Vec::<Owner>::new());
    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<Owner>::new());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    leptos::task::spawn_local(async move {
        match api::list_owners().await {
            Ok(list) => owners.set(list),
            Err(e) => log::error!("failed to fetch owners: {e}"),
        }
    });

    let run_search = move || match owners.with(|list| search_owners_by_email(list, &query.get())) {
        SearchOutcome::EmptyQuery => {
            toast.update(|t| {
                t.error("Please enter an email");
            });
        }
        SearchOutcome::NoMatches => {
            results.set(Vec::new());
            toast.update(|t| {
                t.info("No owners found. You can create a new profile instead.");
            });
        }
        SearchOutcome::Matches(found) => results.set(found),
    };

    // Selection and creation both land here; the effect records the owner
    // and leaves the page.
    let chosen = RwSignal::new(None::<ActiveOwner>);
    Effect::new(move || {
        if let Some(owner) = chosen.get() {
            session.update(|s| s.activate(owner));
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let payload = match validate_new_owner(&name.get(), &email.get(), &phone.get()) {
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
            match api::create_owner(&payload).await {
                Ok(owner) => {
                    log::info!("created owner {}", owner.id);
                    toast.update(|t| {
                        t.success("Profile created successfully!");
                    });
                    run_after(Duration::from_millis(CREATE_REDIRECT_MS), move || {
                        chosen.set(Some(ActiveOwner::from(&owner)));
                    });
                }
                Err(e) => {
                    toast.update(|t| {
                        t.error(format!("Failed to create profile: {e}"));
                    });
                }
            }
            submitting.set(false);
        });
    };

    let go_search = Callback::new(move |()| {
        query.set(String::new());
        results.set(Vec::new());
        step.set(WelcomeStep::Search);
    });
    let go_create = Callback::new(move |()| step.set(WelcomeStep::Create));
    let go_back = move |_| {
        results.set(Vec::new());
        step.set(WelcomeStep::Method);
    };
    let on_search_click = Callback::new(move |()| run_search());

    view! {
        <div class="welcome-page">
            <div class="welcome-page__inner">
                <header class="welcome-page__header">
                    <div class="welcome-page__logo" aria-hidden="true">"🐾"</div>
                    <h1 class="welcome-page__title">"VETCARE"</h1>
                    <p class="welcome-page__subtitle">"Your Pet Owner Portal"</p>
                </header>

                <div class="welcome-card">
                    <Show when=move || step.get() == WelcomeStep::Method>
                        <div class="welcome-card__step">
                            <h2>"Welcome Back!"</h2>
                            <p class="welcome-card__lead">
                                "Manage your pets, book appointments, and view invoices all in one place."
                            </p>
                            <div class="welcome-card__choices">
                                <Button size=ButtonSize::Lg full_width=true on_click=go_search>
                                    "🔍 Find My Profile"
                                </Button>
                                <Button variant=ButtonVariant::Secondary size=ButtonSize::Lg full_width=true on_click=go_create>
                                    "+ Create New Profile"
                                </Button>
                            </div>
                        </div>
                    </Show>

                    <Show when=move || step.get() == WelcomeStep::Search>
                        <div class="welcome-card__step">
                            <button class="welcome-card__back" on:click=go_back>"← Back"</button>
                            <h2>"Find Your Profile"</h2>
                            <label class="form__label">
                                "Enter your email address"
                                <div class="form__row">
                                    <input
                                        class="form__input"
                                        type="email"
                                        placeholder="your@email.com"
                                        prop:value=move || query.get()
                                        on:input=move |ev| query.set(event_target_value(&ev))
                                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                            if ev.key() == "Enter" {
                                                ev.prevent_default();
                                                run_search();
                                            }
                                        }
                                    />
                                    <Button on_click=on_search_click>"Search"</Button>
                                </div>
                            </label>

                            <Show when=move || results.with(|r| !r.is_empty())>
                                <div class="welcome-card__results">
                                    <p class="welcome-card__count">
                                        {move || format!("Found {} profile(s):", results.with(Vec::len))}
                                    </p>
                                    <For
                                        each=move || results.get()
                                        key=|owner| owner.id.clone()
                                        children=move |owner| {
                                            let label_name = owner.name.clone();
                                            let label_email = owner.email.clone();
                                            view! {
                                                <button
                                                    class="owner-match"
                                                    on:click=move |_| chosen.set(Some(ActiveOwner::from(&owner)))
                                                >
                                                    <span class="owner-match__name">{label_name}</span>
                                                    <span class="owner-match__email">{label_email}</span>
                                                </button>
                                            }
                                        }
                                    />
                                </div>
                            </Show>

                            <div class="divider"><span>"or"</span></div>
                            <Button variant=ButtonVariant::Secondary full_width=true on_click=go_create>
                                "Create New Profile Instead"
                            </Button>
                        </div>
                    </Show>

                    <Show when=move || step.get() == WelcomeStep::Create>
                        <form class="welcome-card__step form" on:submit=on_create>
                            <button type="button" class="welcome-card__back" on:click=go_back>"← Back"</button>
                            <h2>"Create Your Profile"</h2>
                            <label class="form__label">
                                "Full Name *"
                                <input
                                    class="form__input"
                                    type="text"
                                    placeholder="Your name"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="form__label">
                                "Email Address *"
                                <input
                                    class="form__input"
                                    type="email"
                                    placeholder="your@email.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="form__label">
                                "Phone Number *"
                                <input
                                    class="form__input"
                                    type="tel"
                                    placeholder="+1 (555) 000-0000"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| phone.set(event_target_value(&ev))
                                />
                            </label>
                            <Button
                                submit=true
                                size=ButtonSize::Lg
                                full_width=true
                                disabled=Signal::derive(move || submitting.get())
                            >
                                {move || if submitting.get() { "Creating Profile..." } else { "Create Profile" }}
                            </Button>
                        </form>
                    </Show>
                </div>

                <p class="welcome-page__footer">"Your information is secure and private"</p>
            </div>
        </div>
    }
}
