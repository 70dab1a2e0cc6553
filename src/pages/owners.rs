//! Directory of every registered owner.
//!
//! Not gated and not scoped: it lists the full `/api/owners` response.

#[cfg(test)]
#[path = "owners_test.rs"]
mod owners_test;

use leptos::prelude::*;

use crate::components::skeleton::Skeleton;
use crate::net::api;
use crate::net::types::Owner;

pub fn owner_count_label(count: usize) -> String {
    match count {
        1 => "1 registered owner".to_owned(),
        n => format!("{n} registered owners"),
    }
}

#[component]
pub fn OwnersPage() -> impl IntoView {
    let owners = RwSignal::new(Vec::<Owner>::new());
    let loading = RwSignal::new(true);

    leptos::task::spawn_local(async move {
        match api::list_owners().await {
            Ok(list) => owners.set(list),
            Err(e) => log::error!("failed to fetch owners: {e}"),
        }
        loading.set(false);
    });

    view! {
        <div class="page owners-page">
            <nav class="page__nav">
                <a class="page__back" href="/dashboard">"← Back to Dashboard"</a>
                <a class="page__back" href="/">"🏠 Home"</a>
            </nav>
            <header class="page__header">
                <h1 class="page__title">"All Owners"</h1>
                <p class="page__subtitle">"View all registered pet owners"</p>
            </header>
            <Show when=move || !loading.get() fallback=|| view! { <div class="card"><Skeleton count=5/></div> }>
                <p class="owners-page__count">{move || owner_count_label(owners.with(Vec::len))}</p>
                <div class="card table-wrap">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Phone"</th>
                                <th>"ID"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || owners.get()
                                key=|owner| owner.id.clone()
                                children=|owner| {
                                    view! {
                                        <tr>
                                            <td>{owner.name}</td>
                                            <td>{owner.email}</td>
                                            <td>{owner.phone}</td>
                                            <td class="table__mono">{owner.id}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
