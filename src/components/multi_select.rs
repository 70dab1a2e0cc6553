//! Checkbox dropdown for picking clinic services.
//!
//! DESIGN
//! ======
//! Selection is a list of service ids held by the caller. The trigger shows
//! `{n} selected` or the placeholder; chips below it remove single entries.

#[cfg(test)]
#[path = "multi_select_test.rs"]
mod multi_select_test;

use leptos::prelude::*;

use crate::net::types::Service;
use crate::util::format::format_money;

/// Add `id` if absent, remove it if present. Order of first selection is kept.
pub fn toggle_selection(selected: &mut Vec<i64>, id: i64) {
    if let Some(pos) = selected.iter().position(|s| *s == id) {
        selected.remove(pos);
    } else {
        selected.push(id);
    }
}

pub fn summary_text(selected_count: usize, placeholder: &str) -> String {
    if selected_count == 0 { placeholder.to_owned() } else { format!("{selected_count} selected") }
}

/// Options matching `selected`, in selection order. Unknown ids are skipped.
pub fn selected_options<'a>(options: &'a [Service], selected: &[i64]) -> Vec<&'a Service> {
    selected.iter().filter_map(|id| options.iter().find(|o| o.id == *id)).collect()
}

#[component]
pub fn MultiSelect(
    options: Vec<Service>,
    selected: RwSignal<Vec<i64>>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let options = StoredValue::new(options);

    let summary = move || summary_text(selected.with(Vec::len), &placeholder);

    let chips = move || {
        let ids = selected.get();
        options.with_value(|opts| {
            selected_options(opts, &ids)
                .into_iter()
                .map(|service| {
                    let id = service.id;
                    view! {
                        <span class="multi-select__chip">
                            {service.name.clone()}
                            <button
                                type="button"
                                class="multi-select__chip-remove"
                                aria-label="Remove"
                                on:click=move |_| selected.update(|s| toggle_selection(s, id))
                            >
                                "✕"
                            </button>
                        </span>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    let rows = move || {
        options.with_value(|opts| {
            opts.iter()
                .map(|service| {
                    let id = service.id;
                    view! {
                        <label class="multi-select__option">
                            <input
                                type="checkbox"
                                prop:checked=move || selected.with(|s| s.contains(&id))
                                on:change=move |_| selected.update(|s| toggle_selection(s, id))
                            />
                            <span class="multi-select__option-name">{service.name.clone()}</span>
                            <span class="multi-select__option-price">{format_money(service.price)}</span>
                        </label>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="multi-select">
            <button
                type="button"
                class="multi-select__trigger"
                class:multi-select__trigger--open=move || open.get()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="multi-select__summary">{summary}</span>
                <span class="multi-select__caret" aria-hidden="true">"▾"</span>
            </button>
            <Show when=move || open.get()>
                <div class="multi-select__menu">{rows}</div>
            </Show>
            <div class="multi-select__chips">{chips}</div>
        </div>
    }
}
