//! Placeholder for empty collections with an optional call to action.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant, button_class};

/// The action renders as a link when `action_href` is set, otherwise as a
/// button running `on_action`. No label, no action.
#[component]
pub fn EmptyState(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional, into)] action_label: Option<String>,
    #[prop(optional, into)] action_href: Option<String>,
    #[prop(optional)] on_action: Option<Callback<()>>,
) -> impl IntoView {
    let action = action_label.map(|label| match (action_href, on_action) {
        (Some(href), _) => view! {
            <a class=button_class(ButtonVariant::Primary, ButtonSize::Md) href=href>{label}</a>
        }
        .into_any(),
        (None, on_action) => view! {
            <Button variant=ButtonVariant::Primary on_click=on_action.unwrap_or_else(|| Callback::new(|()| {}))>
                {label}
            </Button>
        }
        .into_any(),
    });

    view! {
        <div class="empty-state">
            <div class="empty-state__icon" aria-hidden="true">{icon}</div>
            <h3 class="empty-state__title">{title}</h3>
            <p class="empty-state__description">{description}</p>
            {action.map(|action| view! { <div class="empty-state__action">{action}</div> })}
        </div>
    }
}
