//! Surface container used by every list page.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use leptos::prelude::*;

/// Class list for a card. `clickable` adds the pointer affordance.
pub fn card_class(extra: &str, hover: bool, clickable: bool) -> String {
    let mut class = String::from("card");
    if hover {
        class.push_str(" card--hover");
    }
    if clickable {
        class.push_str(" card--clickable");
    }
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// A panel with optional hover lift. Supplying `on_click` makes it clickable
/// and focusable; Enter activates it like a click.
#[component]
pub fn Card(
    #[prop(optional)] hover: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let clickable = on_click.is_some();
    view! {
        <div
            class=card_class(&class, hover, clickable)
            role=clickable.then_some("button")
            tabindex=clickable.then_some("0")
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if let Some(on_click) = on_click
                    && ev.key() == "Enter"
                {
                    on_click.run(());
                }
            }
        >
            {children()}
        </div>
    }
}
