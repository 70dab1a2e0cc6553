//! Styled button primitive.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// BEM class list for a variant/size pair, e.g. `btn btn--primary btn--md`.
pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "primary",
        ButtonVariant::Secondary => "secondary",
        ButtonVariant::Ghost => "ghost",
        ButtonVariant::Danger => "danger",
    };
    let size = match size {
        ButtonSize::Sm => "sm",
        ButtonSize::Md => "md",
        ButtonSize::Lg => "lg",
    };
    format!("btn btn--{variant} btn--{size}")
}

/// Classes for an `<a>` rendered as a full-width button.
pub fn block_link_class(variant: ButtonVariant, size: ButtonSize) -> String {
    format!("{} btn--block", button_class(variant, size))
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] disabled: Option<Signal<bool>>,
    /// Render as `type="submit"` instead of `type="button"`.
    #[prop(optional)]
    submit: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let is_disabled = move || disabled.is_some_and(|d| d.get());
    view! {
        <button
            class=button_class(variant, size)
            class:btn--block=full_width
            type=if submit { "submit" } else { "button" }
            disabled=is_disabled
            on:click=move |_| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
