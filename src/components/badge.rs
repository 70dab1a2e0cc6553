//! Status pill.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Scheduled,
    Done,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
}

pub fn badge_class(variant: BadgeVariant, size: BadgeSize) -> String {
    let variant = match variant {
        BadgeVariant::Default => "default",
        BadgeVariant::Success => "success",
        BadgeVariant::Warning => "warning",
        BadgeVariant::Danger => "danger",
        BadgeVariant::Scheduled => "scheduled",
        BadgeVariant::Done => "done",
    };
    let size = match size {
        BadgeSize::Sm => "sm",
        BadgeSize::Md => "md",
    };
    format!("badge badge--{variant} badge--{size}")
}

#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, #[prop(optional)] size: BadgeSize, children: Children) -> impl IntoView {
    view! { <span class=badge_class(variant, size)>{children()}</span> }
}
