//! Loading placeholder bars.

use leptos::prelude::*;

#[component]
pub fn Skeleton(
    #[prop(default = 3)] count: usize,
    /// Bar height in pixels.
    #[prop(default = 16)]
    height: u32,
) -> impl IntoView {
    view! {
        <div class="skeleton" aria-busy="true">
            {(0..count)
                .map(|_| view! { <div class="skeleton__bar" style=format!("height: {height}px")></div> })
                .collect::<Vec<_>>()}
        </div>
    }
}
