//! Dialog overlay.
//!
//! DESIGN
//! ======
//! Reuses the `dialog-backdrop`/`dialog` markup. The backdrop, the ✕ button
//! and the Escape key all run `on_close`; clicks inside the dialog stop
//! propagation so they never reach the backdrop. Escape is read from a
//! window listener, so it works before anything inside the dialog has focus.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use leptos::prelude::*;

/// Whether a `KeyboardEvent.key` value should close an open dialog.
pub fn is_close_key(key: &str) -> bool {
    key == "Escape"
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ModalSize {
    fn modifier(self) -> &'static str {
        match self {
            Self::Sm => "dialog--sm",
            Self::Md => "dialog--md",
            Self::Lg => "dialog--lg",
        }
    }
}

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(optional)] size: ModalSize,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if open.get_untracked() && is_close_key(&ev.key()) {
                ev.prevent_default();
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class=format!("dialog {}", size.modifier())
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <header class="dialog__header">
                        <h2 class="dialog__title">{title.clone()}</h2>
                        <button class="dialog__close" on:click=move |_| on_close.run(()) title="Close" aria-label="Close">
                            "✕"
                        </button>
                    </header>
                    <div class="dialog__body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
