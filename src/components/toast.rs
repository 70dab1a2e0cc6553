//! Floating toast bound to the shared `ToastState`.
//!
//! Each new toast starts a 4 s timer and a linear progress bar. The timer
//! dismisses by sequence number, so it never hides a toast shown after it.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::toast::{TOAST_DURATION_MS, ToastState};
use crate::util::timer::run_after;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let current_seq = Memo::new(move |_| toast.with(|t| t.current.as_ref().map(|m| m.seq)));

    Effect::new(move || {
        let Some(seq) = current_seq.get() else {
            return;
        };
        run_after(Duration::from_millis(u64::from(TOAST_DURATION_MS)), move || {
            toast.update(|t| {
                t.dismiss(seq);
            });
        });
    });

    let progress_style = format!("animation-duration: {TOAST_DURATION_MS}ms");

    view! {
        <div class="toast-region" aria-live="polite">
            {move || {
                toast.get().current.map(|message| {
                    let seq = message.seq;
                    view! {
                        <div class=format!("toast {}", message.kind.modifier()) role="status">
                            <span class="toast__icon" aria-hidden="true">{message.kind.icon()}</span>
                            <span class="toast__text">{message.text}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| toast.update(|t| {
                                    t.dismiss(seq);
                                })
                            >
                                "✕"
                            </button>
                            <div class="toast__progress" style=progress_style.clone()></div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
