//! Corner stack rendering the app-wide toast queue.
//!
//! Each toast schedules its own dismissal when mounted; the close button
//! removes it early.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For each=move || toasts.get().toasts key=|toast| toast.id let:toast>
                <ToastItem toast=toast toasts=toasts/>
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                crate::state::toast::TOAST_TTL_MS,
            )))
            .await;
            toasts.update(|s| s.dismiss(id));
        });
    }

    let class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };
    let role = match toast.kind {
        ToastKind::Success => "status",
        ToastKind::Error => "alert",
    };

    view! {
        <div class=class role=role>
            <span class="toast__message">{toast.message}</span>
            <button class="toast__close" title="Dismiss" on:click=move |_| toasts.update(|s| s.dismiss(id))>
                "✕"
            </button>
        </div>
    }
}
