//! Generic dialog overlay used by every table action.
//!
//! DESIGN
//! ======
//! The dialog takes focus when mounted so Escape reaches its keydown handler
//! without an extra click. While mounted the page body is prevented from
//! scrolling; the previous `overflow` value is restored on cleanup.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use leptos::prelude::*;

/// Keys that dismiss an open dialog.
pub fn is_close_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Backdrop + dialog shell with a title bar and close button.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(dialog) = dialog_ref.get() {
                let _ = dialog.focus();
            }
        });
        lock_body_scroll();
    }

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_close_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog"
                class:dialog--wide=wide
                role="dialog"
                aria-modal="true"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" on:click=on_close_click title="Close" aria-label="Close">
                        "✕"
                    </button>
                </div>
                <div class="dialog__body">{children()}</div>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn body_style() -> Option<web_sys::CssStyleDeclaration> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .map(|body| body.style())
}

#[cfg(feature = "hydrate")]
fn lock_body_scroll() {
    let Some(style) = body_style() else {
        return;
    };
    let previous = style.get_property_value("overflow").unwrap_or_default();
    let _ = style.set_property("overflow", "hidden");
    on_cleanup(move || {
        if let Some(style) = body_style() {
            let _ = if previous.is_empty() {
                style.remove_property("overflow").map(|_| ())
            } else {
                style.set_property("overflow", &previous)
            };
        }
    });
}
