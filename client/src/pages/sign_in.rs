//! Sign-in page recording a display identity for the sidebar.
//!
//! No password is collected and nothing is verified; the stored record is a
//! label only.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionState, SessionUser, now_ms};

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match SessionUser::from_form(&name.get_untracked(), &email.get_untracked(), now_ms()) {
            Ok(user) => {
                session.update(|s| s.sign_in(user));
                info.set(String::new());
                navigate("/", NavigateOptions::default());
            }
            Err(err) => info.set(err.to_string()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin Dashboard"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit novalidate>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Your name"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">"Sign In"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || session.with(|s| s.user.is_some())>
                    <p class="login-message">
                        "Signed in as "
                        <span>{move || session.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default())}</span>
                    </p>
                </Show>
            </div>
        </div>
    }
}
