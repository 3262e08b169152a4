//! Left navigation with the dashboard, every resource table, and the
//! signed-in display name.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/", label: "Dashboard" },
    NavItem { href: "/company", label: "Company Profile" },
    NavItem { href: "/services", label: "Service Features" },
    NavItem { href: "/faqs", label: "FAQs" },
    NavItem { href: "/process-steps", label: "Process Steps" },
    NavItem { href: "/team", label: "Team Members" },
    NavItem { href: "/testimonials", label: "Testimonials" },
    NavItem { href: "/leads", label: "Contact Leads" },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let on_sign_out = move |_| session.update(SessionState::sign_out);

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Admin"</div>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <A href=item.href attr:class="sidebar__link">
                                {item.label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__user">
                <Show
                    when=move || session.with(|s| s.user.is_some())
                    fallback=|| view! { <A href="/sign-in" attr:class="sidebar__link">"Sign in"</A> }
                >
                    {move || {
                        session
                            .with(|s| s.user.clone())
                            .map(|user| {
                                view! {
                                    <span class="sidebar__avatar">{user.initials()}</span>
                                    <span class="sidebar__name" title=user.email.clone()>{user.name.clone()}</span>
                                }
                            })
                    }}
                    <button class="btn sidebar__sign-out" on:click=on_sign_out>"Sign out"</button>
                </Show>
            </div>
        </aside>
    }
}
