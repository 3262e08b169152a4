//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::components::toast_stack::ToastStack;
use crate::pages::dashboard::DashboardPage;
use crate::pages::resources::{
    CompanyPage, FaqsPage, LeadsPage, ProcessStepsPage, ServicesPage, TeamPage, TestimonialsPage,
};
use crate::pages::sign_in::SignInPage;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts and lays out the sidebar next to
/// the routed page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    // Storage is browser-only; restore after hydration so SSR markup matches.
    #[cfg(feature = "hydrate")]
    Effect::new(move || session.set(SessionState::load()));

    view! {
        <Stylesheet id="leptos" href="/pkg/adminboard.css"/>
        <Title text="Admin Dashboard"/>

        <Router>
            <div class="layout">
                <Sidebar/>
                <main class="layout__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=StaticSegment("company") view=CompanyPage/>
                        <Route path=StaticSegment("services") view=ServicesPage/>
                        <Route path=StaticSegment("faqs") view=FaqsPage/>
                        <Route path=StaticSegment("process-steps") view=ProcessStepsPage/>
                        <Route path=StaticSegment("team") view=TeamPage/>
                        <Route path=StaticSegment("testimonials") view=TestimonialsPage/>
                        <Route path=StaticSegment("leads") view=LeadsPage/>
                        <Route path=StaticSegment("sign-in") view=SignInPage/>
                    </Routes>
                </main>
            </div>
            <ToastStack/>
        </Router>
    }
}
