//! Dashboard landing page with one summary card per resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each resource is fetched once after mount, so one failing upstream only
//! marks its own card as failed. The lead list feeds both the lead summary
//! card and the status breakdown.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::{
    AboutCompany, ContactLead, Entity, Faq, ProcessStep, ServiceFeature, TeamMember, Testimonial,
};
use crate::state::dashboard::{CardStatus, LeadBreakdown};
use crate::state::session::SessionState;

/// Fetch outcome shared by the cards that render one resource.
type Records<E> = RwSignal<Option<Result<Vec<E>, String>>>;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let greeting = move || {
        session.with(|s| s.user.as_ref().map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome, {}", u.name)))
    };
    let leads = load_records::<ContactLead>();

    view! {
        <section class="dashboard">
            <header class="dashboard__header">
                <h1>"Dashboard"</h1>
                <p class="dashboard__greeting">{greeting}</p>
            </header>
            <div class="dashboard__grid">
                {summary_card("/company", load_records::<AboutCompany>())}
                {summary_card("/services", load_records::<ServiceFeature>())}
                {summary_card("/faqs", load_records::<Faq>())}
                {summary_card("/process-steps", load_records::<ProcessStep>())}
                {summary_card("/team", load_records::<TeamMember>())}
                {summary_card("/testimonials", load_records::<Testimonial>())}
                {summary_card("/leads", leads)}
            </div>
            <LeadBreakdownCard leads=leads/>
        </section>
    }
}

/// Fetch every record of `E` once after mount.
fn load_records<E: Entity>() -> Records<E> {
    let records: Records<E> = RwSignal::new(None);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let next = crate::net::api::fetch_all::<E>().await.map_err(|err| {
                leptos::logging::warn!("dashboard {} load failed: {err}", E::RESOURCE);
                crate::net::api::failure_message(crate::net::api::CrudOp::Load, E::LABEL)
            });
            records.set(Some(next));
        });
    }

    records
}

fn summary_card<E: Entity>(href: &'static str, records: Records<E>) -> impl IntoView {
    let body = move || match records.with(|r| CardStatus::from_load(r.as_ref())) {
        CardStatus::Loading => view! { <p class="summary-card__muted">"Loading…"</p> }.into_any(),
        CardStatus::Failed(message) => view! { <p class="summary-card__error">{message}</p> }.into_any(),
        CardStatus::Ready(summary) => view! {
            <p class="summary-card__total">{summary.total}</p>
            <p class="summary-card__muted">{summary.caption()}</p>
        }
        .into_any(),
    };

    view! {
        <A href=href attr:class="summary-card">
            <h2 class="summary-card__title">{E::PLURAL}</h2>
            {body}
        </A>
    }
}

#[component]
fn LeadBreakdownCard(leads: Records<ContactLead>) -> impl IntoView {
    let breakdown = move || {
        leads.with(|r| {
            r.as_ref()
                .map(|result| result.as_ref().map(|items| LeadBreakdown::from_leads(items)).map_err(Clone::clone))
        })
    };

    view! {
        <section class="lead-breakdown">
            <h2>"Lead Status"</h2>
            {move || match breakdown() {
                None => view! { <p class="summary-card__muted">"Loading…"</p> }.into_any(),
                Some(Err(message)) => view! { <p class="summary-card__error">{message}</p> }.into_any(),
                Some(Ok(counts)) => view! {
                    <dl class="lead-breakdown__counts">
                        <dt>"New"</dt>
                        <dd>{counts.new}</dd>
                        <dt>"Contacted"</dt>
                        <dd>{counts.contacted}</dd>
                    </dl>
                    <div class="lead-breakdown__bar">
                        <div
                            class="lead-breakdown__fill"
                            style=format!("width: {}%", counts.contacted_percent())
                        ></div>
                    </div>
                    <p class="summary-card__muted">{format!("{}% contacted", counts.contacted_percent())}</p>
                }
                .into_any(),
            }}
        </section>
    }
}
