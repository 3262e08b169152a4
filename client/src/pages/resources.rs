//! One route-level page per managed resource.

use leptos::prelude::*;

use crate::components::crud_table::crud_table;
use crate::net::types::{AboutCompany, ContactLead, Faq, ProcessStep, ServiceFeature, TeamMember, Testimonial};

#[component]
pub fn CompanyPage() -> impl IntoView {
    crud_table::<AboutCompany>()
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    crud_table::<ServiceFeature>()
}

#[component]
pub fn FaqsPage() -> impl IntoView {
    crud_table::<Faq>()
}

#[component]
pub fn ProcessStepsPage() -> impl IntoView {
    crud_table::<ProcessStep>()
}

#[component]
pub fn TeamPage() -> impl IntoView {
    crud_table::<TeamMember>()
}

#[component]
pub fn TestimonialsPage() -> impl IntoView {
    crud_table::<Testimonial>()
}

#[component]
pub fn LeadsPage() -> impl IntoView {
    crud_table::<ContactLead>()
}
