use super::*;
use crate::net::types::{AboutCompany, ContactLead, Faq, LeadStatus, Testimonial};

#[test]
fn modal_titles_use_entity_label() {
    assert_eq!(modal_title::<Faq>(&ModalMode::Create), "Add FAQ");
    assert_eq!(modal_title(&ModalMode::Edit(Faq::default())), "Edit FAQ");
    assert_eq!(modal_title(&ModalMode::View(Testimonial::default())), "Testimonial Details");
    assert_eq!(modal_title(&ModalMode::Delete(ContactLead::default())), "Delete Contact Lead");
    assert_eq!(modal_title::<Faq>(&ModalMode::Closed), "");
}

#[test]
fn toggle_label_follows_active_flag() {
    let active = Faq { is_active: true, ..Faq::default() };
    let inactive = Faq { is_active: false, ..Faq::default() };
    assert_eq!(toggle_label(&active), Some("Deactivate"));
    assert_eq!(toggle_label(&inactive), Some("Activate"));
}

#[test]
fn toggle_label_follows_lead_status() {
    let fresh = ContactLead { status: LeadStatus::New, ..ContactLead::default() };
    let done = ContactLead { status: LeadStatus::Contacted, ..ContactLead::default() };
    assert_eq!(toggle_label(&fresh), Some("Mark contacted"));
    assert_eq!(toggle_label(&done), Some("Mark new"));
}

#[test]
fn company_profile_has_no_toggle_action() {
    assert_eq!(toggle_label(&AboutCompany::default()), None);
}

#[test]
fn delete_prompt_names_the_record_kind() {
    assert_eq!(
        delete_prompt("FAQ"),
        "Are you sure you want to delete this FAQ? This action cannot be undone."
    );
}
