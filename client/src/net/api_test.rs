use super::*;
use futures::executor::block_on;
use crate::net::types::Faq;

#[test]
fn collection_endpoint_formats_expected_path() {
    assert_eq!(collection_endpoint("faqs"), "/api/resources/faqs");
}

#[test]
fn record_endpoint_formats_expected_path() {
    assert_eq!(record_endpoint("contact-leads", "12"), "/api/resources/contact-leads/12");
}

#[test]
fn require_id_rejects_blank_ids() {
    assert_eq!(require_id(""), Err(ApiError::MissingId));
    assert_eq!(require_id("   "), Err(ApiError::MissingId));
    assert_eq!(require_id("4"), Ok("4"));
}

#[test]
fn failure_message_is_generic_per_operation() {
    assert_eq!(failure_message(CrudOp::Load, "FAQ"), "Failed to load records. Please try again.");
    assert_eq!(failure_message(CrudOp::Create, "FAQ"), "Failed to create FAQ. Please try again.");
    assert_eq!(
        failure_message(CrudOp::Toggle, "Testimonial"),
        "Failed to update the status of Testimonial. Please try again."
    );
}

#[test]
fn success_message_uses_past_tense() {
    assert_eq!(success_message(CrudOp::Delete, "Team Member"), "Team Member deleted successfully.");
    assert_eq!(success_message(CrudOp::Toggle, "FAQ"), "FAQ updated successfully.");
}

#[test]
fn api_error_display_includes_status() {
    assert_eq!(ApiError::Status(404).to_string(), "request failed: 404");
    assert_eq!(ApiError::MissingId.to_string(), "record has no id");
}

#[test]
fn update_without_id_fails_before_any_request() {
    let result = block_on(update(&Faq::default()));
    assert_eq!(result, Err(ApiError::MissingId));
}

#[test]
fn delete_with_blank_id_fails_before_any_request() {
    let result = block_on(delete::<Faq>(""));
    assert_eq!(result, Err(ApiError::MissingId));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_are_unavailable_outside_the_browser() {
    assert_eq!(block_on(fetch_all::<Faq>()), Err(ApiError::Unavailable));
    let faq = Faq { id: "1".to_owned(), ..Faq::default() };
    assert_eq!(block_on(update(&faq)), Err(ApiError::Unavailable));
}
