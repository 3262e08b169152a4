use super::*;
use serde_json::json;

use crate::net::types::{AboutCompany, ContactLead, Entity, Faq, TeamMember, Testimonial};
use crate::util::draft::to_draft;

fn draft(value: Value) -> Draft {
    match value {
        Value::Object(map) => map,
        _ => panic!("draft must be an object"),
    }
}

#[test]
fn complete_faq_passes() {
    let faq = Faq {
        question: "Q?".to_owned(),
        answer: "A.".to_owned(),
        ..Faq::default()
    };
    assert_eq!(validate_draft(Faq::FIELDS, &to_draft(&faq)), Ok(()));
}

#[test]
fn blank_required_field_is_reported_first() {
    let d = draft(json!({ "question": "  ", "answer": "", "display_order": 1 }));
    assert_eq!(validate_draft(Faq::FIELDS, &d), Err(ValidationError::Required("Question")));
}

#[test]
fn unparsed_number_is_rejected() {
    let d = draft(json!({ "question": "Q", "answer": "A", "display_order": "two" }));
    assert_eq!(validate_draft(Faq::FIELDS, &d), Err(ValidationError::NotANumber("Display Order")));
}

#[test]
fn rating_outside_bounds_is_rejected() {
    let testimonial = Testimonial {
        client_name: "Lin".to_owned(),
        testimonial_text: "Great".to_owned(),
        rating: 6,
        ..Testimonial::default()
    };
    let err = validate_draft(Testimonial::FIELDS, &to_draft(&testimonial)).unwrap_err();
    assert_eq!(err.to_string(), "Rating must be between 1 and 5.");
}

#[test]
fn open_ended_bounds_render_infinity() {
    let d = draft(json!({ "question": "Q", "answer": "A", "display_order": 0 }));
    let err = validate_draft(Faq::FIELDS, &d).unwrap_err();
    assert_eq!(err.to_string(), "Display Order must be between 1 and ∞.");
}

#[test]
fn default_company_profile_fails_on_founded_year() {
    let company = AboutCompany {
        overview: "o".to_owned(),
        mission: "m".to_owned(),
        vision: "v".to_owned(),
        headquarters: "hq".to_owned(),
        ..AboutCompany::default()
    };
    assert!(matches!(
        validate_draft(AboutCompany::FIELDS, &to_draft(&company)),
        Err(ValidationError::OutOfRange { label: "Founded Year", .. })
    ));
}

#[test]
fn lead_email_must_have_valid_shape() {
    let mut lead = ContactLead {
        name: "Ada".to_owned(),
        email: "ada.example.com".to_owned(),
        message: "Hello".to_owned(),
        ..ContactLead::default()
    };
    assert_eq!(
        validate_draft(ContactLead::FIELDS, &to_draft(&lead)),
        Err(ValidationError::InvalidEmail("Email"))
    );
    lead.email = "ada@example.com".to_owned();
    assert_eq!(validate_draft(ContactLead::FIELDS, &to_draft(&lead)), Ok(()));
}

#[test]
fn lead_status_must_be_known() {
    let d = draft(json!({ "name": "A", "email": "a@b.co", "message": "m", "status": "archived" }));
    assert_eq!(validate_draft(ContactLead::FIELDS, &d), Err(ValidationError::InvalidChoice("Status")));
}

#[test]
fn optional_urls_may_be_blank_but_not_malformed() {
    let mut member = TeamMember {
        full_name: "Grace".to_owned(),
        designation: "CTO".to_owned(),
        ..TeamMember::default()
    };
    assert_eq!(validate_draft(TeamMember::FIELDS, &to_draft(&member)), Ok(()));

    member.linkedin_url = "linkedin.com/in/grace".to_owned();
    assert_eq!(
        validate_draft(TeamMember::FIELDS, &to_draft(&member)),
        Err(ValidationError::InvalidUrl("LinkedIn URL"))
    );
}

#[test]
fn email_shape_edge_cases() {
    assert!(is_email("a@b.co"));
    assert!(!is_email("@b.co"));
    assert!(!is_email("a@b"));
    assert!(!is_email("a@.co"));
    assert!(!is_email("a@b.co."));
    assert!(!is_email("a@@b.co"));
    assert!(!is_email("a b@c.co"));
}

#[test]
fn url_shape_edge_cases() {
    assert!(is_http_url("https://example.com"));
    assert!(is_http_url("http://example.com/path?q=1"));
    assert!(!is_http_url("https://"));
    assert!(!is_http_url("ftp://example.com"));
    assert!(!is_http_url("https://exa mple.com"));
}
