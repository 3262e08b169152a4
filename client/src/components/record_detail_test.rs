use super::*;
use crate::net::types::{ContactLead, Entity, Faq};
use crate::util::draft::to_draft;

fn labels_and_values(rows: &[DetailRow]) -> Vec<(&str, &str)> {
    rows.iter().map(|r| (r.label.as_str(), r.value.as_str())).collect()
}

#[test]
fn detail_rows_start_with_id_and_follow_field_order() {
    let faq = Faq {
        id: "3".to_owned(),
        question: "Q".to_owned(),
        answer: "A".to_owned(),
        display_order: 2,
        is_active: false,
    };
    let rows = detail_rows(Faq::FIELDS, &to_draft(&faq));
    assert_eq!(
        labels_and_values(&rows),
        vec![("ID", "3"), ("Question", "Q"), ("Answer", "A"), ("Display Order", "2"), ("Active", "No")]
    );
}

#[test]
fn status_fields_carry_badges() {
    let faq = Faq { id: "3".to_owned(), is_active: false, ..Faq::default() };
    let rows = detail_rows(Faq::FIELDS, &to_draft(&faq));
    let active = rows.iter().find(|r| r.label == "Active").expect("active row");
    assert_eq!(active.badge, Some(("Inactive".to_owned(), BadgeTone::Muted)));
    assert!(rows.iter().filter(|r| r.label != "Active").all(|r| r.badge.is_none()));
}

#[test]
fn detail_rows_include_received_timestamp_for_leads() {
    let lead = ContactLead {
        id: "1".to_owned(),
        created_at: "2024-05-01T10:00:00Z".to_owned(),
        ..ContactLead::default()
    };
    let rows = detail_rows(ContactLead::FIELDS, &to_draft(&lead));
    let last = rows.last().expect("rows");
    assert_eq!((last.label.as_str(), last.value.as_str()), ("Received", "2024-05-01T10:00:00Z"));
}

#[test]
fn detail_rows_skip_missing_id() {
    let rows = detail_rows(Faq::FIELDS, &to_draft(&Faq::default()));
    assert_eq!(rows[0].label, "Question");
}
