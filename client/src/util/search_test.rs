use super::*;
use crate::net::types::{ContactLead, Faq, LeadStatus, ServiceFeature};

fn faq(id: &str, question: &str, answer: &str) -> Faq {
    Faq {
        id: id.to_owned(),
        question: question.to_owned(),
        answer: answer.to_owned(),
        ..Faq::default()
    }
}

fn sample() -> Vec<Faq> {
    vec![
        faq("1", "How do I reset my password?", "Use the account page."),
        faq("2", "What are your hours?", "Nine to five."),
        faq("3", "Do you ship abroad?", "Yes, via PASSWORD-protected portal."),
    ]
}

#[test]
fn empty_term_returns_everything() {
    let items = sample();
    assert_eq!(filter_records(&items, ""), items);
}

#[test]
fn surrounding_whitespace_is_part_of_the_term() {
    let items = sample();
    let ids = |term: &str| -> Vec<String> { filter_records(&items, term).into_iter().map(|f| f.id).collect() };
    assert_eq!(ids(" hours"), vec!["2"]);
    assert!(ids("hours ").is_empty());
    assert!(ids("   ").is_empty());
}

#[test]
fn match_is_case_insensitive_across_search_fields() {
    let ids: Vec<String> = filter_records(&sample(), "Password")
        .into_iter()
        .map(|f| f.id)
        .collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn non_search_fields_are_ignored() {
    let features = vec![ServiceFeature {
        id: "needle".to_owned(),
        title: "Audit".to_owned(),
        ..ServiceFeature::default()
    }];
    assert!(filter_records(&features, "needle").is_empty());
}

#[test]
fn enum_fields_match_on_wire_value() {
    let leads = vec![
        ContactLead {
            id: "1".to_owned(),
            name: "Ada".to_owned(),
            status: LeadStatus::Contacted,
            ..ContactLead::default()
        },
        ContactLead {
            id: "2".to_owned(),
            name: "Grace".to_owned(),
            ..ContactLead::default()
        },
    ];
    let hits = filter_records(&leads, "contacted");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1");
}

#[test]
fn filter_is_idempotent() {
    let items = sample();
    let once = filter_records(&items, "you");
    let twice = filter_records(&once, "you");
    assert_eq!(once, twice);
}

#[test]
fn filter_does_not_mutate_input() {
    let items = sample();
    let before = items.clone();
    let _ = filter_records(&items, "hours");
    assert_eq!(items, before);
}
