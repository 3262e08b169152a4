use super::*;
use crate::net::types::{AboutCompany, Faq};

fn lead(status: LeadStatus) -> ContactLead {
    ContactLead { status, ..ContactLead::default() }
}

#[test]
fn summarize_counts_active_records() {
    let items = vec![
        Faq { is_active: true, ..Faq::default() },
        Faq { is_active: false, ..Faq::default() },
        Faq { is_active: true, ..Faq::default() },
    ];
    assert_eq!(summarize(&items), ResourceSummary { total: 3, active: Some(2) });
}

#[test]
fn summarize_empty_toggleable_list_reports_zero_active() {
    assert_eq!(summarize::<Faq>(&[]), ResourceSummary { total: 0, active: Some(0) });
}

#[test]
fn summarize_without_active_flag_omits_active() {
    let items = vec![AboutCompany::default()];
    assert_eq!(summarize(&items), ResourceSummary { total: 1, active: None });
}

#[test]
fn lead_breakdown_counts_each_status() {
    let leads = vec![lead(LeadStatus::New), lead(LeadStatus::Contacted), lead(LeadStatus::New)];
    let breakdown = LeadBreakdown::from_leads(&leads);
    assert_eq!(breakdown, LeadBreakdown { new: 2, contacted: 1 });
    assert_eq!(breakdown.contacted_percent(), 33);
}

#[test]
fn contacted_percent_of_no_leads_is_zero() {
    assert_eq!(LeadBreakdown::default().contacted_percent(), 0);
}

#[test]
fn card_status_defaults_to_loading() {
    assert_eq!(CardStatus::default(), CardStatus::Loading);
}

#[test]
fn caption_splits_active_and_inactive() {
    let summary = ResourceSummary { total: 5, active: Some(3) };
    assert_eq!(summary.caption().as_deref(), Some("3 active, 2 inactive"));
    assert_eq!(ResourceSummary { total: 2, active: None }.caption(), None);
}

#[test]
fn card_status_follows_load_outcome() {
    assert_eq!(CardStatus::from_load::<Faq>(None), CardStatus::Loading);
    let loaded: Result<Vec<Faq>, String> = Ok(vec![Faq::default(), Faq { is_active: false, ..Faq::default() }]);
    assert_eq!(
        CardStatus::from_load(Some(&loaded)),
        CardStatus::Ready(ResourceSummary { total: 2, active: Some(1) })
    );
    let failed: Result<Vec<Faq>, String> = Err("Failed to load records. Please try again.".to_owned());
    assert_eq!(
        CardStatus::from_load(Some(&failed)),
        CardStatus::Failed("Failed to load records. Please try again.".to_owned())
    );
}

#[test]
fn one_lead_list_feeds_both_lead_cards() {
    let leads = vec![lead(LeadStatus::New), lead(LeadStatus::Contacted), lead(LeadStatus::Contacted)];
    let loaded: Result<Vec<ContactLead>, String> = Ok(leads.clone());
    assert_eq!(
        CardStatus::from_load(Some(&loaded)),
        CardStatus::Ready(ResourceSummary { total: 3, active: None })
    );
    assert_eq!(LeadBreakdown::from_leads(&leads), LeadBreakdown { new: 1, contacted: 2 });
}
