use super::*;
use crate::net::types::{Faq, Testimonial};

fn faq(id: usize, order: i64) -> Faq {
    Faq {
        id: id.to_string(),
        question: format!("Question {id}"),
        answer: format!("Answer {id}"),
        display_order: order,
        is_active: true,
    }
}

fn faqs(n: usize) -> Vec<Faq> {
    (1..=n).map(|i| faq(i, i64::try_from(i).unwrap_or(0))).collect()
}

fn loaded(n: usize) -> TableState<Faq> {
    let mut state = TableState::default();
    state.replace_items(faqs(n));
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_loading_on_first_page() {
    let state = TableState::<Faq>::default();
    assert!(state.loading);
    assert!(!state.saving);
    assert_eq!(state.page, 1);
    assert_eq!(state.modal, ModalMode::Closed);
    assert_eq!(state.total_pages(), 0);
    assert!(state.visible().is_empty());
}

// =============================================================
// Fetch
// =============================================================

#[test]
fn replace_items_sorts_by_sort_key() {
    let mut state = TableState::default();
    state.replace_items(vec![faq(1, 3), faq(2, 1), faq(3, 2)]);
    let ids: Vec<&str> = state.items.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "1"]);
    assert!(!state.loading);
}

#[test]
fn replace_items_keeps_order_for_unsorted_entities() {
    let mut state = TableState::<Testimonial>::default();
    let items: Vec<Testimonial> = ["b", "a", "c"]
        .iter()
        .map(|id| Testimonial { id: (*id).to_owned(), ..Testimonial::default() })
        .collect();
    state.replace_items(items.clone());
    assert_eq!(state.items, items);
}

#[test]
fn replace_items_clamps_page_when_list_shrinks() {
    let mut state = loaded(12);
    state.set_page(3);
    assert_eq!(state.page, 3);
    state.replace_items(faqs(4));
    assert_eq!(state.page, 1);
}

#[test]
fn fetch_failure_leaves_empty_list_on_page_one() {
    let mut state = loaded(7);
    state.set_page(2);
    state.replace_items(Vec::new());
    assert!(state.items.is_empty());
    assert_eq!(state.page, 1);
    assert_eq!(state.total_pages(), 0);
}

// =============================================================
// Paging
// =============================================================

#[test]
fn visible_respects_entity_page_size() {
    let state = loaded(12);
    assert_eq!(state.total_pages(), 3);
    assert_eq!(state.visible().len(), 5);

    let mut testimonials = TableState::<Testimonial>::default();
    testimonials.replace_items(
        (0..9)
            .map(|i| Testimonial { id: i.to_string(), ..Testimonial::default() })
            .collect(),
    );
    assert_eq!(testimonials.total_pages(), 3);
    assert_eq!(testimonials.visible().len(), 4);
}

#[test]
fn set_page_clamps_to_valid_range() {
    let mut state = loaded(12);
    state.set_page(99);
    assert_eq!(state.page, 3);
    state.set_page(0);
    assert_eq!(state.page, 1);
}

// =============================================================
// Search
// =============================================================

#[test]
fn set_search_filters_and_resets_page() {
    let mut state = loaded(12);
    state.set_page(3);
    state.set_search("question 1");
    assert_eq!(state.page, 1);
    let ids: Vec<String> = state.filtered().into_iter().map(|f| f.id).collect();
    assert_eq!(ids, vec!["1", "10", "11", "12"]);
    assert_eq!(state.total_pages(), 1);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn remove_drops_record_and_clamps_page() {
    let mut state = loaded(6);
    state.set_page(2);
    assert_eq!(state.visible().len(), 1);

    state.remove("6");
    assert!(state.items.iter().all(|f| f.id != "6"));
    assert_eq!(state.page, 1);
    assert_eq!(state.total_pages(), 1);
}

#[test]
fn remove_unknown_id_is_a_no_op() {
    let mut state = loaded(3);
    state.remove("missing");
    assert_eq!(state.items.len(), 3);
}

// =============================================================
// Modal
// =============================================================

#[test]
fn open_and_close_modal() {
    let mut state = loaded(1);
    let record = state.items[0].clone();
    state.open(ModalMode::Edit(record.clone()));
    assert_eq!(state.modal, ModalMode::Edit(record));
    state.close();
    assert_eq!(state.modal, ModalMode::Closed);
}
