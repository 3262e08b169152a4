//! Client-side search filter for resource tables.
//!
//! Matching is a case-insensitive substring test over the entity's declared
//! search fields. The filter depends only on the list and the term, so it can
//! be recomputed on every keystroke.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use serde_json::Value;

use crate::net::types::Entity;

/// Records of `items` whose search fields contain `term`, in original order.
///
/// An empty term matches everything. Whitespace in the term is significant.
pub fn filter_records<E: Entity>(items: &[E], term: &str) -> Vec<E> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|record| matches_record(*record, &needle))
        .cloned()
        .collect()
}

fn matches_record<E: Entity>(record: &E, needle: &str) -> bool {
    let Ok(Value::Object(map)) = serde_json::to_value(record) else {
        return false;
    };
    E::SEARCH_FIELDS
        .iter()
        .filter_map(|key| map.get(*key))
        .any(|value| searchable_text(value).is_some_and(|text| text.to_lowercase().contains(needle)))
}

fn searchable_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
