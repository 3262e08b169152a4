//! Editable form drafts for resource records.
//!
//! DESIGN
//! ======
//! Forms edit a JSON object rather than the typed record so that one form
//! component can serve every entity. Input text is stored as typed JSON when
//! it parses (numbers, booleans) and as the raw string otherwise, leaving the
//! decision about invalid input to `util::validation`.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde_json::{Map, Value};

use crate::net::types::{Entity, FieldKind, FieldSpec};

/// JSON object being edited by a record form.
pub type Draft = Map<String, Value>;

/// Characters kept by a clipped table cell before the ellipsis.
pub const CLIP_CHARS: usize = 60;

/// Snapshot `record` as an editable draft.
pub fn to_draft<E: Entity>(record: &E) -> Draft {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => Draft::new(),
    }
}

/// Rebuild a typed record from `draft`.
///
/// # Errors
///
/// Returns the serde error if a field holds a value the record cannot accept.
pub fn from_draft<E: Entity>(draft: &Draft) -> Result<E, serde_json::Error> {
    serde_json::from_value(Value::Object(draft.clone()))
}

/// Text shown in an input for `key`.
pub fn field_text(draft: &Draft, key: &str) -> String {
    match draft.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Current boolean value of a checkbox field.
pub fn field_bool(draft: &Draft, key: &str) -> bool {
    matches!(draft.get(key), Some(Value::Bool(true)))
}

/// Store raw input `text` for `field`, typed according to its kind.
pub fn set_field(draft: &mut Draft, field: &FieldSpec, text: &str) {
    let value = match field.kind {
        FieldKind::Number { .. } => match text.trim().parse::<i64>() {
            Ok(n) => Value::from(n),
            Err(_) => Value::String(text.to_owned()),
        },
        FieldKind::Checkbox => Value::Bool(text == "true"),
        _ => Value::String(text.to_owned()),
    };
    draft.insert(field.key.to_owned(), value);
}

pub fn set_bool(draft: &mut Draft, key: &str, value: bool) {
    draft.insert(key.to_owned(), Value::Bool(value));
}

/// Human-readable rendering of a record value for tables and detail views.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(true)) => "Yes".to_owned(),
        Some(Value::Bool(false)) => "No".to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Shorten `text` to at most `max` characters, appending an ellipsis when cut.
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push('…');
    out
}
