//! Client-side form validation run before any create or update request.
//!
//! Checks follow the field schema: required values, integer parsing and
//! bounds, email and URL shape, and select membership. Empty optional fields
//! are always accepted.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use serde_json::Value;
use thiserror::Error;

use super::draft::{Draft, field_text};
use crate::net::types::{FieldKind, FieldSpec};

/// First rule a draft violates, phrased for a toast.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(&'static str),
    #[error("{0} must be a whole number.")]
    NotANumber(&'static str),
    #[error("{label} must be between {min} and {max}.")]
    OutOfRange { label: &'static str, min: String, max: String },
    #[error("{0} must be a valid email address.")]
    InvalidEmail(&'static str),
    #[error("{0} must be a valid http(s) URL.")]
    InvalidUrl(&'static str),
    #[error("{0} has an unknown value.")]
    InvalidChoice(&'static str),
}

/// Validate `draft` against `fields`, in form order.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_draft(fields: &[FieldSpec], draft: &Draft) -> Result<(), ValidationError> {
    fields.iter().try_for_each(|field| validate_field(field, draft))
}

fn validate_field(field: &FieldSpec, draft: &Draft) -> Result<(), ValidationError> {
    if matches!(field.kind, FieldKind::Checkbox) {
        return Ok(());
    }
    let text = field_text(draft, field.key);
    let text = text.trim();
    if text.is_empty() {
        return if field.required { Err(ValidationError::Required(field.label)) } else { Ok(()) };
    }

    match field.kind {
        FieldKind::Number { min, max } => {
            let number = match draft.get(field.key) {
                Some(Value::Number(n)) => n.as_i64(),
                _ => text.parse::<i64>().ok(),
            }
            .ok_or(ValidationError::NotANumber(field.label))?;
            let below = min.is_some_and(|m| number < m);
            let above = max.is_some_and(|m| number > m);
            if below || above {
                return Err(ValidationError::OutOfRange {
                    label: field.label,
                    min: min.map_or_else(|| "-∞".to_owned(), |m| m.to_string()),
                    max: max.map_or_else(|| "∞".to_owned(), |m| m.to_string()),
                });
            }
        }
        FieldKind::Email if !is_email(text) => return Err(ValidationError::InvalidEmail(field.label)),
        FieldKind::Url if !is_http_url(text) => return Err(ValidationError::InvalidUrl(field.label)),
        FieldKind::Select(options) if !options.iter().any(|option| *option == text) => {
            return Err(ValidationError::InvalidChoice(field.label));
        }
        _ => {}
    }
    Ok(())
}

/// Shape check only: `local@domain.tld` with no whitespace.
pub fn is_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Absolute `http://` or `https://` URL with a host.
pub fn is_http_url(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let rest = text
        .strip_prefix("https://")
        .or_else(|| text.strip_prefix("http://"));
    rest.and_then(|r| r.split(['/', '?', '#']).next())
        .is_some_and(|host| !host.is_empty())
}
