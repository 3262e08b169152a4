//! Status badges for table cells and detail views.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use leptos::prelude::*;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Positive,
    Muted,
    Attention,
    Neutral,
}

impl BadgeTone {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Positive => "badge badge--positive",
            Self::Muted => "badge badge--muted",
            Self::Attention => "badge badge--attention",
            Self::Neutral => "badge badge--neutral",
        }
    }
}

/// Label and tone for a status value (`is_active` flags and lead status).
pub fn badge_for(value: Option<&Value>) -> (String, BadgeTone) {
    match value {
        Some(Value::Bool(true)) => ("Active".to_owned(), BadgeTone::Positive),
        Some(Value::Bool(false)) => ("Inactive".to_owned(), BadgeTone::Muted),
        Some(Value::String(s)) if s == "new" => ("New".to_owned(), BadgeTone::Attention),
        Some(Value::String(s)) if s == "contacted" => ("Contacted".to_owned(), BadgeTone::Positive),
        Some(Value::String(s)) => (s.clone(), BadgeTone::Neutral),
        _ => ("—".to_owned(), BadgeTone::Neutral),
    }
}

#[component]
pub fn Badge(#[prop(into)] label: String, tone: BadgeTone) -> impl IntoView {
    view! { <span class=tone.class()>{label}</span> }
}
