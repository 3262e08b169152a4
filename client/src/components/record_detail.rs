//! Read-only view of an already-fetched record.

#[cfg(test)]
#[path = "record_detail_test.rs"]
mod record_detail_test;

use leptos::prelude::*;

use super::badge::{Badge, BadgeTone, badge_for};
use crate::net::types::{FieldKind, FieldSpec};
use crate::util::draft::{Draft, display_value};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
    /// Status fields render as a badge instead of plain text.
    pub badge: Option<(String, BadgeTone)>,
}

impl DetailRow {
    fn text(label: &str, value: String) -> Self {
        Self { label: label.to_owned(), value, badge: None }
    }
}

/// Rows for `record`: the id, every schema field, then `created_at` when present.
pub fn detail_rows(fields: &[FieldSpec], record: &Draft) -> Vec<DetailRow> {
    let mut rows = Vec::with_capacity(fields.len() + 2);
    if let Some(id) = record.get("id") {
        rows.push(DetailRow::text("ID", display_value(Some(id))));
    }
    rows.extend(fields.iter().map(|field| {
        let value = record.get(field.key);
        let badge = matches!(field.kind, FieldKind::Checkbox | FieldKind::Select(_)).then(|| badge_for(value));
        DetailRow { label: field.label.to_owned(), value: display_value(value), badge }
    }));
    if let Some(created) = record.get("created_at") {
        rows.push(DetailRow::text("Received", display_value(Some(created))));
    }
    rows
}

#[component]
pub fn RecordDetail(fields: &'static [FieldSpec], record: Draft) -> impl IntoView {
    view! {
        <dl class="record-detail">
            {detail_rows(fields, &record)
                .into_iter()
                .map(|row| {
                    let value = match row.badge {
                        Some((label, tone)) => view! { <Badge label=label tone=tone/> }.into_any(),
                        None => view! { <span>{row.value}</span> }.into_any(),
                    };
                    view! {
                        <dt class="record-detail__label">{row.label}</dt>
                        <dd class="record-detail__value">{value}</dd>
                    }
                })
                .collect_view()}
        </dl>
    }
}
