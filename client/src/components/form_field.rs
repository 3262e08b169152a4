//! Labeled input bound to one key of a record draft.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;

use crate::net::types::{FieldKind, FieldSpec};
use crate::util::draft::{Draft, field_bool, field_text, set_bool, set_field};

/// HTML `type` attribute for single-line inputs of `kind`.
pub fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Number { .. } => "number",
        FieldKind::Email => "email",
        FieldKind::Url => "url",
        FieldKind::Checkbox => "checkbox",
        FieldKind::Text | FieldKind::TextArea | FieldKind::Select(_) => "text",
    }
}

/// Display label with a required marker.
pub fn field_label(field: &FieldSpec) -> String {
    if field.required { format!("{} *", field.label) } else { field.label.to_owned() }
}

/// One form row: label plus the input matching the field kind.
#[component]
pub fn FormField(field: FieldSpec, draft: RwSignal<Draft>, #[prop(optional)] disabled: bool) -> impl IntoView {
    let key = field.key;
    let id = format!("field-{key}");
    let text = move || draft.with(|d| field_text(d, key));
    let on_text = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        draft.update(|d| set_field(d, &field, &value));
    };

    let input = match field.kind {
        FieldKind::TextArea => view! {
            <textarea
                id=id.clone()
                class="form-field__input form-field__input--area"
                rows="4"
                disabled=disabled
                prop:value=text
                on:input=on_text
            ></textarea>
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <label class="form-field__switch">
                <input
                    id=id.clone()
                    type="checkbox"
                    disabled=disabled
                    prop:checked=move || draft.with(|d| field_bool(d, key))
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        draft.update(|d| set_bool(d, key, checked));
                    }
                />
                <span class="form-field__switch-track"></span>
            </label>
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select id=id.clone() class="form-field__input" disabled=disabled prop:value=text on:change=on_text>
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Number { min, max } => view! {
            <input
                id=id.clone()
                class="form-field__input"
                type="number"
                step="1"
                min=min.map(|m| m.to_string())
                max=max.map(|m| m.to_string())
                disabled=disabled
                prop:value=text
                on:input=on_text
            />
        }
        .into_any(),
        kind => view! {
            <input
                id=id.clone()
                class="form-field__input"
                type=input_type(kind)
                disabled=disabled
                prop:value=text
                on:input=on_text
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-field">
            <label class="form-field__label" for=id>{field_label(&field)}</label>
            {input}
        </div>
    }
}
