//! Create/edit form generated from a field schema.

use leptos::prelude::*;

use super::form_field::FormField;
use crate::net::types::FieldSpec;
use crate::util::draft::Draft;

#[component]
pub fn RecordForm(
    fields: &'static [FieldSpec],
    draft: RwSignal<Draft>,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] submit_label: String,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !saving.get_untracked() {
            on_submit.run(());
        }
    };

    view! {
        <form class="record-form" on:submit=on_form_submit novalidate>
            {fields
                .iter()
                .map(|field| view! { <FormField field=*field draft=draft/> })
                .collect_view()}
            <div class="dialog__actions">
                <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving…".to_owned() } else { submit_label.clone() }}
                </button>
            </div>
        </form>
    }
}
