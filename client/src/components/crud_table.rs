//! Searchable, paginated CRUD table shared by every resource page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `crud_table::<E>()` is the whole per-resource screen: it fetches on mount,
//! filters and pages client-side through `TableState<E>`, and routes create,
//! edit, view and delete through modal dialogs. Column layout, form fields and
//! toggle behavior all come from the `Entity` impl of `E`.
//!
//! ERROR HANDLING
//! ==============
//! Request failures log the detail with `warn!` and surface a generic toast.
//! A failed fetch leaves an empty table; a failed mutation keeps its dialog
//! open so the user can retry. Nothing is retried automatically.

#[cfg(test)]
#[path = "crud_table_test.rs"]
mod crud_table_test;

use std::future::Future;

use leptos::logging::warn;
use leptos::prelude::*;
use serde_json::Value;

use super::badge::{Badge, badge_for};
use super::modal::Modal;
use super::pagination::Pagination;
use super::record_detail::RecordDetail;
use super::record_form::RecordForm;
use crate::net::api::{self, ApiError, CrudOp, failure_message, success_message};
use crate::net::types::{CellKind, Entity};
use crate::state::table::{ModalMode, TableState};
use crate::state::toast::ToastState;
use crate::util::draft::{CLIP_CHARS, Draft, clip, display_value, from_draft, to_draft};
use crate::util::validation::validate_draft;

/// Dialog heading for `mode`.
pub fn modal_title<E: Entity>(mode: &ModalMode<E>) -> String {
    match mode {
        ModalMode::Closed => String::new(),
        ModalMode::Create => format!("Add {}", E::LABEL),
        ModalMode::Edit(_) => format!("Edit {}", E::LABEL),
        ModalMode::View(_) => format!("{} Details", E::LABEL),
        ModalMode::Delete(_) => format!("Delete {}", E::LABEL),
    }
}

/// Action button text for the record's toggle, if it has one.
pub fn toggle_label<E: Entity>(record: &E) -> Option<&'static str> {
    if let Some(active) = record.is_active() {
        return Some(if active { "Deactivate" } else { "Activate" });
    }
    let patch = record.toggle_patch()?;
    match patch.get("status").and_then(Value::as_str) {
        Some("contacted") => Some("Mark contacted"),
        Some(_) => Some("Mark new"),
        None => Some("Toggle"),
    }
}

pub fn delete_prompt(label: &str) -> String {
    format!("Are you sure you want to delete this {label}? This action cannot be undone.")
}

fn spawn_request<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}

fn report_failure<E: Entity>(toasts: RwSignal<ToastState>, op: CrudOp, err: &ApiError) {
    warn!("{} {op:?} failed: {err}", E::RESOURCE);
    toasts.update(|t| {
        t.error(failure_message(op, E::LABEL));
    });
}

fn report_success<E: Entity>(toasts: RwSignal<ToastState>, op: CrudOp) {
    toasts.update(|t| {
        t.success(success_message(op, E::LABEL));
    });
}

/// Fetch the full list and install it, or an empty list on failure.
fn reload<E: Entity>(state: RwSignal<TableState<E>>, toasts: RwSignal<ToastState>) {
    spawn_request(async move {
        match api::fetch_all::<E>().await {
            Ok(items) => state.update(|s| s.replace_items(items)),
            Err(err) => {
                report_failure::<E>(toasts, CrudOp::Load, &err);
                state.update(|s| s.replace_items(Vec::new()));
            }
        }
    });
}

struct RowActions<E: Entity> {
    view: Callback<E>,
    edit: Callback<E>,
    toggle: Callback<E>,
    delete: Callback<E>,
}

// Derive would demand `E: Copy`; the callbacks themselves are always `Copy`.
impl<E: Entity> Clone for RowActions<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for RowActions<E> {}

fn render_cell(kind: CellKind, value: Option<&Value>) -> AnyView {
    match kind {
        CellKind::Text => view! { <span>{display_value(value)}</span> }.into_any(),
        CellKind::Clipped => {
            let full = display_value(value);
            let short = clip(&full, CLIP_CHARS);
            view! { <span title=full>{short}</span> }.into_any()
        }
        CellKind::Badge => {
            let (label, tone) = badge_for(value);
            view! { <Badge label=label tone=tone/> }.into_any()
        }
        CellKind::Image => match value.and_then(Value::as_str).filter(|src| !src.is_empty()) {
            Some(src) => view! { <img class="crud-table__thumb" src=src.to_owned() alt="" loading="lazy"/> }.into_any(),
            None => view! { <span class="crud-table__thumb crud-table__thumb--empty">"—"</span> }.into_any(),
        },
    }
}

fn render_row<E: Entity>(record: E, actions: RowActions<E>) -> impl IntoView {
    let fields = match serde_json::to_value(&record) {
        Ok(Value::Object(map)) => map,
        _ => Draft::new(),
    };
    let cells = E::COLUMNS
        .iter()
        .map(|column| view! { <td class="crud-table__cell">{render_cell(column.kind, fields.get(column.key))}</td> })
        .collect_view();
    let toggle = toggle_label(&record).map(|label| {
        let record = record.clone();
        view! {
            <button class="btn btn--small" on:click=move |_| actions.toggle.run(record.clone())>
                {label}
            </button>
        }
    });
    let (for_view, for_edit, for_delete) = (record.clone(), record.clone(), record);

    view! {
        <tr class="crud-table__row">
            {cells}
            <td class="crud-table__actions">
                <button class="btn btn--small" on:click=move |_| actions.view.run(for_view.clone())>"View"</button>
                <button class="btn btn--small" on:click=move |_| actions.edit.run(for_edit.clone())>"Edit"</button>
                {toggle}
                <button class="btn btn--small btn--danger" on:click=move |_| actions.delete.run(for_delete.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Complete admin screen for resource `E`.
pub fn crud_table<E: Entity>() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(TableState::<E>::default());
    let draft = RwSignal::new(Draft::new());

    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let saving = Memo::new(move |_| state.with(|s| s.saving));
    let modal = Memo::new(move |_| state.with(|s| s.modal.clone()));
    let page = Signal::derive(move || state.with(|s| s.page));
    let total = Signal::derive(move || state.with(TableState::total_pages));

    reload(state, toasts);

    let close = Callback::new(move |()| state.update(TableState::close));
    let on_page = Callback::new(move |target: usize| state.update(|s| s.set_page(target)));

    let on_add = move |_| {
        draft.set(to_draft(&E::default()));
        state.update(|s| s.open(ModalMode::Create));
    };

    let actions = RowActions {
        view: Callback::new(move |record: E| state.update(|s| s.open(ModalMode::View(record)))),
        edit: Callback::new(move |record: E| {
            draft.set(to_draft(&record));
            state.update(|s| s.open(ModalMode::Edit(record)));
        }),
        toggle: Callback::new(move |record: E| {
            let Some(body) = record.toggle_patch() else {
                return;
            };
            state.update(|s| s.saving = true);
            spawn_request(async move {
                let result = api::patch::<E>(record.id(), &body).await;
                state.update(|s| s.saving = false);
                match result {
                    Ok(_) => {
                        report_success::<E>(toasts, CrudOp::Toggle);
                        reload(state, toasts);
                    }
                    Err(err) => report_failure::<E>(toasts, CrudOp::Toggle, &err),
                }
            });
        }),
        delete: Callback::new(move |record: E| state.update(|s| s.open(ModalMode::Delete(record)))),
    };

    let submit = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        if let Err(err) = validate_draft(E::FIELDS, &current) {
            toasts.update(|t| {
                t.error(err.to_string());
            });
            return;
        }
        let creating = state.with_untracked(|s| matches!(s.modal, ModalMode::Create));
        let op = if creating { CrudOp::Create } else { CrudOp::Update };
        let record = match from_draft::<E>(&current) {
            Ok(record) => record,
            Err(err) => {
                report_failure::<E>(toasts, op, &ApiError::Encode(err.to_string()));
                return;
            }
        };
        state.update(|s| s.saving = true);
        spawn_request(async move {
            let result = if creating { api::create(&record).await } else { api::update(&record).await };
            state.update(|s| s.saving = false);
            match result {
                Ok(_) => {
                    report_success::<E>(toasts, op);
                    state.update(TableState::close);
                    reload(state, toasts);
                }
                Err(err) => report_failure::<E>(toasts, op, &err),
            }
        });
    });

    let confirm_delete = Callback::new(move |record: E| {
        if saving.get_untracked() {
            return;
        }
        state.update(|s| s.saving = true);
        spawn_request(async move {
            let result = api::delete::<E>(record.id()).await;
            state.update(|s| s.saving = false);
            match result {
                Ok(()) => {
                    state.update(|s| {
                        s.remove(record.id());
                        s.close();
                    });
                    report_success::<E>(toasts, CrudOp::Delete);
                }
                Err(err) => report_failure::<E>(toasts, CrudOp::Delete, &err),
            }
        });
    });

    let dialog = move || {
        let mode = modal.get();
        let title = modal_title(&mode);
        match mode {
            ModalMode::Closed => None,
            ModalMode::Create | ModalMode::Edit(_) => {
                let submit_label = if matches!(mode, ModalMode::Create) { "Create" } else { "Save Changes" };
                Some(
                    view! {
                        <Modal title=title on_close=close wide=true>
                            <RecordForm
                                fields=E::FIELDS
                                draft=draft
                                saving=saving
                                submit_label=submit_label
                                on_submit=submit
                                on_cancel=close
                            />
                        </Modal>
                    }
                    .into_any(),
                )
            }
            ModalMode::View(record) => Some(
                view! {
                    <Modal title=title on_close=close>
                        <RecordDetail fields=E::FIELDS record=to_draft(&record)/>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| close.run(())>"Close"</button>
                        </div>
                    </Modal>
                }
                .into_any(),
            ),
            ModalMode::Delete(record) => Some(
                view! {
                    <Modal title=title on_close=close>
                        <p class="dialog__message">{delete_prompt(E::LABEL)}</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| close.run(())>"Cancel"</button>
                            <button
                                class="btn btn--danger"
                                disabled=move || saving.get()
                                on:click=move |_| confirm_delete.run(record.clone())
                            >
                                {move || if saving.get() { "Deleting…" } else { "Delete" }}
                            </button>
                        </div>
                    </Modal>
                }
                .into_any(),
            ),
        }
    };

    let rows = move || {
        let visible = state.with(TableState::visible);
        if visible.is_empty() {
            let colspan = (E::COLUMNS.len() + 1).to_string();
            return view! {
                <tr>
                    <td class="crud-table__empty" colspan=colspan>"No records found."</td>
                </tr>
            }
            .into_any();
        }
        visible
            .into_iter()
            .map(|record| render_row(record, actions))
            .collect_view()
            .into_any()
    };

    view! {
        <section class="crud-table">
            <header class="crud-table__header">
                <h1>{E::PLURAL}</h1>
                <button class="btn btn--primary" on:click=on_add>{format!("Add {}", E::LABEL)}</button>
            </header>
            <input
                class="crud-table__search"
                type="search"
                placeholder=format!("Search {}…", E::PLURAL.to_lowercase())
                prop:value=move || state.with(|s| s.search.clone())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    state.update(|s| s.set_search(term));
                }
            />
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="crud-table__loading">"Loading…"</p> }
            >
                <table class="crud-table__table">
                    <thead>
                        <tr>
                            {E::COLUMNS.iter().map(|column| view! { <th>{column.label}</th> }).collect_view()}
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <Pagination page=page total=total on_change=on_page/>
            </Show>
            {dialog}
        </section>
    }
}
