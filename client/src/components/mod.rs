//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `crud_table` composes the generic widgets (modal, pagination, form fields,
//! badges) into the per-resource admin screen. `sidebar` and `toast_stack`
//! form the app chrome and read shared state from Leptos context.

pub mod badge;
pub mod crud_table;
pub mod form_field;
pub mod modal;
pub mod pagination;
pub mod record_detail;
pub mod record_form;
pub mod sidebar;
pub mod toast_stack;
