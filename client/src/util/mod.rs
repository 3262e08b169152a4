//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure list and form logic (paging, search, drafts, validation) lives here so
//! it can be tested without a browser; `storage` isolates the web-sys glue.

pub mod draft;
pub mod paging;
pub mod search;
pub mod storage;
pub mod validation;
