//! Client state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data structs wrapped in `RwSignal` by the components that own them.
//! `session` and `toast` are app-wide contexts; `table` and `dashboard` are
//! scoped to a single page.

pub mod dashboard;
pub mod session;
pub mod table;
pub mod toast;
