//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Resource pages are thin wrappers over `crud_table`.

pub mod dashboard;
pub mod resources;
pub mod sign_in;
