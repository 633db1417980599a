//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page exposes its entry check and state transitions as plain functions
//! over a `SessionStore`, and a `#[component]` that wires them to the router.

pub mod code_viewer;
pub mod developer_login;
pub mod loading;
pub mod profiles;
pub mod recruiter;
