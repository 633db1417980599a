//! Routing and browser helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard` and `history_lock` hold the pure navigation rules; `browser`
//! applies them to the real window so pages never touch `web-sys` directly.

pub mod browser;
pub mod guard;
pub mod history_lock;
pub mod route;
