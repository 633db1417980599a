//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `store` owns raw browser storage, `session` is the state machine derived
//! from it, and `portfolio` holds fetched page data.

pub mod portfolio;
pub mod session;
pub mod store;
