//! Domain logic shared by the store, the HTTP service and the client.
//!
//! Everything in this crate is pure: no network, no database, no clock
//! reads. Callers pass the current time in where it matters.

pub mod access_gate;
pub mod anti_spam;
pub mod error;
pub mod feedback;
pub mod project;
pub mod types;
pub mod validation;
