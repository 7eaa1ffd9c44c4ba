//! Row models for the store's tables.

pub mod feedback;
pub mod project;
