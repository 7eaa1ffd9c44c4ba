pub mod feedback;
pub mod projects;
