//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. The store only ever inserts and
//! lists; there is no update or delete path.

pub mod feedback_repo;
pub mod project_repo;

pub use feedback_repo::FeedbackRepo;
pub use project_repo::ProjectRepo;
