//! Client side of the showcase: the HTTP submission client, the explicit
//! state container the views read from, and the submit pipeline that ties
//! validation, anti-spam and the access gate together.
//!
//! Nothing here depends on a view framework. A presentation layer holds one
//! [`ClientState`], calls into [`SubmissionPipeline`], and renders the
//! returned outcomes.

pub mod api;
pub mod config;
pub mod models;
pub mod pipeline;
pub mod state;

pub use api::{SubmissionClient, SubmissionResult};
pub use config::ClientConfig;
pub use pipeline::{FeedbackOutcome, ProjectOutcome, SubmissionPipeline};
pub use state::ClientState;
