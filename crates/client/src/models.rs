//! Records as the client receives them from the store.
//!
//! Ids are opaque strings. Legacy documents that carry `_id` instead of `id`
//! are accepted, and a record with neither gets a random local id so views
//! can still key on it.

use serde::{Deserialize, Serialize};
use showcase_core::project::ProjectMedia;
use showcase_core::types::Timestamp;

fn local_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(alias = "_id", default = "local_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    pub feedback: String,
    #[serde(default)]
    pub rating: Option<i32>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(alias = "_id", default = "local_id")]
    pub id: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub media: Vec<ProjectMedia>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
