//! The one state container a view layer holds.
//!
//! Only the last-submit timestamp is persisted (the cooldown has to survive a
//! reload). The gate flag and the cached collections live in memory.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use showcase_core::types::Timestamp;

use crate::models::{Feedback, Project};

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("State file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("State file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientState {
    /// When the last feedback submission succeeded.
    #[serde(default)]
    pub last_submit: Option<Timestamp>,

    /// Soft-gate flag. Set by a matching access code, cleared by
    /// [`ClientState::logout`]. Never expires and is never checked by the
    /// store; see [`showcase_core::access_gate`].
    #[serde(skip)]
    authenticated: bool,

    /// Most recent feedback collection, newest first.
    #[serde(skip)]
    pub feedback: Vec<Feedback>,

    /// Most recent project collection, newest first.
    #[serde(skip)]
    pub projects: Vec<Project>,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load persisted state. A missing file yields a fresh state.
    pub fn load(path: &Path) -> Result<Self, StateError> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the durable part of the state.
    pub fn save(&self, path: &Path) -> Result<(), StateError> {
        let bytes = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Whether the add-project form may be shown.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub(crate) fn mark_authenticated(&mut self) {
        self.authenticated = true;
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}
