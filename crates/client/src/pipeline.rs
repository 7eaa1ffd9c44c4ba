//! Submit flows driven by the view layer.
//!
//! Feedback: honeypot, then form rules, then cooldown, then the store. A
//! success records the submit time (and writes it to the state file, when
//! one is configured) and re-fetches the whole collection.
//!
//! Projects: soft gate, then form rules, then the store, then a re-fetch.
//!
//! Nothing is sent to the network unless every earlier step passes.

use std::path::PathBuf;

use chrono::Utc;

use showcase_core::access_gate::{AccessGate, INVALID_ACCESS_CODE};
use showcase_core::anti_spam::{self, CooldownActive};
use showcase_core::error::CoreError;
use showcase_core::feedback::FeedbackForm;
use showcase_core::project::ProjectForm;
use showcase_core::types::Timestamp;
use showcase_core::validation::{validate_feedback_form, validate_project_form, FieldErrors};

use crate::api::{SubmissionClient, SubmissionResult};
use crate::config::ClientConfig;
use crate::state::ClientState;

/// What happened to a feedback submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// Honeypot was filled. Nothing sent and nothing to show.
    Discarded,
    /// Form errors to render inline.
    Invalid(FieldErrors),
    /// Too soon after the last success. Show the message as a toast.
    CoolingDown(CooldownActive),
    /// The store accepted it; the feedback cache has been refreshed.
    Submitted(SubmissionResult),
    /// The store or the network failed. `message` is safe to show.
    Failed(SubmissionResult),
}

/// What happened to an add-project attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectOutcome {
    /// The session has not passed the access gate.
    Locked,
    Invalid(FieldErrors),
    /// The store accepted it; the project cache has been refreshed.
    Submitted(SubmissionResult),
    Failed(SubmissionResult),
}

/// Ties the submission client and the access gate together.
#[derive(Debug, Clone)]
pub struct SubmissionPipeline {
    client: SubmissionClient,
    gate: Option<AccessGate>,
    state_file: Option<PathBuf>,
}

impl SubmissionPipeline {
    /// `gate` of `None` means no access code is configured; the project form
    /// stays locked.
    pub fn new(client: SubmissionClient, gate: Option<AccessGate>) -> Self {
        Self {
            client,
            gate,
            state_file: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let pipeline = Self::new(
            SubmissionClient::new(config.api_url.clone()),
            config.access_gate(),
        );
        match &config.state_file {
            Some(path) => pipeline.with_state_file(path.clone()),
            None => pipeline,
        }
    }

    /// Persist [`ClientState`] to `path` whenever the cooldown moves.
    pub fn with_state_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_file = Some(path.into());
        self
    }

    /// Replace the cached feedback collection with a fresh read.
    pub async fn refresh_feedback(&self, state: &mut ClientState) {
        state.feedback = self.client.list_feedback().await;
    }

    /// Replace the cached project collection with a fresh read.
    pub async fn refresh_projects(&self, state: &mut ClientState) {
        state.projects = self.client.list_projects().await;
    }

    pub async fn submit_feedback(
        &self,
        state: &mut ClientState,
        form: &FeedbackForm,
    ) -> FeedbackOutcome {
        self.submit_feedback_at(state, form, Utc::now()).await
    }

    /// [`Self::submit_feedback`] with an explicit clock reading.
    pub async fn submit_feedback_at(
        &self,
        state: &mut ClientState,
        form: &FeedbackForm,
        now: Timestamp,
    ) -> FeedbackOutcome {
        if anti_spam::is_automated(&form.honeypot) {
            tracing::debug!("Honeypot filled, dropping feedback submission");
            return FeedbackOutcome::Discarded;
        }

        let errors = validate_feedback_form(form);
        if !errors.is_empty() {
            return FeedbackOutcome::Invalid(errors);
        }

        if let Err(cooldown) = anti_spam::check_cooldown(state.last_submit, now) {
            return FeedbackOutcome::CoolingDown(cooldown);
        }

        let result = self.client.create_feedback(&form.to_new_feedback()).await;
        if !result.success {
            return FeedbackOutcome::Failed(result);
        }

        state.last_submit = Some(now);
        self.persist(state);
        self.refresh_feedback(state).await;
        FeedbackOutcome::Submitted(result)
    }

    /// Check an access code and, on a match, open the project form for this
    /// session. Any failure carries the same generic message.
    pub fn unlock(&self, state: &mut ClientState, code: &str) -> Result<(), CoreError> {
        let Some(gate) = &self.gate else {
            tracing::warn!("Access gate has no configured digest; project form stays locked");
            return Err(CoreError::Unauthorized(INVALID_ACCESS_CODE.into()));
        };

        if gate.verify(code) {
            state.mark_authenticated();
            Ok(())
        } else {
            Err(CoreError::Unauthorized(INVALID_ACCESS_CODE.into()))
        }
    }

    pub async fn submit_project(
        &self,
        state: &mut ClientState,
        form: &ProjectForm,
    ) -> ProjectOutcome {
        if !state.is_authenticated() {
            return ProjectOutcome::Locked;
        }

        let errors = validate_project_form(form);
        if !errors.is_empty() {
            return ProjectOutcome::Invalid(errors);
        }

        let result = self.client.create_project(&form.to_new_project()).await;
        if !result.success {
            return ProjectOutcome::Failed(result);
        }

        self.refresh_projects(state).await;
        ProjectOutcome::Submitted(result)
    }

    fn persist(&self, state: &ClientState) {
        let Some(path) = &self.state_file else {
            return;
        };
        if let Err(e) = state.save(path) {
            tracing::warn!(path = %path.display(), error = %e, "Failed to persist client state");
        }
    }
}
