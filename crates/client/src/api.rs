//! HTTP client for the store's two resource endpoints.
//!
//! Every outcome is normalized at this boundary. Writes always yield a
//! [`SubmissionResult`]; reads always yield a (possibly empty) list. Causes
//! are logged with `tracing`, never handed to the caller raw.
//!
//! No retries, no backoff, no timeout beyond reqwest's defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use showcase_core::feedback::NewFeedback;
use showcase_core::project::NewProject;

use crate::models::{Feedback, Project};

/// Uniform result of a create call, consumed by the view for toasts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    /// Server-assigned id, when the store returned one.
    pub id: Option<String>,
}

impl SubmissionResult {
    fn succeeded(message: String, id: Option<String>) -> Self {
        Self {
            success: true,
            message,
            id,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            success: false,
            message,
            id: None,
        }
    }
}

/// Errors from a single request. Internal: the public methods map these to
/// results or empty lists.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network, DNS, TLS or body-decoding failure.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-2xx status.
    #[error("Store returned {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Api {
        status: u16,
        message: Option<String>,
    },
}

/// `{ success, message, data: { id } }` as written by the store. Every part
/// is optional so partial bodies still decode.
#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<CreatedData>,
}

#[derive(Debug, Deserialize)]
struct CreatedData {
    #[serde(alias = "_id")]
    id: String,
}

/// Per-resource path and user-facing messages.
struct Resource {
    path: &'static str,
    submitted: &'static str,
    submit_failed: &'static str,
}

const FEEDBACK: Resource = Resource {
    path: "feedback",
    submitted: "Feedback submitted successfully.",
    submit_failed: "Failed to submit feedback. Please try again.",
};

const PROJECTS: Resource = Resource {
    path: "projects",
    submitted: "Project submitted successfully.",
    submit_failed: "Failed to submit project. Please try again.",
};

/// Client for one store instance.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    client: reqwest::Client,
    api_url: String,
}

impl SubmissionClient {
    /// * `api_url` - Base URL, e.g. `http://localhost:3000`. A trailing
    ///   slash is ignored.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    pub async fn create_feedback(&self, input: &NewFeedback) -> SubmissionResult {
        self.create(&FEEDBACK, input).await
    }

    /// Full feedback collection, newest first. Empty on any failure.
    pub async fn list_feedback(&self) -> Vec<Feedback> {
        self.list(&FEEDBACK).await
    }

    pub async fn create_project(&self, input: &NewProject) -> SubmissionResult {
        self.create(&PROJECTS, input).await
    }

    /// Full project collection, newest first. Empty on any failure.
    pub async fn list_projects(&self) -> Vec<Project> {
        self.list(&PROJECTS).await
    }

    // ---- private helpers ----

    fn url(&self, resource: &Resource) -> String {
        format!("{}/api/{}", self.api_url, resource.path)
    }

    async fn create<T: Serialize>(&self, resource: &Resource, input: &T) -> SubmissionResult {
        match self.post(resource, input).await {
            Ok(envelope) => SubmissionResult::succeeded(
                envelope
                    .message
                    .unwrap_or_else(|| resource.submitted.to_string()),
                envelope.data.map(|d| d.id),
            ),
            Err(ClientError::Api { status, message }) => {
                tracing::warn!(
                    resource = resource.path,
                    status,
                    message = ?message,
                    "Submission rejected by store",
                );
                SubmissionResult::failed(
                    message.unwrap_or_else(|| resource.submit_failed.to_string()),
                )
            }
            Err(err) => {
                tracing::error!(resource = resource.path, error = %err, "Submission failed");
                SubmissionResult::failed(resource.submit_failed.to_string())
            }
        }
    }

    async fn list<T: DeserializeOwned>(&self, resource: &Resource) -> Vec<T> {
        match self.fetch_all(resource).await {
            Ok(items) => items,
            Err(err) => {
                tracing::error!(resource = resource.path, error = %err, "Failed to fetch collection");
                Vec::new()
            }
        }
    }

    async fn post<T: Serialize>(
        &self,
        resource: &Resource,
        input: &T,
    ) -> Result<Envelope, ClientError> {
        let response = self
            .client
            .post(self.url(resource))
            .json(input)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_all<T: DeserializeOwned>(
        &self,
        resource: &Resource,
    ) -> Result<Vec<T>, ClientError> {
        let response = self.client.get(self.url(resource)).send().await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Pass a 2xx response through; otherwise turn it into
    /// [`ClientError::Api`] carrying the store's `message`, if any.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<Envelope>()
            .await
            .ok()
            .and_then(|e| e.message);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let client = SubmissionClient::new("http://localhost:3000/");
        assert_eq!(client.url(&FEEDBACK), "http://localhost:3000/api/feedback");
        assert_eq!(client.url(&PROJECTS), "http://localhost:3000/api/projects");
    }

    #[test]
    fn envelope_tolerates_missing_parts() {
        let env: Envelope = serde_json::from_str("{}").unwrap();
        assert!(env.message.is_none());
        assert!(env.data.is_none());

        let env: Envelope =
            serde_json::from_str(r#"{"success":true,"message":"ok","data":{"_id":"abc"}}"#)
                .unwrap();
        assert_eq!(env.data.unwrap().id, "abc");
    }

    #[test]
    fn api_error_display_without_message() {
        let err = ClientError::Api {
            status: 502,
            message: None,
        };
        assert_eq!(err.to_string(), "Store returned 502: <no message>");
    }
}
