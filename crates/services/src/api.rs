use std::fmt;

use async_trait::async_trait;
use marks_core::model::{ExamDraft, ExamId};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Username and password for the login form.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token pair returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// The backend operations this client relies on.
///
/// Every call is a single request/response round trip; implementations must
/// not retry.
#[async_trait]
pub trait ExamApi: Send + Sync {
    /// Fetch every exam, in backend order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body is not an exam list.
    async fn list_exams(&self) -> Result<Vec<ExamDraft>, ApiError>;

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or is rejected.
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError>;

    /// Ask the backend to process subject data (grades, rankings) for an exam.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body is not JSON.
    async fn process_subject_data(&self, exam_id: &ExamId) -> Result<Value, ApiError>;
}

/// `ExamApi` over HTTP.
#[derive(Clone)]
pub struct HttpExamApi {
    client: Client,
    config: ApiConfig,
}

impl HttpExamApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Join path segments onto the base URL, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self
            .config
            .base_url()
            .cloned()
            .ok_or(ApiError::NotConfigured)?;
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(url.to_string()));
        }
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl(String::new()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Decode each list entry on its own; entries of the wrong shape are logged
/// and skipped.
fn decode_exam_entries(entries: Vec<Value>) -> Vec<ExamDraft> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            serde_json::from_value::<ExamDraft>(entry)
                .inspect_err(|err| warn!(index, error = %err, "skipping malformed exam entry"))
                .ok()
        })
        .collect()
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::HttpStatus(status))
    }
}

#[async_trait]
impl ExamApi for HttpExamApi {
    async fn list_exams(&self) -> Result<Vec<ExamDraft>, ApiError> {
        let url = self.endpoint(&["exams"])?;
        debug!(%url, "fetching exam list");

        let response = self.client.get(url).send().await?;
        let entries = ensure_success(response)?.json::<Vec<Value>>().await?;
        Ok(decode_exam_entries(entries))
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        let url = self.endpoint(&["login"])?;
        debug!(%url, username = %credentials.username, "logging in");

        let response = self.client.post(url).form(credentials).send().await?;
        let session = ensure_success(response)?.json::<AuthSession>().await?;
        Ok(session)
    }

    async fn process_subject_data(&self, exam_id: &ExamId) -> Result<Value, ApiError> {
        let url = self.endpoint(&["exams", exam_id.as_str(), "process-subject-data"])?;
        debug!(%url, "triggering subject data processing");

        let response = self.client.post(url).send().await?;
        let payload = ensure_success(response)?.json::<Value>().await?;
        Ok(payload)
    }
}
