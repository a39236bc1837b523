use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

use crate::api::{AuthSession, Credentials, ExamApi};
use crate::error::LoginError;

pub struct LoginService {
    api: Arc<dyn ExamApi>,
    session: Mutex<Option<AuthSession>>,
}

impl LoginService {
    #[must_use]
    pub fn new(api: Arc<dyn ExamApi>) -> Self {
        Self {
            api,
            session: Mutex::new(None),
        }
    }

    /// Post the login form once and remember the returned session.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::MissingCredentials` without a request when either
    /// field is blank, or `LoginError::Api` when the backend rejects or fails.
    pub async fn login(&self, credentials: Credentials) -> Result<AuthSession, LoginError> {
        if credentials.username.trim().is_empty() || credentials.password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        let session = self.api.login(&credentials).await?;
        info!(username = %credentials.username, "logged in");
        *self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(session)
    }

    #[must_use]
    pub fn session(&self) -> Option<AuthSession> {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session().is_some()
    }
}
