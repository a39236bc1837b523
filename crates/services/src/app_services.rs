use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::api::{ExamApi, HttpExamApi};
use crate::config::ApiConfig;
use crate::error::AppServicesError;
use crate::exam_context::ExamContextStore;
use crate::exam_selector::ExamSelector;
use crate::login_service::LoginService;
use crate::processing::ProcessingTrigger;

/// Assembles app-facing services around one shared exam context.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    config: ApiConfig,
    exam_context: Arc<ExamContextStore>,
    exam_selector: Arc<ExamSelector>,
    processing: Arc<ProcessingTrigger>,
    login: Arc<LoginService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the HTTP backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        config: ApiConfig,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let api: Arc<dyn ExamApi> = Arc::new(HttpExamApi::new(config.clone()));
        Ok(Self::with_storage(&storage, api, config, clock).await)
    }

    /// Build services on top of existing storage, restoring the persisted
    /// exam selection.
    pub async fn with_storage(
        storage: &Storage,
        api: Arc<dyn ExamApi>,
        config: ApiConfig,
        clock: Clock,
    ) -> Self {
        let exam_context = Arc::new(ExamContextStore::load(Arc::clone(&storage.slots)).await);
        Self::assemble(exam_context, api, config, clock)
    }

    /// Build services whose exam selection lives only in memory.
    #[must_use]
    pub fn detached(api: Arc<dyn ExamApi>, config: ApiConfig, clock: Clock) -> Self {
        Self::assemble(Arc::new(ExamContextStore::detached()), api, config, clock)
    }

    fn assemble(
        exam_context: Arc<ExamContextStore>,
        api: Arc<dyn ExamApi>,
        config: ApiConfig,
        clock: Clock,
    ) -> Self {
        let exam_selector = Arc::new(ExamSelector::new(
            Arc::clone(&api),
            Arc::clone(&exam_context),
        ));
        let processing = Arc::new(ProcessingTrigger::new(
            Arc::clone(&api),
            Arc::clone(&exam_context),
        ));
        let login = Arc::new(LoginService::new(api));

        Self {
            clock,
            config,
            exam_context,
            exam_selector,
            processing,
            login,
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub fn exam_context(&self) -> Arc<ExamContextStore> {
        Arc::clone(&self.exam_context)
    }

    #[must_use]
    pub fn exam_selector(&self) -> Arc<ExamSelector> {
        Arc::clone(&self.exam_selector)
    }

    #[must_use]
    pub fn processing(&self) -> Arc<ProcessingTrigger> {
        Arc::clone(&self.processing)
    }

    #[must_use]
    pub fn login(&self) -> Arc<LoginService> {
        Arc::clone(&self.login)
    }
}
