use std::sync::Arc;

use dioxus::prelude::*;
use marks_core::Clock;
use marks_core::model::Exam;
use services::{AppServices, ExamContextStore, ExamSelector, LoginService, ProcessingTrigger};
use thiserror::Error;

pub trait UiApp: Send + Sync {
    fn api_base_url(&self) -> String;
    fn clock(&self) -> Clock;

    fn exam_context(&self) -> Arc<ExamContextStore>;
    fn exam_selector(&self) -> Arc<ExamSelector>;
    fn processing(&self) -> Arc<ProcessingTrigger>;
    fn login(&self) -> Arc<LoginService>;
}

impl UiApp for AppServices {
    fn api_base_url(&self) -> String {
        self.config().display_base_url()
    }

    fn clock(&self) -> Clock {
        AppServices::clock(self)
    }

    fn exam_context(&self) -> Arc<ExamContextStore> {
        AppServices::exam_context(self)
    }

    fn exam_selector(&self) -> Arc<ExamSelector> {
        AppServices::exam_selector(self)
    }

    fn processing(&self) -> Arc<ProcessingTrigger> {
        AppServices::processing(self)
    }

    fn login(&self) -> Arc<LoginService> {
        AppServices::login(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    api_base_url: String,
    clock: Clock,

    exam_context: Arc<ExamContextStore>,
    exam_selector: Arc<ExamSelector>,
    processing: Arc<ProcessingTrigger>,
    login: Arc<LoginService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            api_base_url: app.api_base_url(),
            clock: app.clock(),
            exam_context: app.exam_context(),
            exam_selector: app.exam_selector(),
            processing: app.processing(),
            login: app.login(),
        }
    }

    /// Backend base URL, or "Not set".
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn exam_store(&self) -> Arc<ExamContextStore> {
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("ExamContext must be used within its provider")]
    MissingProvider,
}

/// Reactive handle on the selected exam.
///
/// Wraps the shared `ExamContextStore` with a signal so views re-render when
/// the selection changes.
#[derive(Clone)]
pub struct ExamContext {
    store: Arc<ExamContextStore>,
    selected: Signal<Option<Exam>>,
}

impl PartialEq for ExamContext {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store) && self.selected == other.selected
    }
}

impl ExamContext {
    /// Must be called inside a component scope (the signal is owned by it).
    #[must_use]
    pub fn new(store: Arc<ExamContextStore>) -> Self {
        let selected = Signal::new(store.selected());
        Self { store, selected }
    }

    #[must_use]
    pub fn selected(&self) -> Option<Exam> {
        self.selected.read().clone()
    }

    pub async fn set_selected(&self, exam: Option<Exam>) {
        self.store.set_selected(exam).await;
        self.sync();
    }

    pub async fn clear(&self) {
        self.set_selected(None).await;
    }

    /// Pull the store's value into the signal after the store was changed
    /// by a service (e.g. `ExamSelector::select`).
    pub fn sync(&self) {
        let mut selected = self.selected;
        selected.set(self.store.selected());
    }
}

/// Install the exam context for every descendant.
pub fn use_exam_context_provider(store: Arc<ExamContextStore>) -> ExamContext {
    use_context_provider(move || ExamContext::new(store))
}

/// Look up the exam context from the current scope.
///
/// # Errors
///
/// Returns `ContextError::MissingProvider` when no ancestor installed it.
pub fn try_exam_context() -> Result<ExamContext, ContextError> {
    try_consume_context::<ExamContext>().ok_or(ContextError::MissingProvider)
}

/// Hook form of [`try_exam_context`].
///
/// # Panics
///
/// Panics when used outside the provider; that is a wiring bug, not a
/// runtime condition.
pub fn use_exam_context() -> ExamContext {
    match use_hook(try_exam_context) {
        Ok(ctx) => ctx,
        Err(err) => panic!("{err}"),
    }
}
