use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use marks_core::model::{Exam, ExamId};
use tracing::{info, warn};

use crate::api::ExamApi;
use crate::exam_context::ExamContextStore;
use crate::notice::Notice;

/// Where the exam list currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorState {
    Idle,
    Loading,
    Ready(Vec<Exam>),
    Failed(Notice),
}

/// Fetches the exam list and forwards the user's pick to the context store.
pub struct ExamSelector {
    api: Arc<dyn ExamApi>,
    store: Arc<ExamContextStore>,
    state: Mutex<SelectorState>,
}

impl ExamSelector {
    #[must_use]
    pub fn new(api: Arc<dyn ExamApi>, store: Arc<ExamContextStore>) -> Self {
        Self {
            api,
            store,
            state: Mutex::new(SelectorState::Idle),
        }
    }

    #[must_use]
    pub fn state(&self) -> SelectorState {
        self.lock().clone()
    }

    /// Exams from the last successful fetch, in backend order.
    #[must_use]
    pub fn exams(&self) -> Vec<Exam> {
        match &*self.lock() {
            SelectorState::Ready(exams) => exams.clone(),
            _ => Vec::new(),
        }
    }

    /// Fetch the exam list once. Failures become an error notice and leave
    /// the list empty; nothing is retried.
    ///
    /// Entries that fail validation are skipped with a warning.
    pub async fn load(&self) -> SelectorState {
        *self.lock() = SelectorState::Loading;

        let next = match self.api.list_exams().await {
            Ok(drafts) => {
                let exams: Vec<Exam> = drafts
                    .into_iter()
                    .filter_map(|draft| {
                        draft
                            .validate()
                            .inspect_err(|err| warn!(error = %err, "skipping invalid exam"))
                            .ok()
                    })
                    .collect();
                info!(count = exams.len(), "loaded exams");
                SelectorState::Ready(exams)
            }
            Err(err) => {
                warn!(error = %err, "failed to load exams");
                SelectorState::Failed(Notice::error(format!("Failed to load exams: {err}")))
            }
        };

        *self.lock() = next.clone();
        next
    }

    /// Select the exam with `id` from the last fetched list.
    ///
    /// Returns `false` and leaves the current selection alone when the id is
    /// not in that list.
    pub async fn select(&self, id: &ExamId) -> bool {
        let found = self.exams().into_iter().find(|exam| exam.id() == id);
        match found {
            Some(exam) => {
                self.store.set_selected(Some(exam)).await;
                true
            }
            None => {
                warn!(exam_id = %id, "selected exam is not in the loaded list");
                false
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, SelectorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
