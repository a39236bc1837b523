use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use marks_core::model::ExamId;
use serde_json::Value;
use tracing::{info, warn};

use crate::api::ExamApi;
use crate::error::ProcessingError;
use crate::exam_context::ExamContextStore;
use crate::notice::Notice;

/// `Idle → Pending → {Succeeded, Failed}`; a terminal phase goes back to
/// `Idle` once the caller has taken the outcome (see
/// [`ProcessingTrigger::acknowledge`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessPhase {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// The backend's answer for one processing run, kept verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessOutcome {
    exam_id: ExamId,
    payload: Value,
}

impl ProcessOutcome {
    #[must_use]
    pub fn exam_id(&self) -> &ExamId {
        &self.exam_id
    }

    #[must_use]
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Payload rendered for display.
    #[must_use]
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.payload).unwrap_or_else(|_| self.payload.to_string())
    }
}

impl ProcessingError {
    /// How the failure is shown to the user.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            ProcessingError::NoSelection => Notice::blocking("Please select an exam first."),
            other => Notice::error(format!("Processing failed: {other}")),
        }
    }
}

/// Triggers backend processing for the selected exam.
///
/// One run at a time: a second call while a request is outstanding is
/// rejected, not queued.
pub struct ProcessingTrigger {
    api: Arc<dyn ExamApi>,
    store: Arc<ExamContextStore>,
    busy: AtomicBool,
    phase: Mutex<ProcessPhase>,
}

/// Holds the busy flag for the duration of one run.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ProcessingTrigger {
    #[must_use]
    pub fn new(api: Arc<dyn ExamApi>, store: Arc<ExamContextStore>) -> Self {
        Self {
            api,
            store,
            busy: AtomicBool::new(false),
            phase: Mutex::new(ProcessPhase::Idle),
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn phase(&self) -> ProcessPhase {
        *self.lock()
    }

    /// Mark the last outcome as shown. Moves `Succeeded`/`Failed` back to
    /// `Idle`; a run in flight is left alone.
    pub fn acknowledge(&self) {
        let mut phase = self.lock();
        if matches!(*phase, ProcessPhase::Succeeded | ProcessPhase::Failed) {
            *phase = ProcessPhase::Idle;
        }
    }

    /// Send exactly one processing request for the selected exam and return
    /// the response as-is.
    ///
    /// # Errors
    ///
    /// Returns `ProcessingError::NoSelection` (without any request) when no
    /// exam is selected, `ProcessingError::Busy` while another run is in
    /// flight, and `ProcessingError::Api` when the backend call fails.
    pub async fn run(&self) -> Result<ProcessOutcome, ProcessingError> {
        let Some(exam) = self.store.selected() else {
            return Err(ProcessingError::NoSelection);
        };
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            return Err(ProcessingError::Busy);
        };

        *self.lock() = ProcessPhase::Pending;
        let result = self.api.process_subject_data(exam.id()).await;

        match result {
            Ok(payload) => {
                info!(exam_id = %exam.id(), "subject data processed");
                *self.lock() = ProcessPhase::Succeeded;
                Ok(ProcessOutcome {
                    exam_id: exam.id().clone(),
                    payload,
                })
            }
            Err(err) => {
                warn!(exam_id = %exam.id(), error = %err, "subject data processing failed");
                *self.lock() = ProcessPhase::Failed;
                Err(err.into())
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, ProcessPhase> {
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
