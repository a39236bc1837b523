//! The currently selected exam, mirrored into a key-value slot.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use marks_core::model::Exam;
use storage::repository::KeyValueStore;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, warn};

/// Slot holding the JSON-encoded selected exam.
pub const SELECTED_EXAM_KEY: &str = "selectedExam";

/// Holds at most one selected exam and keeps the persisted slot equal to it.
///
/// Persistence is best-effort: the in-memory value always reflects the last
/// mutation, and storage failures are logged rather than returned. Without a
/// backing store (see [`ExamContextStore::detached`]) every storage step is
/// skipped.
///
/// Mutations are serialized: each one updates memory and finishes its storage
/// step before the next starts, so the slot ends up matching the last call.
pub struct ExamContextStore {
    selected: Mutex<Option<Exam>>,
    slots: Option<Arc<dyn KeyValueStore>>,
    mutation: AsyncMutex<()>,
}

impl ExamContextStore {
    /// A store with no persistence, e.g. for server-side renders.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            selected: Mutex::new(None),
            slots: None,
            mutation: AsyncMutex::new(()),
        }
    }

    /// Restore the selection from `slots`.
    ///
    /// Unreadable content is logged and deleted, and the store starts empty.
    pub async fn load(slots: Arc<dyn KeyValueStore>) -> Self {
        let selected = match slots.read(SELECTED_EXAM_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Exam>(&raw) {
                Ok(exam) => {
                    debug!(exam_id = %exam.id(), "restored exam selection");
                    Some(exam)
                }
                Err(err) => {
                    warn!(error = %err, "discarding unreadable exam selection");
                    if let Err(err) = slots.delete(SELECTED_EXAM_KEY).await {
                        warn!(error = %err, "failed to delete unreadable exam selection");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "failed to read exam selection; starting empty");
                None
            }
        };

        Self {
            selected: Mutex::new(selected),
            slots: Some(slots),
            mutation: AsyncMutex::new(()),
        }
    }

    #[must_use]
    pub fn has_persistence(&self) -> bool {
        self.slots.is_some()
    }

    #[must_use]
    pub fn selected(&self) -> Option<Exam> {
        self.lock().clone()
    }

    /// Replace the selection. `Some` writes the exam to the slot, `None`
    /// deletes the slot. The exam is stored as given, without validation.
    pub async fn set_selected(&self, exam: Option<Exam>) {
        let _mutation = self.mutation.lock().await;
        let encoded = exam.as_ref().map(serde_json::to_string);
        *self.lock() = exam;

        let Some(slots) = self.slots.as_ref() else {
            return;
        };

        let result = match encoded {
            Some(Ok(json)) => slots.write(SELECTED_EXAM_KEY, &json).await,
            Some(Err(err)) => {
                warn!(error = %err, "failed to encode exam selection");
                return;
            }
            None => slots.delete(SELECTED_EXAM_KEY).await,
        };
        if let Err(err) = result {
            warn!(error = %err, "failed to persist exam selection");
        }
    }

    /// Same as `set_selected(None)`.
    pub async fn clear(&self) {
        self.set_selected(None).await;
    }

    fn lock(&self) -> MutexGuard<'_, Option<Exam>> {
        self.selected.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
