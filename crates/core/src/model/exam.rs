use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::dates::exam_date;
use crate::model::ids::ExamId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamError {
    #[error("exam id cannot be empty")]
    EmptyId,

    #[error("exam name cannot be empty")]
    EmptyName,

    #[error("exam {id} ends ({end}) before it starts ({start})")]
    InvalidDateRange {
        id: ExamId,
        start: NaiveDate,
        end: NaiveDate,
    },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Exam as it arrives from the backend, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamDraft {
    pub id: ExamId,
    pub name: String,
    #[serde(default)]
    pub level: String,
    #[serde(with = "exam_date")]
    pub start_date: NaiveDate,
    #[serde(with = "exam_date")]
    pub end_date: NaiveDate,
}

impl ExamDraft {
    /// Check the draft and turn it into an [`Exam`].
    ///
    /// Names and levels are trimmed; the id is kept exactly as sent.
    ///
    /// # Errors
    ///
    /// Returns `ExamError` if the id or name is blank, or if the exam ends
    /// before it starts.
    pub fn validate(self) -> Result<Exam, ExamError> {
        if self.id.is_blank() {
            return Err(ExamError::EmptyId);
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ExamError::EmptyName);
        }
        if self.end_date < self.start_date {
            return Err(ExamError::InvalidDateRange {
                id: self.id,
                start: self.start_date,
                end: self.end_date,
            });
        }

        Ok(Exam {
            id: self.id,
            name: name.to_owned(),
            level: self.level.trim().to_owned(),
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

//
// ─── EXAM ──────────────────────────────────────────────────────────────────────
//

/// An examination cycle owned by the backend.
///
/// Immutable once built. The serialized form matches the backend's JSON and
/// is also what gets persisted for the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exam {
    id: ExamId,
    name: String,
    #[serde(default)]
    level: String,
    #[serde(with = "exam_date")]
    start_date: NaiveDate,
    #[serde(with = "exam_date")]
    end_date: NaiveDate,
}

impl Exam {
    /// Rehydrate an exam without validation, e.g. from persisted state.
    #[must_use]
    pub fn from_persisted(draft: ExamDraft) -> Self {
        Self {
            id: draft.id,
            name: draft.name,
            level: draft.level,
            start_date: draft.start_date,
            end_date: draft.end_date,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ExamId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Label used in selection lists, e.g. `Term 1 Finals (Form 4)`.
    #[must_use]
    pub fn label(&self) -> String {
        if self.level.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.level)
        }
    }

    /// Whether `date` falls inside the exam window (inclusive on both ends).
    #[must_use]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
