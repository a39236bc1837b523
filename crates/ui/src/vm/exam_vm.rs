use chrono::NaiveDate;
use marks_core::model::{Exam, ExamId};

use crate::vm::time_fmt::format_date_range;

/// UI-ready representation of an exam for selection controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamOptionVm {
    pub id: ExamId,
    pub label: String,
    pub dates: String,
    pub is_active: bool,
}

impl ExamOptionVm {
    #[must_use]
    pub fn from_exam(exam: &Exam, today: NaiveDate) -> Self {
        Self {
            id: exam.id().clone(),
            label: exam.label(),
            dates: format_date_range(exam.start_date(), exam.end_date()),
            is_active: exam.is_active_on(today),
        }
    }
}

/// Convert exams into selection-friendly view models, keeping their order.
#[must_use]
pub fn map_exam_options(exams: &[Exam], today: NaiveDate) -> Vec<ExamOptionVm> {
    exams
        .iter()
        .map(|exam| ExamOptionVm::from_exam(exam, today))
        .collect()
}

/// Summary of the current selection shown in page headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedExamVm {
    pub id: String,
    pub label: String,
    pub dates: String,
}

impl SelectedExamVm {
    #[must_use]
    pub fn from_selection(selected: Option<&Exam>) -> Option<Self> {
        selected.map(|exam| Self {
            id: exam.id().to_string(),
            label: exam.label(),
            dates: format_date_range(exam.start_date(), exam.end_date()),
        })
    }
}
