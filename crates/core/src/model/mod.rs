mod dates;
mod exam;
mod ids;

pub use dates::{ParseExamDateError, parse_exam_date};
pub use exam::{Exam, ExamDraft, ExamError};
pub use ids::ExamId;
