mod exam_vm;
mod notice_vm;
mod process_vm;
mod time_fmt;

pub use exam_vm::{ExamOptionVm, SelectedExamVm, map_exam_options};
pub use notice_vm::NoticeVm;
pub use process_vm::{ProcessViewState, run_processing};
pub use time_fmt::{format_date, format_date_range};
