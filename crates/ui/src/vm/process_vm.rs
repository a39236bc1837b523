use services::{Notice, ProcessingTrigger};

use crate::vm::NoticeVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessViewState {
    Idle,
    Running,
    Done { notice: NoticeVm, output: String },
    Failed(NoticeVm),
}

impl ProcessViewState {
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    #[must_use]
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Done { output, .. } => Some(output),
            _ => None,
        }
    }

    #[must_use]
    pub fn notice(&self) -> Option<&NoticeVm> {
        match self {
            Self::Done { notice, .. } | Self::Failed(notice) => Some(notice),
            Self::Idle | Self::Running => None,
        }
    }
}

/// Run the trigger once and fold the result into view state. The trigger's
/// phase is acknowledged once the outcome is captured here.
pub async fn run_processing(trigger: &ProcessingTrigger) -> ProcessViewState {
    let state = match trigger.run().await {
        Ok(outcome) => ProcessViewState::Done {
            notice: NoticeVm::from(Notice::success(format!(
                "Processed exam {}.",
                outcome.exam_id()
            ))),
            output: outcome.pretty(),
        },
        Err(err) => ProcessViewState::Failed(NoticeVm::from(err.notice())),
    };
    trigger.acknowledge();
    state
}
