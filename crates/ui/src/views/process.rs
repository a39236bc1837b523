use dioxus::prelude::*;
use services::ProcessingError;

use crate::context::{AppContext, use_exam_context};
use crate::views::NoticeBanner;
use crate::vm::{NoticeVm, ProcessViewState, SelectedExamVm, run_processing};

#[component]
pub fn ProcessView() -> Element {
    let ctx = use_context::<AppContext>();
    let exam_ctx = use_exam_context();
    let mut state = use_signal(|| ProcessViewState::Idle);

    let selected = SelectedExamVm::from_selection(exam_ctx.selected().as_ref());
    // A run started before this page was (re)mounted still holds the trigger.
    let busy = state.read().is_running() || ctx.processing().is_busy();

    let on_process = move |_| {
        let trigger = ctx.processing();
        if state.peek().is_running() || trigger.is_busy() {
            return;
        }
        state.set(ProcessViewState::Running);
        spawn(async move {
            let next = run_processing(&trigger).await;
            state.set(next);
        });
    };

    let current = state.read().clone();
    let show_guard = selected.is_none() && current.notice().is_none();

    rsx! {
        div { class: "page",
            h2 { "Process subject data" }

            match selected {
                Some(exam) => rsx! {
                    p { class: "exam-active", "Exam: {exam.label}" }
                    p { "{exam.dates}" }
                },
                None => rsx! {
                    if show_guard {
                        NoticeBanner { notice: NoticeVm::from(ProcessingError::NoSelection.notice()) }
                    }
                },
            }

            button {
                class: "btn",
                r#type: "button",
                disabled: busy,
                onclick: on_process,
                if busy { "Processing..." } else { "Process subject data" }
            }

            if let Some(notice) = current.notice() {
                NoticeBanner { notice: notice.clone() }
            }
            if let Some(output) = current.output() {
                pre { class: "process-output", "{output}" }
            }
        }
    }
}
