use dioxus::prelude::*;
use marks_core::model::ExamId;
use services::SelectorState;

use crate::context::{AppContext, use_exam_context};
use crate::views::{NoticeBanner, ViewError, ViewState, view_state_from_resource};
use crate::vm::{ExamOptionVm, NoticeVm, map_exam_options};

#[component]
pub fn ExamSelectorView() -> Element {
    let ctx = use_context::<AppContext>();
    let exam_ctx = use_exam_context();
    let selector = ctx.exam_selector();
    let today = ctx.clock().today();

    let resource = use_resource(move || {
        let selector = selector.clone();
        async move {
            match selector.load().await {
                SelectorState::Ready(exams) => Ok(map_exam_options(&exams, today)),
                SelectorState::Failed(notice) => Err(ViewError::Notice(NoticeVm::from(notice))),
                SelectorState::Idle | SelectorState::Loading => Err(ViewError::Unknown),
            }
        }
    });

    let state = view_state_from_resource(resource);
    let selected = exam_ctx.selected();
    let selected_id = selected
        .as_ref()
        .map(|exam| exam.id().to_string())
        .unwrap_or_default();

    let on_change = {
        let ctx = ctx.clone();
        let exam_ctx = exam_ctx.clone();
        move |evt: FormEvent| {
            let value = evt.value();
            let selector = ctx.exam_selector();
            let exam_ctx = exam_ctx.clone();
            spawn(async move {
                if value.is_empty() {
                    exam_ctx.clear().await;
                } else if selector.select(&ExamId::new(value)).await {
                    exam_ctx.sync();
                }
            });
        }
    };

    let on_clear = {
        let exam_ctx = exam_ctx.clone();
        move |_| {
            let exam_ctx = exam_ctx.clone();
            spawn(async move {
                exam_ctx.clear().await;
            });
        }
    };

    rsx! {
        div { class: "page",
            h2 { "Exams" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading exams..." }
                },
                ViewState::Ready(options) => rsx! {
                    if options.is_empty() {
                        p { "No exams available." }
                    } else {
                        label { r#for: "exam-select", "Exam" }
                        select {
                            id: "exam-select",
                            class: "exam-select",
                            onchange: on_change,
                            option { value: "", "Select an exam" }
                            for exam in options {
                                ExamOption { exam, selected_id: selected_id.clone() }
                            }
                        }
                    }
                },
                ViewState::Error(ViewError::Notice(notice)) => rsx! {
                    NoticeBanner { notice }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "notice notice--error", "{err.message()}" }
                },
            }

            if let Some(exam) = selected {
                div { class: "exam-active",
                    p { "Selected: {exam.label()}" }
                    button { class: "btn", r#type: "button", onclick: on_clear, "Clear selection" }
                }
            }
        }
    }
}

#[component]
fn ExamOption(exam: ExamOptionVm, selected_id: String) -> Element {
    let selected = exam.id.as_str() == selected_id;
    let suffix = if exam.is_active { " · running" } else { "" };
    rsx! {
        option { value: "{exam.id}", selected, "{exam.label} ({exam.dates}){suffix}" }
    }
}
