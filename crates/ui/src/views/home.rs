use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, try_exam_context};
use crate::routes::Route;
use crate::vm::SelectedExamVm;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let signed_in = ctx.login().is_signed_in();

    // Home stays usable when mounted outside the exam provider.
    let exam_ctx = use_hook(try_exam_context);
    let selection = match &exam_ctx {
        Ok(exam_ctx) => Ok(SelectedExamVm::from_selection(exam_ctx.selected().as_ref())),
        Err(err) => Err(err.to_string()),
    };

    rsx! {
        div { class: "page",
            h2 { "Home" }
            p { class: "api-base-url", "API base URL: {ctx.api_base_url()}" }
            p {
                if signed_in { "Signed in" } else { "Not signed in" }
            }

            match selection {
                Ok(Some(exam)) => rsx! {
                    p { class: "exam-active", "Current exam: {exam.label}" }
                    p { "{exam.dates}" }
                },
                Ok(None) => rsx! {
                    p { "No exam selected." }
                    Link { to: Route::Exams {}, "Choose an exam" }
                },
                Err(message) => rsx! {
                    p { class: "notice notice--error", "{message}" }
                },
            }
        }
    }
}
