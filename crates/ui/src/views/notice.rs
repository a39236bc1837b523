use dioxus::prelude::*;

use crate::vm::NoticeVm;

#[component]
pub fn NoticeBanner(notice: NoticeVm) -> Element {
    rsx! {
        div { class: "{notice.class}", role: "status", "{notice.message}" }
    }
}
