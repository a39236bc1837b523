use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::{AppContext, use_exam_context_provider};
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_exam_context_provider(ctx.exam_store());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Marks Desk" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
