use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ExamSelectorView, HomeView, LoginView, ProcessView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/login", LoginView)] Login {},
        #[route("/exams", ExamSelectorView)] Exams {},
        #[route("/process", ProcessView)] Process {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Marks Desk" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Login {}, "Sign in" } }
                li { Link { to: Route::Exams {}, "Exams" } }
                li { Link { to: Route::Process {}, "Process" } }
            }
        }
    }
}
