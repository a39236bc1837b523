use dioxus::prelude::*;
use services::{Credentials, LoginError, Notice};

use crate::context::AppContext;
use crate::views::NoticeBanner;
use crate::vm::NoticeVm;

fn login_notice(result: &Result<String, LoginError>) -> NoticeVm {
    match result {
        Ok(username) => Notice::success(format!("Signed in as {username}.")).into(),
        Err(LoginError::MissingCredentials) => {
            Notice::blocking("Enter both username and password.").into()
        }
        Err(err) => Notice::error(format!("Login failed: {err}")).into(),
    }
}

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let mut notice = use_signal(|| None::<NoticeVm>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *pending.read() {
            return;
        }
        let login = ctx.login();
        let credentials = Credentials::new(username.read().clone(), password.read().clone());
        spawn(async move {
            pending.set(true);
            let user = credentials.username.trim().to_owned();
            let result = login.login(credentials).await.map(|_| user);
            if result.is_ok() {
                password.set(String::new());
            }
            notice.set(Some(login_notice(&result)));
            pending.set(false);
        });
    };

    rsx! {
        div { class: "page",
            h2 { "Sign in" }
            form { onsubmit: on_submit,
                label { r#for: "username", "Username" }
                input {
                    id: "username",
                    r#type: "text",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button { class: "btn", r#type: "submit", disabled: *pending.read(), "Sign in" }
            }
            if let Some(notice) = notice.read().clone() {
                NoticeBanner { notice }
            }
        }
    }
}
