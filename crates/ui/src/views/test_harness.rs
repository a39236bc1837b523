use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use marks_core::model::{Exam, ExamDraft, ExamId};
use marks_core::time::fixed_clock;
use serde_json::{Value, json};
use services::{ApiConfig, ApiError, AppServices, AuthSession, Credentials, ExamApi};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context, use_exam_context_provider};
use crate::views::{ExamSelectorView, HomeView, LoginView, ProcessView};

pub fn draft(id: &str, name: &str) -> ExamDraft {
    ExamDraft {
        id: ExamId::new(id),
        name: name.to_string(),
        level: "Form 4".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
    }
}

pub fn exam(id: &str, name: &str) -> Exam {
    draft(id, name).validate().expect("valid exam")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListMode {
    Ready,
    Failing,
    Pending,
}

pub struct TestApi {
    exams: Vec<ExamDraft>,
    mode: ListMode,
    hold_processing: bool,
}

#[async_trait]
impl ExamApi for TestApi {
    async fn list_exams(&self) -> Result<Vec<ExamDraft>, ApiError> {
        match self.mode {
            ListMode::Ready => Ok(self.exams.clone()),
            ListMode::Failing => Err(ApiError::NotConfigured),
            ListMode::Pending => std::future::pending().await,
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        Ok(AuthSession {
            access_token: format!("token-{}", credentials.username),
            token_type: "bearer".to_string(),
        })
    }

    async fn process_subject_data(&self, exam_id: &ExamId) -> Result<Value, ApiError> {
        if self.hold_processing {
            std::future::pending::<()>().await;
        }
        Ok(json!({ "exam_id": exam_id.as_str() }))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Login,
    Exams,
    Process,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
    with_exam_provider: bool,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if props.with_exam_provider {
        use_exam_context_provider(ctx.exam_store());
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Exams => rsx! { ExamSelectorView {} },
        ViewKind::Process => rsx! { ProcessView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: Arc<AppServices>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub struct HarnessBuilder {
    view: ViewKind,
    exams: Vec<ExamDraft>,
    mode: ListMode,
    config: ApiConfig,
    selected: Option<Exam>,
    with_exam_provider: bool,
    hold_processing: bool,
}

impl HarnessBuilder {
    pub fn new(view: ViewKind) -> Self {
        Self {
            view,
            exams: Vec::new(),
            mode: ListMode::Ready,
            config: ApiConfig::default(),
            selected: None,
            with_exam_provider: true,
            hold_processing: false,
        }
    }

    pub fn exams(mut self, exams: Vec<ExamDraft>) -> Self {
        self.exams = exams;
        self
    }

    pub fn list_mode(mut self, mode: ListMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn base_url(mut self, raw: &str) -> Self {
        self.config = ApiConfig::from_raw(Some(raw));
        self
    }

    pub fn selected(mut self, exam: Exam) -> Self {
        self.selected = Some(exam);
        self
    }

    /// Processing requests never complete.
    pub fn hold_processing(mut self) -> Self {
        self.hold_processing = true;
        self
    }

    pub fn without_exam_provider(mut self) -> Self {
        self.with_exam_provider = false;
        self
    }

    pub async fn build(self) -> ViewHarness {
        let storage = Storage::in_memory();
        let api: Arc<dyn ExamApi> = Arc::new(TestApi {
            exams: self.exams,
            mode: self.mode,
            hold_processing: self.hold_processing,
        });
        let services =
            Arc::new(AppServices::with_storage(&storage, api, self.config, fixed_clock()).await);
        if let Some(exam) = self.selected {
            services.exam_context().set_selected(Some(exam)).await;
        }

        let dom = VirtualDom::new_with_props(
            ViewRouterHarness,
            ViewHarnessProps {
                app: Arc::clone(&services),
                view: self.view,
                with_exam_provider: self.with_exam_provider,
            },
        );

        ViewHarness { dom, services }
    }
}
