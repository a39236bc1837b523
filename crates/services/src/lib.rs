#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod config;
pub mod error;
pub mod exam_context;
pub mod exam_selector;
pub mod login_service;
pub mod notice;
pub mod processing;

pub use marks_core::Clock;

pub use api::{AuthSession, Credentials, ExamApi, HttpExamApi};
pub use app_services::AppServices;
pub use config::{API_BASE_URL_ENV, ApiConfig, NOT_SET};
pub use error::{ApiError, AppServicesError, LoginError, ProcessingError};
pub use exam_context::{ExamContextStore, SELECTED_EXAM_KEY};
pub use exam_selector::{ExamSelector, SelectorState};
pub use login_service::LoginService;
pub use notice::{Notice, NoticeKind};
pub use processing::{ProcessOutcome, ProcessPhase, ProcessingTrigger};
