#![allow(non_snake_case)]

pub mod app;
pub mod context;
pub mod routes;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{
    AppContext, ContextError, ExamContext, UiApp, build_app_context, try_exam_context,
    use_exam_context, use_exam_context_provider,
};
