#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use marks_core::model::{Exam, ExamDraft, ExamId};
use serde_json::Value;
use services::{ApiError, AuthSession, Credentials, ExamApi};
use tokio::sync::Notify;

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

/// Lets a test hold a processing request open.
#[derive(Default)]
pub struct Gate {
    pub started: Notify,
    pub release: Notify,
}

/// Scriptable `ExamApi` that records every call.
pub struct FakeExamApi {
    exams: Vec<ExamDraft>,
    fail_list: bool,
    payload: Value,
    fail_process: bool,
    gate: Option<Arc<Gate>>,
    pub list_calls: AtomicUsize,
    pub login_calls: AtomicUsize,
    pub processed: Mutex<Vec<ExamId>>,
}

impl FakeExamApi {
    pub fn new(exams: Vec<ExamDraft>) -> Self {
        Self {
            exams,
            fail_list: false,
            payload: Value::Null,
            fail_process: false,
            gate: None,
            list_calls: AtomicUsize::new(0),
            login_calls: AtomicUsize::new(0),
            processed: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_list() -> Self {
        Self {
            fail_list: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    pub fn failing_process(mut self) -> Self {
        self.fail_process = true;
        self
    }

    pub fn with_gate(mut self, gate: Arc<Gate>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn processed_ids(&self) -> Vec<ExamId> {
        self.processed.lock().unwrap().clone()
    }
}

fn server_error() -> ApiError {
    ApiError::HttpStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
}

#[async_trait]
impl ExamApi for FakeExamApi {
    async fn list_exams(&self) -> Result<Vec<ExamDraft>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list {
            return Err(server_error());
        }
        Ok(self.exams.clone())
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        if credentials.password != "secret" {
            return Err(ApiError::HttpStatus(reqwest::StatusCode::UNAUTHORIZED));
        }
        Ok(AuthSession {
            access_token: format!("token-{}", credentials.username),
            token_type: "bearer".to_string(),
        })
    }

    async fn process_subject_data(&self, exam_id: &ExamId) -> Result<Value, ApiError> {
        self.processed.lock().unwrap().push(exam_id.clone());
        if let Some(gate) = &self.gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }
        if self.fail_process {
            return Err(server_error());
        }
        Ok(self.payload.clone())
    }
}
