//! Pure description of the backend HTTP contract: request builders with
//! local validation, form encoding, and response parsing. The transport
//! that actually executes an [`ApiRequest`] lives in the UI crate, so all
//! of this is testable without a live backend.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;
use tracing::debug;

use crate::task::Task;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Rejected locally before any request was constructed.
    #[error("{0}")]
    Validation(&'static str),
    /// The request never completed (transport failure).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered, but not with what the contract promises.
    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully described call against the backend, ready for a transport to
/// execute. POST bodies are `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub form: Vec<(&'static str, String)>,
}

impl ApiRequest {
    fn get(path: &'static str) -> Self {
        Self {
            method: Method::Get,
            path,
            form: Vec::new(),
        }
    }

    fn post(path: &'static str, form: Vec<(&'static str, String)>) -> Self {
        Self {
            method: Method::Post,
            path,
            form,
        }
    }

    /// The form-urlencoded request body.
    pub fn form_body(&self) -> String {
        self.form
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

pub fn list_tasks() -> ApiRequest {
    ApiRequest::get("/tasks")
}

/// Empty titles are rejected here, before a request exists at all.
pub fn add_task(title: &str, due: &str, tags: &str) -> Result<ApiRequest, GatewayError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(GatewayError::Validation("Enter a title"));
    }

    debug!(%title, %due, "building add-task request");
    Ok(ApiRequest::post(
        "/addTask",
        vec![
            ("title", title.to_string()),
            ("due", due.to_string()),
            ("tags", tags.trim().to_string()),
        ],
    ))
}

pub fn toggle_complete(id: &str) -> ApiRequest {
    ApiRequest::post("/toggleComplete", vec![("id", id.to_string())])
}

/// Edits carry the same non-empty-title rule as adds.
pub fn edit_task(
    id: &str,
    title: &str,
    due: &str,
    tags: &str,
) -> Result<ApiRequest, GatewayError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(GatewayError::Validation("Enter a title"));
    }

    Ok(ApiRequest::post(
        "/editTask",
        vec![
            ("id", id.to_string()),
            ("title", title.to_string()),
            ("due", due.to_string()),
            ("tags", tags.trim().to_string()),
        ],
    ))
}

pub fn delete_task(id: &str) -> ApiRequest {
    ApiRequest::post("/deleteTask", vec![("id", id.to_string())])
}

/// Executed as a plain navigation so the browser handles the download.
pub fn export_csv() -> ApiRequest {
    ApiRequest::get("/exportCSV")
}

/// No selected task means no backend call.
pub fn pomodoro_start(task_id: &str) -> Result<ApiRequest, GatewayError> {
    if task_id.trim().is_empty() {
        return Err(GatewayError::Validation("Select a task"));
    }

    Ok(ApiRequest::post(
        "/pomodoro/start",
        vec![("taskId", task_id.to_string())],
    ))
}

pub fn pomodoro_stop(session_id: &str) -> ApiRequest {
    ApiRequest::post("/pomodoro/stop", vec![("sessionId", session_id.to_string())])
}

/// Body of `GET /tasks`: a JSON array of tasks.
pub fn parse_tasks(body: &str) -> Result<Vec<Task>, GatewayError> {
    serde_json::from_str(body)
        .map_err(|error| GatewayError::Backend(format!("malformed task list: {error}")))
}

/// Body of `POST /pomodoro/start`: the session id as plain text.
pub fn parse_session_id(body: &str) -> Result<String, GatewayError> {
    let id = body.trim();
    if id.is_empty() {
        return Err(GatewayError::Backend(
            "start returned an empty session id".to_string(),
        ));
    }
    Ok(id.to_string())
}
