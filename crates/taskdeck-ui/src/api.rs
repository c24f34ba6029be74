//! The one async boundary: executes core-built [`ApiRequest`]s over HTTP
//! against the page's own origin and maps failures into [`GatewayError`].

use gloo::net::http::Request;
use taskdeck_core::gateway::{self, ApiRequest, GatewayError, Method};
use taskdeck_core::task::Task;

fn backend_url(path: &str) -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .map(|origin| format!("{origin}{path}"))
        .unwrap_or_else(|| path.to_string())
}

async fn execute(request: &ApiRequest) -> Result<String, GatewayError> {
    let url = backend_url(request.path);

    let response = match request.method {
        Method::Get => Request::get(&url).send().await,
        Method::Post => {
            let built = Request::post(&url)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(request.form_body())
                .map_err(|error| GatewayError::Network(error.to_string()))?;
            built.send().await
        }
    }
    .map_err(|error| GatewayError::Network(error.to_string()))?;

    if !response.ok() {
        return Err(GatewayError::Backend(format!(
            "{} {}",
            response.status(),
            response.status_text()
        )));
    }

    response
        .text()
        .await
        .map_err(|error| GatewayError::Network(error.to_string()))
}

pub async fn fetch_tasks() -> Result<Vec<Task>, GatewayError> {
    let body = execute(&gateway::list_tasks()).await?;
    gateway::parse_tasks(&body)
}

/// Fire a mutation; the caller follows up with a list refresh.
pub async fn submit(request: ApiRequest) -> Result<(), GatewayError> {
    execute(&request).await.map(|_| ())
}

/// `POST /pomodoro/start`, answering the plain-text session id.
pub async fn start_session(request: ApiRequest) -> Result<String, GatewayError> {
    let body = execute(&request).await?;
    gateway::parse_session_id(&body)
}
