mod component;
pub(crate) mod storage;

pub use component::App;

pub const LOAD_ERROR_MESSAGE: &str = "Unable to load tasks. Is backend running?";

/// Blocking browser dialogs, matching the validation error taxonomy: these
/// fire before any backend call is made.
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub(crate) fn prompt(message: &str, default: &str) -> Option<String> {
    web_sys::window()
        .and_then(|window| {
            window
                .prompt_with_message_and_default(message, default)
                .ok()
        })
        .flatten()
}
