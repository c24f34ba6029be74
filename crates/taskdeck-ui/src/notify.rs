//! Browser notification plumbing: probe support, ask for permission when
//! the user has not decided yet, and fire the notice.

use tracing::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

fn supported() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("Notification"))
        .ok()
        .unwrap_or(false)
}

/// Show a notification if the browser lets us; request permission first
/// when the user has not answered yet. Denied or unsupported means the
/// notice is silently skipped.
pub fn notify(title: &'static str, body: &'static str) {
    if !supported() {
        warn!("browser notification API unsupported in this runtime");
        return;
    }

    match web_sys::Notification::permission() {
        web_sys::NotificationPermission::Granted => show(title, body),
        web_sys::NotificationPermission::Denied => {}
        _ => request_then_show(title, body),
    }
}

fn show(title: &str, body: &str) {
    let options = web_sys::NotificationOptions::new();
    options.set_body(body);

    if let Err(error) = web_sys::Notification::new_with_options(title, &options) {
        warn!(?error, "failed to show notification");
    }
}

fn request_then_show(title: &'static str, body: &'static str) {
    let promise = match web_sys::Notification::request_permission() {
        Ok(promise) => promise,
        Err(error) => {
            warn!(?error, "notification permission request failed");
            return;
        }
    };

    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => {
                if web_sys::Notification::permission()
                    == web_sys::NotificationPermission::Granted
                {
                    show(title, body);
                }
            }
            Err(error) => {
                warn!(?error, "notification permission request rejected");
            }
        }
    });
}
