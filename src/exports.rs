//! Helpers re-exported to inline page scripts through `wasm_bindgen`,
//! mirroring what other pages on the site expect from the console bundle.

use wasm_bindgen::prelude::*;

use crate::config::AppSettings;
use crate::models::{format, validation};
use crate::services::api::{ApiClient, RequestOptions, parse_method};
use crate::services::loading::{DEFAULT_BUSY_LABEL, LoadingState};
use crate::services::notify::{self, Severity};

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, severity: &str) {
    let severity = match severity {
        "success" => Severity::Success,
        "danger" | "error" => Severity::Danger,
        _ => Severity::Info,
    };
    notify::show_notification(message, severity);
}

#[wasm_bindgen(js_name = showError)]
pub fn show_error(message: &str) {
    notify::show_error(message);
}

#[wasm_bindgen(js_name = showSuccess)]
pub fn show_success(message: &str) {
    notify::show_success(message);
}

#[wasm_bindgen(js_name = confirmDelete)]
pub fn confirm_delete(message: Option<String>) -> bool {
    notify::confirm_delete(message.as_deref())
}

#[wasm_bindgen(js_name = confirmAction)]
pub fn confirm_action(message: &str) -> bool {
    notify::confirm_action(message)
}

/// Busy-state record handed back to the inline caller; pass it to
/// `hideLoading` to restore the control. The idle label lives in this
/// record, not on the DOM node.
#[wasm_bindgen]
pub struct LoadingHandle {
    state: LoadingState,
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(element: web_sys::HtmlElement, message: Option<String>) -> LoadingHandle {
    let message = message.as_deref().unwrap_or(DEFAULT_BUSY_LABEL);
    LoadingHandle {
        state: LoadingState::begin(element, message),
    }
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading(handle: LoadingHandle) {
    handle.state.finish();
}

#[wasm_bindgen(js_name = formatBytes)]
pub fn format_bytes(bytes: f64, decimals: usize) -> String {
    format::format_bytes(bytes.max(0.0) as u64, decimals)
}

#[wasm_bindgen(js_name = formatDuration)]
pub fn format_duration(seconds: f64) -> String {
    format::format_duration(seconds.max(0.0) as u64)
}

#[wasm_bindgen(js_name = validateUsername)]
pub fn validate_username(value: &str) -> bool {
    validation::validate_username(value).is_ok()
}

#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email(value: &str) -> bool {
    validation::validate_email(value).is_ok()
}

fn export_client() -> Result<ApiClient, JsValue> {
    let settings = web_sys::window()
        .and_then(|w| w.document())
        .map_or_else(AppSettings::default, |doc| AppSettings::from_document(&doc));
    ApiClient::new(settings).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Single JSON request with caller-specified method, headers (a JSON object
/// of name/value strings), and raw body, resolved with the response body as
/// a JSON string. A failure has already been surfaced as an error banner by
/// the client before it rejects here.
#[wasm_bindgen(js_name = requestJson)]
pub async fn request_json(
    path: String,
    method: Option<String>,
    body: Option<String>,
    headers: Option<String>,
) -> Result<String, JsValue> {
    let method =
        parse_method(method.as_deref()).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut options = RequestOptions::default();
    if let Some(raw) = headers {
        let entries: std::collections::HashMap<String, String> = serde_json::from_str(&raw)
            .map_err(|e| JsValue::from_str(&format!("Invalid headers: {e}")))?;
        for (name, value) in entries {
            options = options.header(name, value);
        }
    }
    if let Some(body) = body {
        options = options.body(body);
    }

    let body: serde_json::Value = export_client()?
        .request(method, &path, options)
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(body.to_string())
}

/// Shorthand POST of a JSON body, resolved like `requestJson`.
#[wasm_bindgen(js_name = postJson)]
pub async fn post_json(path: String, body: String) -> Result<String, JsValue> {
    let body: serde_json::Value = serde_json::from_str(&body)
        .map_err(|e| JsValue::from_str(&format!("Invalid JSON body: {e}")))?;

    let response: serde_json::Value = export_client()?
        .post_json(&path, &body)
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(response.to_string())
}
