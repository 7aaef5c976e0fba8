use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::config::Config;

/// Visual severity of a notification banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Danger,
}

impl Severity {
    /// CSS modifier class for the banner.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast-info",
            Self::Success => "toast-success",
            Self::Danger => "toast-danger",
        }
    }
}

/// Shows a transient, self-dismissing banner.
///
/// Fire-and-forget: the banner is appended to `<body>`, fades after
/// `TOAST_DISPLAY_MS`, and is detached `TOAST_FADE_MS` later. Concurrent
/// calls stack; there is no queue and no deduplication. A manual dismiss does
/// not clear the pending timer — removal is idempotent, so the timer firing
/// against an already-detached element is harmless.
pub fn show_notification(message: &str, severity: Severity) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        gloo::console::warn!("document unavailable, dropping notification");
        return;
    };

    match build_banner(&document, message, severity) {
        Ok(banner) => schedule_dismiss(banner),
        Err(e) => gloo::console::warn!(&format!("failed to build notification: {e:?}")),
    }
}

/// Shorthand for a danger banner.
pub fn show_error(message: &str) {
    show_notification(message, Severity::Danger);
}

/// Shorthand for a success banner.
pub fn show_success(message: &str) {
    show_notification(message, Severity::Success);
}

fn build_banner(
    document: &Document,
    message: &str,
    severity: Severity,
) -> Result<Element, wasm_bindgen::JsValue> {
    let banner = document.create_element("div")?;
    banner.set_class_name(&format!("toast {}", severity.css_class()));

    let text = document.create_element("span")?;
    text.set_class_name("toast-message");
    // the message goes in as a text node, never as markup
    text.set_text_content(Some(message));
    banner.append_child(&text)?;

    let close = document.create_element("button")?;
    close.set_class_name("toast-close");
    close.set_attribute("type", "button")?;
    close.set_attribute("aria-label", "Dismiss")?;
    close.set_text_content(Some("\u{00d7}"));
    banner.append_child(&close)?;

    {
        let banner = banner.clone();
        EventListener::once(&close, "click", move |_| banner.remove()).forget();
    }

    if let Some(body) = document.body() {
        body.append_child(&banner)?;
    }

    Ok(banner)
}

fn schedule_dismiss(banner: Element) {
    Timeout::new(Config::TOAST_DISPLAY_MS, move || {
        let _ = banner.class_list().add_1("toast-fade");
        Timeout::new(Config::TOAST_FADE_MS, move || banner.remove()).forget();
    })
    .forget();
}

/// Asks the user to confirm a destructive action.
pub fn confirm_delete(message: Option<&str>) -> bool {
    confirm_action(message.unwrap_or("Are you sure you want to delete this item?"))
}

/// Wraps the browser's native confirmation dialog.
pub fn confirm_action(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
