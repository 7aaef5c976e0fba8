use web_sys::HtmlElement;

/// Busy label used when the caller does not supply one.
pub const DEFAULT_BUSY_LABEL: &str = "Loading...";

/// Caller-owned record of a control's idle state while it shows a busy
/// spinner. The idle markup lives in this record, not in an attribute
/// stashed on the DOM node; dropping the record without `finish` leaves the
/// control busy.
pub struct LoadingState {
    target: HtmlElement,
    idle_html: String,
}

impl LoadingState {
    /// Disables the control and swaps its content for a spinner plus the
    /// busy message, capturing the idle markup for later restore.
    pub fn begin(target: HtmlElement, message: &str) -> Self {
        let idle_html = target.inner_html();

        let _ = target.set_attribute("disabled", "");
        target.set_inner_html("<span class=\"spinner\" aria-hidden=\"true\"></span>");

        // the message goes in as a text node, never as markup
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let text = document.create_text_node(message);
            let _ = target.append_child(&text);
        }

        Self { target, idle_html }
    }

    /// Re-enables the control and restores the captured idle markup.
    pub fn finish(self) {
        let _ = self.target.remove_attribute("disabled");
        self.target.set_inner_html(&self.idle_html);
    }
}
