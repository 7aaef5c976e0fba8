use converter_console::app::{App, AppProps};
use converter_console::config::{AppSettings, Page};

fn main() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let settings = AppSettings::from_document(&document);

    // Behaviors attach only when the host page provides the mount point.
    let Some(root) = document
        .query_selector("#app")
        .ok()
        .flatten()
    else {
        gloo::console::warn!("no #app mount point, nothing to do");
        return;
    };

    let page = Page::from_attributes(
        root.get_attribute("data-page").as_deref(),
        root.get_attribute("data-processing-count").as_deref(),
    );

    gloo::console::log!("Converter console initialized");

    yew::Renderer::<App>::with_root_and_props(root, AppProps { page, settings }).render();
}
