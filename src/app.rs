use yew::prelude::*;

use crate::components::{RegisterForm, StatusPanel, UploadForm};
use crate::config::{AppSettings, Page};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub page: Page,
    pub settings: AppSettings,
}

/// Page behavior controller: mounts the behavior matching the host page and
/// provides the settings value to every component below it.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<AppSettings> context={props.settings.clone()}>
            {match props.page {
                Page::Register => html! { <RegisterForm /> },
                Page::Upload => html! { <UploadForm /> },
                Page::Status { processing } => html! { <StatusPanel {processing} /> },
                Page::None => html! {},
            }}

            <style>
                {include_str!("style.css")}
            </style>
        </ContextProvider<AppSettings>>
    }
}
