use yew::prelude::*;

use crate::config::AppSettings;
use crate::hooks::use_auto_refresh::use_auto_refresh;

#[derive(Properties, PartialEq)]
pub struct StatusPanelProps {
    /// Server-rendered count of in-progress conversion jobs.
    pub processing: u32,
}

/// Job-status panel: while anything is processing, a one-shot reload is
/// scheduled and a countdown banner shows when it will happen.
#[function_component(StatusPanel)]
pub fn status_panel(props: &StatusPanelProps) -> Html {
    let settings = use_context::<AppSettings>().unwrap_or_default();
    let seconds_left = use_auto_refresh(props.processing, &settings);

    html! {
        <div class="status-panel" data-processing-count={props.processing.to_string()}>
            if props.processing > 0 {
                <p class="status-line">
                    {format!("{} conversion job(s) in progress", props.processing)}
                </p>
                if let Some(seconds) = seconds_left {
                    <div class="refresh-countdown">
                        {"Auto-refresh in "}<strong>{seconds}</strong>{"s"}
                    </div>
                }
            } else {
                <p class="status-line">{"No conversion jobs in progress"}</p>
            }
        </div>
    }
}
