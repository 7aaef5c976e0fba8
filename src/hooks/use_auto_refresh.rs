use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::{AppSettings, Config};

/// Decides whether the status page should schedule a reload.
///
/// Returns `None` when nothing is processing (no timer at all), otherwise the
/// configured one-shot delay. Each page load re-evaluates this from freshly
/// rendered server state; there is no backoff and no retry cap.
pub fn refresh_delay_ms(processing: u32, settings: &AppSettings) -> Option<u32> {
    (processing > 0).then(|| settings.refresh_delay_ms())
}

/// Schedules a one-shot full-page reload while conversion jobs are in
/// progress and exposes a once-per-second countdown for user feedback.
///
/// The reload cannot be aborted once scheduled. The countdown interval is
/// dropped on unmount, but the page normally navigates away first.
#[hook]
pub fn use_auto_refresh(processing: u32, settings: &AppSettings) -> Option<u32> {
    let seconds_left = use_state(|| refresh_delay_ms(processing, settings).map(|d| d / 1_000));

    {
        let seconds_left = seconds_left.clone();
        let settings = settings.clone();

        use_effect_with(processing, move |&processing| {
            let mut countdown = None;

            if let Some(delay) = refresh_delay_ms(processing, &settings) {
                gloo::console::log!(&format!(
                    "Auto-refresh enabled: {processing} processing job(s)"
                ));

                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().reload();
                    }
                });

                let remaining = Rc::new(Cell::new(delay / 1_000));
                countdown = Some(Interval::new(Config::COUNTDOWN_TICK_MS, move || {
                    remaining.set(remaining.get().saturating_sub(1));
                    seconds_left.set(Some(remaining.get()));
                }));
            } else {
                gloo::console::log!("Auto-refresh disabled: no processing jobs");
            }

            move || drop(countdown)
        });
    }

    *seconds_left
}
