use yew::prelude::*;

use crate::services::loading::DEFAULT_BUSY_LABEL;

#[derive(Properties, PartialEq)]
pub struct LoadingButtonProps {
    /// When true the button is disabled and shows the busy label.
    pub busy: bool,

    /// Label shown next to the spinner while busy
    #[prop_or_else(|| AttrValue::from(DEFAULT_BUSY_LABEL))]
    pub busy_label: AttrValue,

    #[prop_or_default]
    pub class: Classes,

    /// The idle label. Held here as component state rather than stashed on
    /// the DOM node, so it is restored exactly when `busy` goes false.
    #[prop_or_default]
    pub children: Children,
}

/// Submit button with a busy state: disabled plus a spinner while an action
/// is in flight.
#[function_component(LoadingButton)]
pub fn loading_button(props: &LoadingButtonProps) -> Html {
    html! {
        <button
            type="submit"
            class={classes!("btn", props.class.clone())}
            disabled={props.busy}
        >
            if props.busy {
                <span class="spinner" aria-hidden="true"></span>
                {props.busy_label.clone()}
            } else {
                {props.children.clone()}
            }
        </button>
    }
}
