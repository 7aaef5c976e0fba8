use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{AppSettings, Config};
use crate::models::validation::{
    FieldError, StrengthTier, password_score, validate_email, validate_password_length,
    validate_password_match, validate_username,
};
use crate::services::notify;

/// Per-field visual state: untouched fields carry no validation styling.
#[derive(Clone, PartialEq, Default)]
struct FieldInput {
    value: String,
    touched: bool,
}

impl FieldInput {
    fn with_value(value: String) -> Self {
        Self {
            value,
            touched: true,
        }
    }

    fn status(&self, check: impl Fn(&str) -> Result<(), FieldError>) -> Option<Result<(), FieldError>> {
        self.touched.then(|| check(&self.value))
    }
}

fn input_class(status: Option<&Result<(), FieldError>>) -> Classes {
    match status {
        Some(Ok(())) => classes!("form-input", "is-valid"),
        Some(Err(_)) => classes!("form-input", "is-invalid"),
        None => classes!("form-input"),
    }
}

fn inline_feedback(status: Option<&Result<(), FieldError>>) -> Html {
    match status {
        Some(Err(e)) => html! { <div class="invalid-feedback">{e.to_string()}</div> },
        _ => html! {},
    }
}

fn read_value(e: &InputEvent) -> String {
    let target: HtmlInputElement = e.target_unchecked_into();
    target.value()
}

/// Registration form: live per-field validation, an advisory strength meter,
/// and a submit gate that cancels submission with one aggregated banner when
/// any check fails. A passing submit posts natively to the server.
#[function_component(RegisterForm)]
pub fn register_form() -> Html {
    let settings = use_context::<AppSettings>().unwrap_or_default();

    let username = use_state(FieldInput::default);
    let email = use_state(FieldInput::default);
    let password = use_state(FieldInput::default);
    let confirm = use_state(FieldInput::default);
    let show_password = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            username.set(FieldInput::with_value(read_value(&e)));
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(FieldInput::with_value(read_value(&e)));
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(FieldInput::with_value(read_value(&e)));
        })
    };
    let on_confirm = {
        let confirm = confirm.clone();
        Callback::from(move |e: InputEvent| {
            confirm.set(FieldInput::with_value(read_value(&e)));
        })
    };
    let on_toggle_visibility = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    // Submit gate: re-run every check against current values; any failure
    // cancels the native submission and surfaces one aggregated banner.
    let on_submit = {
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        Callback::from(move |e: SubmitEvent| {
            let mut failures: Vec<FieldError> = Vec::new();

            if let Err(err) = validate_username(&username.value) {
                failures.push(err);
            }
            if let Err(err) = validate_email(&email.value) {
                failures.push(err);
            }
            if let Err(err) = validate_password_length(&password.value, Config::MIN_PASSWORD_LEN) {
                failures.push(err);
            }
            if let Err(err) = validate_password_match(&password.value, &confirm.value) {
                failures.push(err);
            }

            if !failures.is_empty() {
                e.prevent_default();

                // Mark everything touched so the inline state reflects the gate.
                username.set(FieldInput::with_value(username.value.clone()));
                email.set(FieldInput::with_value(email.value.clone()));
                password.set(FieldInput::with_value(password.value.clone()));
                confirm.set(FieldInput::with_value(confirm.value.clone()));

                let reasons = failures
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                notify::show_error(&format!("Please fix the errors before submitting: {reasons}"));
            }
        })
    };

    let username_status = username.status(validate_username);
    let email_status = email.status(validate_email);
    let confirm_status = confirm
        .touched
        .then(|| validate_password_match(&password.value, &confirm.value));

    let tier = StrengthTier::from_score(password_score(&password.value));
    let password_type = if *show_password { "text" } else { "password" };
    let mismatch = matches!(confirm_status, Some(Err(_)));

    html! {
        <form
            id="registerForm"
            action={settings.url("/register")}
            method="post"
            onsubmit={on_submit}
        >
            <div class="form-group">
                <label for="username">{"Username"}</label>
                <input
                    id="username"
                    name="username"
                    type="text"
                    class={input_class(username_status.as_ref())}
                    value={username.value.clone()}
                    oninput={on_username}
                />
                {inline_feedback(username_status.as_ref())}
            </div>

            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    class={input_class(email_status.as_ref())}
                    value={email.value.clone()}
                    oninput={on_email}
                />
                {inline_feedback(email_status.as_ref())}
            </div>

            <div class="form-group">
                <label for="password">{"Password"}</label>
                <div class="input-row">
                    <input
                        id="password"
                        name="password"
                        type={password_type}
                        class="form-input"
                        value={password.value.clone()}
                        oninput={on_password}
                    />
                    <button
                        type="button"
                        id="togglePassword"
                        class="toggle-visibility"
                        aria-label="Toggle password visibility"
                        onclick={on_toggle_visibility}
                    >
                        {if *show_password { "Hide" } else { "Show" }}
                    </button>
                </div>
                // Advisory only; never blocks submission
                <div class={classes!("password-strength", tier.css_class())}></div>
            </div>

            <div class="form-group">
                <label for="confirmPassword">{"Confirm password"}</label>
                <input
                    id="confirmPassword"
                    name="confirmPassword"
                    type={password_type}
                    class={input_class(confirm_status.as_ref())}
                    value={confirm.value.clone()}
                    oninput={on_confirm}
                />
                if mismatch {
                    <div id="passwordMatch" class="invalid-feedback">
                        {"Passwords do not match"}
                    </div>
                }
            </div>

            <button type="submit" class="btn btn-primary">{"Register"}</button>
        </form>
    }
}
