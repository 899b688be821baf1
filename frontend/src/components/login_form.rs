use shared::auth::{PASSWORD_ERROR_ID, USERNAME_ERROR_ID};
use shared::LoginForm;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_login::LoginFeedback;

#[derive(Properties, PartialEq)]
pub struct LoginFormViewProps {
    pub form: LoginForm,
    pub feedback: LoginFeedback,
    /// Disables the form once a redirect is scheduled
    pub locked: bool,

    pub on_username_change: Callback<String>,
    pub on_password_change: Callback<String>,
    pub on_remember_me_change: Callback<bool>,
    pub on_submit: Callback<()>,
}

fn message_block(id: &'static str, class: &'static str, message: &Option<String>) -> Html {
    match message {
        Some(text) => html! { <div id={id} class={classes!("form-message", class)}>{text}</div> },
        None => html! {},
    }
}

#[function_component(LoginFormView)]
pub fn login_form_view(props: &LoginFormViewProps) -> Html {
    let on_username_input = {
        let on_change = props.on_username_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let on_password_input = {
        let on_change = props.on_password_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let on_remember_change = {
        let on_change = props.on_remember_me_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.checked());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <section class="login-section">
            <h2>{"Sign in"}</h2>

            {message_block("successMessage", "success", &props.feedback.success)}
            {message_block("errorMessage", "error", &props.feedback.error)}

            <form id="loginForm" class="login-form" {onsubmit}>
                <div class="form-group">
                    <label for="username">{"Username"}</label>
                    <input
                        type="text"
                        id="username"
                        autocomplete="username"
                        value={props.form.username.clone()}
                        oninput={on_username_input}
                        disabled={props.locked}
                    />
                    {message_block(USERNAME_ERROR_ID, "field-error", &props.feedback.field_message(USERNAME_ERROR_ID))}
                </div>

                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input
                        type="password"
                        id="password"
                        autocomplete="current-password"
                        value={props.form.password.clone()}
                        oninput={on_password_input}
                        disabled={props.locked}
                    />
                    {message_block(PASSWORD_ERROR_ID, "field-error", &props.feedback.field_message(PASSWORD_ERROR_ID))}
                </div>

                <div class="form-group form-check">
                    <input
                        type="checkbox"
                        id="rememberMe"
                        checked={props.form.remember_me}
                        onchange={on_remember_change}
                        disabled={props.locked}
                    />
                    <label for="rememberMe">{"Remember me"}</label>
                </div>

                <button type="submit" class="btn btn-primary login-btn" disabled={props.locked}>
                    {if props.locked { "Redirecting..." } else { "Log in" }}
                </button>
            </form>
        </section>
    }
}
