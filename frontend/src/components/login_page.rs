use shared::AppConfig;
use yew::prelude::*;

use crate::components::login_form::LoginFormView;
use crate::hooks::use_login;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub config: AppConfig,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let login = use_login(&props.config);

    html! {
        <main class="login-page">
            <LoginFormView
                form={login.form}
                feedback={login.feedback}
                locked={login.locked}
                on_username_change={login.actions.set_username}
                on_password_change={login.actions.set_password}
                on_remember_me_change={login.actions.set_remember_me}
                on_submit={login.actions.submit}
            />
        </main>
    }
}
