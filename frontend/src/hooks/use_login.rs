use std::cell::RefCell;
use std::rc::Rc;

use shared::login::failure_banner;
use shared::session::startup_check;
use shared::{AppConfig, LoginController, LoginError, LoginForm, StaticCredentials, ValidationError};
use yew::prelude::*;

use crate::services::navigation::{navigate_to, schedule_redirect};
use crate::services::{BrowserStore, Logger};

/// Messages shown around the login form. Each submit replaces all of them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginFeedback {
    /// `(error element id, message)` for the one field that failed validation
    pub field_error: Option<(&'static str, String)>,
    pub success: Option<String>,
    pub error: Option<String>,
}

impl LoginFeedback {
    pub fn field_error(error: &ValidationError) -> Self {
        Self {
            field_error: Some((error.field_error_id(), error.to_string())),
            ..Self::default()
        }
    }

    /// Inline message for the error element `id`, if that field failed
    pub fn field_message(&self, id: &str) -> Option<String> {
        self.field_error
            .as_ref()
            .filter(|(field_id, _)| *field_id == id)
            .map(|(_, message)| message.clone())
    }

    pub fn success(message: &str) -> Self {
        Self {
            success: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn banner(message: Option<String>) -> Self {
        Self {
            error: message,
            ..Self::default()
        }
    }
}

pub struct UseLoginResult {
    pub form: LoginForm,
    pub feedback: LoginFeedback,
    /// The form stays disabled while a guarded redirect is pending
    pub locked: bool,
    pub actions: UseLoginActions,
}

#[derive(Clone, PartialEq)]
pub struct UseLoginActions {
    pub set_username: Callback<String>,
    pub set_password: Callback<String>,
    pub set_remember_me: Callback<bool>,
    pub submit: Callback<()>,
}

/// The form stays disabled while the controller's guarded redirect is pending
fn form_locked(controller: &LoginController) -> bool {
    controller.is_redirect_pending() && controller.config().guard_pending_redirect
}

#[hook]
pub fn use_login(config: &AppConfig) -> UseLoginResult {
    let form = use_state(LoginForm::default);
    let feedback = use_state(LoginFeedback::default);
    let controller = {
        let config = config.clone();
        use_mut_ref(move || LoginController::with_demo_credentials(config))
    };

    // Startup check: skip the form when already logged in, pre-fill a remembered username
    {
        let form = form.clone();
        let main_page = config.main_page.clone();
        use_effect_with((), move |_| {
            Logger::info_with_component("login", "Demo Credentials:");
            for line in StaticCredentials::demo().hint_lines() {
                Logger::info_with_component("login", &line);
            }

            let action = startup_check(&BrowserStore::new());
            if action.redirect_to_main {
                navigate_to(&main_page);
            } else if let Some(username) = action.remembered_username {
                form.set(LoginForm {
                    username,
                    remember_me: true,
                    ..(*form).clone()
                });
            }
            || ()
        });
    }

    let set_username = {
        let form = form.clone();
        Callback::from(move |username: String| {
            form.set(LoginForm {
                username,
                ..(*form).clone()
            });
        })
    };

    let set_password = {
        let form = form.clone();
        Callback::from(move |password: String| {
            form.set(LoginForm {
                password,
                ..(*form).clone()
            });
        })
    };

    let set_remember_me = {
        let form = form.clone();
        Callback::from(move |remember_me: bool| {
            form.set(LoginForm {
                remember_me,
                ..(*form).clone()
            });
        })
    };

    let submit = {
        let form = form.clone();
        let feedback = feedback.clone();
        let controller: Rc<RefCell<LoginController>> = controller.clone();

        Callback::from(move |_| {
            let mut store = BrowserStore::new();
            let now_millis = js_sys::Date::now() as u64;
            let result = controller.borrow_mut().submit(&mut store, &form, now_millis);

            match result {
                Ok(success) => {
                    feedback.set(LoginFeedback::success(success.message()));
                    schedule_redirect(&success.redirect);
                }
                Err(LoginError::Validation(e)) => feedback.set(LoginFeedback::field_error(&e)),
                Err(LoginError::RedirectPending) => {
                    Logger::debug_with_component("login", "Submit ignored, redirect already scheduled");
                }
                Err(e) => feedback.set(LoginFeedback::banner(failure_banner(&e))),
            }
        })
    };

    // Re-read on every render; the success path re-renders through `feedback`
    let locked = form_locked(&controller.borrow());

    UseLoginResult {
        form: (*form).clone(),
        feedback: (*feedback).clone(),
        locked,
        actions: UseLoginActions {
            set_username,
            set_password,
            set_remember_me,
            submit,
        },
    }
}
