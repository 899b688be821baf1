use gloo::timers::callback::Timeout;
use shared::Redirect;

use super::logging::Logger;

pub fn navigate_to(path: &str) {
    Logger::info_with_component("navigation", &format!("Navigating to {}", path));
    if gloo::utils::window().location().set_href(path).is_err() {
        Logger::error_with_component("navigation", &format!("Failed to navigate to {}", path));
    }
}

/// Fire `redirect` once after its delay. The timer cannot be cancelled.
pub fn schedule_redirect(redirect: &Redirect) {
    let target = redirect.target.clone();
    Timeout::new(redirect.delay_ms, move || navigate_to(&target)).forget();
}
