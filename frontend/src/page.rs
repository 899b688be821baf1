use shared::AppConfig;

/// Which root component a URL path mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
}

impl Page {
    pub fn from_path(path: &str, config: &AppConfig) -> Self {
        let file = path.rsplit('/').next().unwrap_or_default();
        if !config.login_page.is_empty() && file == config.login_page.trim_start_matches("./") {
            Page::Login
        } else {
            Page::Dashboard
        }
    }
}
