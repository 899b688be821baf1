mod components;
mod hooks;
mod page;
mod services;

use log::LevelFilter;

use components::dashboard::DashboardPageProps;
use components::login_page::LoginPageProps;
use components::{DashboardPage, LoginPage};
use page::Page;
use services::Logger;

fn main() {
    services::logging::init(LevelFilter::Info);

    let config = services::config::load();
    let path = gloo::utils::window().location().pathname().unwrap_or_default();
    let page = Page::from_path(&path, &config);
    Logger::debug_with_component("main", &format!("Mounting {:?} for {}", page, path));

    match page {
        Page::Login => {
            yew::Renderer::<LoginPage>::with_props(LoginPageProps { config }).render();
        }
        Page::Dashboard => {
            yew::Renderer::<DashboardPage>::with_props(DashboardPageProps { config }).render();
        }
    }
}
