pub mod dashboard;
pub mod login_form;
pub mod login_page;

pub use dashboard::DashboardPage;
pub use login_page::LoginPage;
