pub mod config;
pub mod export;
pub mod logging;
pub mod navigation;
pub mod storage;

pub use logging::Logger;
pub use storage::BrowserStore;
