pub mod use_ledger;
pub mod use_login;

pub use use_ledger::use_ledger;
pub use use_login::use_login;
