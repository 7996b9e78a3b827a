pub mod account;
pub mod auth_history_entry;
pub mod auth_method;
pub mod page;
pub mod session;
pub mod signature_sample;
