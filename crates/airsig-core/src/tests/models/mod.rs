mod account;
mod auth_method;
mod page;
mod session;
