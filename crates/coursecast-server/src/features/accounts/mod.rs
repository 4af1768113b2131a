//! Accounts: registration, login, logout

pub mod commands;
pub mod password;
pub mod routes;

pub use commands::{AuthenticateCommand, AuthenticateError, RegisterCommand, RegisterError};
pub use routes::accounts_routes;
