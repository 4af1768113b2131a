pub mod authenticate;
pub mod register;

pub use authenticate::{AuthenticateCommand, AuthenticateError};
pub use register::{RegisterCommand, RegisterError, RegisterResponse};
