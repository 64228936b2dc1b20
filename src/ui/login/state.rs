use crate::session::{Credentials, SecureString};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginState {
    pub email: String,
    pub password: SecureString,
    pub focus: LoginField,
    /// A login request is in flight.
    pub submitting: bool,
    pub error: Option<String>,
}

impl UiState for LoginState {}

impl LoginState {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}
