use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    Type(char),
    Erase,
    NextField,
    /// Enter pressed. Ignored while a login request is in flight.
    Submit,
    Succeeded,
    Failed(String),
}

impl Intent for LoginIntent {}
