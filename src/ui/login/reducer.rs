use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::{LoginField, LoginState};
use crate::ui::mvi::Reducer;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if state.submitting && !matches!(intent, LoginIntent::Succeeded | LoginIntent::Failed(_))
        {
            return state;
        }

        match intent {
            LoginIntent::Type(ch) => {
                let mut state = state;
                match state.focus {
                    LoginField::Email => state.email.push(ch),
                    LoginField::Password => state.password.push(ch),
                }
                state.error = None;
                state
            }
            LoginIntent::Erase => {
                let mut state = state;
                match state.focus {
                    LoginField::Email => {
                        state.email.pop();
                    }
                    LoginField::Password => {
                        state.password.pop();
                    }
                }
                state
            }
            LoginIntent::NextField => LoginState {
                focus: match state.focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                },
                ..state
            },
            LoginIntent::Submit => LoginState {
                submitting: true,
                error: None,
                ..state
            },
            LoginIntent::Succeeded => LoginState::default(),
            LoginIntent::Failed(message) => LoginState {
                submitting: false,
                error: Some(message),
                ..state
            },
        }
    }
}
