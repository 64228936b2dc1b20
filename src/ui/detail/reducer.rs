use crate::catalog::ProductKey;
use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open(key) => DetailState::Loading { key },
            DetailIntent::Close => DetailState::Closed,
            // Results only land on the fetch that is still pending.
            DetailIntent::Found { key, product } if is_pending(&state, &key) => {
                DetailState::Loaded { key, product }
            }
            DetailIntent::Missing { key } if is_pending(&state, &key) => {
                DetailState::NotFound { key }
            }
            DetailIntent::Failed { key, message } if is_pending(&state, &key) => {
                DetailState::Failed { key, message }
            }
            _ => state,
        }
    }
}

fn is_pending(state: &DetailState, key: &ProductKey) -> bool {
    matches!(state, DetailState::Loading { key: pending } if pending == key)
}
