use crate::ui::home::intent::PreviewIntent;
use crate::ui::home::state::PreviewState;
use crate::ui::mvi::Reducer;

pub struct PreviewReducer;

impl Reducer for PreviewReducer {
    type State = PreviewState;
    type Intent = PreviewIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PreviewIntent::Reload => PreviewState::Loading,
            PreviewIntent::Loaded(preview) => PreviewState::Ready(preview),
            PreviewIntent::Failed(message) => PreviewState::Failed(message),
        }
    }
}
