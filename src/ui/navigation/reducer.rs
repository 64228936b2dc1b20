use crate::ui::mvi::Reducer;
use crate::ui::navigation::intent::NavIntent;
use crate::ui::navigation::state::{NavigationState, Route};

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavigationState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::SwitchTab(tab) => {
                if state.depth() == 1 && state.tab() == tab {
                    state
                } else {
                    NavigationState::from_stack(vec![tab.root()])
                }
            }
            NavIntent::OpenProduct(key) => {
                let mut stack = state.into_stack();
                let route = Route::ProductDetail(key);
                if stack.last() != Some(&route) {
                    stack.push(route);
                }
                NavigationState::from_stack(stack)
            }
            NavIntent::Back => {
                let mut stack = state.into_stack();
                if stack.len() > 1 {
                    stack.pop();
                }
                NavigationState::from_stack(stack)
            }
        }
    }
}
