use crate::ui::mvi::Reducer;
use crate::ui::products::intent::ProductListIntent;
use crate::ui::products::state::ProductListState;

pub struct ProductListReducer;

impl Reducer for ProductListReducer {
    type State = ProductListState;
    type Intent = ProductListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProductListIntent::Reload => ProductListState::Loading,
            ProductListIntent::Loaded(products) => ProductListState::Loaded {
                products,
                selected: 0,
            },
            ProductListIntent::Failed(message) => ProductListState::Failed { message },
            ProductListIntent::MoveUp => match state {
                ProductListState::Loaded { products, selected } => {
                    let selected = if selected == 0 {
                        products.len().saturating_sub(1)
                    } else {
                        selected - 1
                    };
                    ProductListState::Loaded { products, selected }
                }
                other => other,
            },
            ProductListIntent::MoveDown => match state {
                ProductListState::Loaded { products, selected } => {
                    let selected = if selected + 1 >= products.len() {
                        0
                    } else {
                        selected + 1
                    };
                    ProductListState::Loaded { products, selected }
                }
                other => other,
            },
        }
    }
}
