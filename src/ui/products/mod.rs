//! Flat product list: one page of products as selectable cards.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ProductListIntent;
pub use reducer::ProductListReducer;
pub use state::ProductListState;
pub use view::render_products;
