//! Product detail: one product fetched by key.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::DetailState;
pub use view::{info_rows, render_detail, NOT_FOUND_MESSAGE};
