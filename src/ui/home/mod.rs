//! Home screen: login gate, category grid, grouped preview and logout.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::PreviewIntent;
pub use reducer::PreviewReducer;
pub use state::PreviewState;
pub use view::{max_home_scroll, render_home, HomeView};
