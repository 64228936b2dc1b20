mod intent;
mod reducer;
mod state;
mod view;

pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::{LoginField, LoginState};
pub use view::render_login;
