//! Logged-in session: what the login endpoint returned, kept across runs.

mod credentials;
mod keeper;
mod store;
mod types;

pub use credentials::{Credentials, SecureString};
pub use keeper::SessionKeeper;
pub use store::{FileSessionStore, MemorySessionStore, SessionError, SessionStore, SESSION_KEY};
pub use types::Session;
