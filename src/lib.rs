//! Terminal storefront client.
//!
//! The binary wires these together: [`config`] is loaded first, then
//! [`logging`]; [`worker`] runs [`api`] calls on a tokio runtime while
//! [`ui`] owns the terminal on the main thread. [`catalog`] and
//! [`session`] hold the shared category context and the persisted login.

pub mod api;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod session;
pub mod ui;
pub mod worker;
