//! Terminal UI: screens, navigation and the event loop.

pub mod app;
pub mod detail;
pub mod events;
pub mod footer;
pub mod header;
pub mod home;
mod input;
pub mod layout;
pub mod login;
pub mod mvi;
pub mod navigation;
pub mod products;
pub mod render;
mod runtime;
mod terminal_guard;
pub mod theme;
pub mod widgets;

use std::time::Duration;

pub use runtime::run;

/// Spinner frame rate and the longest the loop blocks between redraws.
pub const TICK_RATE: Duration = Duration::from_millis(120);
