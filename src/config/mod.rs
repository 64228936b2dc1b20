//! Configuration loading.
//!
//! Settings live in a TOML file under the user's config directory. Every
//! field has a default, so a missing file or a partial file both work.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{data_dir, ApiConfig, CatalogConfig, Config, LoggingConfig, SessionConfig};
