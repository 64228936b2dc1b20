//! Catalog read models and the client-side rules applied to them:
//! category images, product image fallback and the grouped preview.

mod category;
pub mod images;
mod preview;
mod product;
mod provider;

pub use category::{resolve_categories, Category};
pub use preview::{GroupedPreview, PreviewGroup, DEFAULT_PER_CATEGORY, UNCATEGORIZED};
pub use product::{Product, ProductKey};
pub use provider::{CategoryProvider, CategoryState};
