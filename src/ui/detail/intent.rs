use crate::catalog::{Product, ProductKey};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Start showing `key`; a fetch for it is on its way.
    Open(ProductKey),
    Found { key: ProductKey, product: Product },
    Missing { key: ProductKey },
    Failed { key: ProductKey, message: String },
    Close,
}

impl Intent for DetailIntent {}
