use serde::Deserialize;

use crate::catalog::Product;

/// Every response wraps its payload in `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: Option<T>,
}

/// `data` of `GET /products`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Error bodies come in a few shapes; pick whichever message is present.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}
