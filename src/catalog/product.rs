use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::catalog::images::product_image;

/// Identifier used to open a product. The API sends either strings
/// (`"_id": "65f0..."`) or numbers (`"id": 12`); both become text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawKey", into = "String")]
pub struct ProductKey(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawKey> for ProductKey {
    fn from(raw: RawKey) -> Self {
        match raw {
            RawKey::Text(text) => Self(text),
            RawKey::Number(number) => Self(number.to_string()),
        }
    }
}

impl From<ProductKey> for String {
    fn from(key: ProductKey) -> Self {
        key.0
    }
}

impl ProductKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product as served by the storefront API.
///
/// The client treats it as a read model: every field except `title` may be
/// missing, and fields it does not render are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ProductKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductKey>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stock: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub warranty_information: Option<String>,
    #[serde(default)]
    pub shipping_information: Option<String>,
}

/// `null` decodes like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    /// Navigation key: the document `_id` when present, otherwise `id`.
    pub fn key(&self) -> Option<&ProductKey> {
        self.object_id.as_ref().or(self.id.as_ref())
    }

    pub fn image_url(&self) -> &str {
        product_image(self.thumbnail.as_deref(), &self.images)
    }

    pub fn in_stock(&self) -> bool {
        self.stock.is_some_and(|stock| stock > 0.0)
    }

    /// Price in rupees, e.g. `₹549` or `₹12.99`.
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format!("₹{}", price),
            None => "₹-".to_string(),
        }
    }
}
