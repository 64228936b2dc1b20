use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::types::{Envelope, ErrorBody, ProductPage};
use crate::catalog::{Product, ProductKey};
use crate::config::ApiConfig;
use crate::session::{Credentials, Session};

/// Longest error body echoed into an [`ApiError::Status`] message.
const MAX_ERROR_MESSAGE: usize = 200;

/// HTTP client for the storefront API.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct StorefrontClient {
    client: Client,
    base_url: String,
}

impl StorefrontClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .user_agent(concat!("shopterm/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `POST /auth/login`. Returns the session payload as sent.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let url = self.endpoint("auth/login");
        tracing::debug!(%url, email = %credentials.email, "Logging in");

        let response = self
            .client
            .post(&url)
            .json(&credentials.body())
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        let data: Option<Value> = read_data(response, &url, "Account").await?;
        match data {
            Some(value) if !value.is_null() => Ok(Session::from_value(value)),
            _ => Err(ApiError::Decode {
                url,
                message: "login response carried no session".to_string(),
            }),
        }
    }

    /// `GET /products/categories`.
    pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint("products/categories");
        let names: Option<Vec<String>> = self.get_data(&url, "Categories").await?;
        Ok(names.unwrap_or_default())
    }

    /// `GET /products?limit=N`: the first page of up to `limit` products.
    pub async fn products(&self, limit: usize) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}?limit={}", self.endpoint("products"), limit);
        let page: Option<ProductPage> = self.get_data(&url, "Products").await?;
        Ok(page.map(|page| page.products).unwrap_or_default())
    }

    /// `GET /products/:id`. A 404 or an empty `data` is [`ApiError::NotFound`].
    pub async fn product(&self, key: &ProductKey) -> Result<Product, ApiError> {
        let url = self.product_url(key)?;
        let resource = format!("Product {}", key);
        let product: Option<Product> = self.get_data(&url, &resource).await?;
        product.ok_or(ApiError::NotFound { resource })
    }

    /// `products/<key>` with the key as one percent-encoded path segment.
    fn product_url(&self, key: &ProductKey) -> Result<String, ApiError> {
        let base = self.endpoint("products");
        let invalid = |message: String| ApiError::InvalidUrl {
            url: base.clone(),
            message,
        };
        let mut url = Url::parse(&base).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("URL cannot take a path".to_string()))?
            .push(key.as_str());
        Ok(url.to_string())
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: &str,
    ) -> Result<Option<T>, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::transport(url, e))?;
        read_data(response, url, resource).await
    }
}

async fn read_data<T: DeserializeOwned>(
    response: Response,
    url: &str,
    resource: &str,
) -> Result<Option<T>, ApiError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::transport(url, e))?;

    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound {
            resource: resource.to_string(),
        });
    }

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| {
                String::from_utf8_lossy(&body)
                    .chars()
                    .take(MAX_ERROR_MESSAGE)
                    .collect()
            });
        tracing::debug!(%url, status = status.as_u16(), %message, "Storefront error");
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let envelope: Envelope<T> =
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })?;
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> StorefrontClient {
        StorefrontClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        let client = client("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(
            client.endpoint("/products/categories"),
            "http://localhost:5000/api/products/categories"
        );
        assert_eq!(
            client.endpoint("auth/login"),
            "http://localhost:5000/api/auth/login"
        );
    }

    #[test]
    fn product_url_encodes_the_key() {
        let client = client("http://localhost:5000/api");
        assert_eq!(
            client.product_url(&ProductKey::new("65f0a1")).unwrap(),
            "http://localhost:5000/api/products/65f0a1"
        );
        assert_eq!(
            client.product_url(&ProductKey::new("a/b?c#d")).unwrap(),
            "http://localhost:5000/api/products/a%2Fb%3Fc%23d"
        );
    }
}
