//! App-lifetime category context shared by every screen.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::{ApiError, StorefrontClient};
use crate::catalog::category::{resolve_categories, Category};

/// What screens see of the category list.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryState {
    pub categories: Vec<Category>,
    pub loading: bool,
}

impl Default for CategoryState {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            loading: true,
        }
    }
}

/// Holds the category list for the whole session.
///
/// Created once at startup and handed to the UI and the fetch worker.
/// Only [`CategoryProvider::load`] writes to it; everyone else reads
/// snapshots.
#[derive(Clone, Default)]
pub struct CategoryProvider {
    inner: Arc<RwLock<CategoryState>>,
}

impl CategoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> CategoryState {
        self.inner.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.read().loading
    }

    /// Fetches the category names once and publishes the result.
    pub async fn load(&self, client: &StorefrontClient) {
        let result = client.categories().await;
        self.finish(result);
    }

    /// Publishes a fetch result. Failures are logged and leave the list
    /// empty; loading ends either way.
    pub fn finish(&self, result: Result<Vec<String>, ApiError>) {
        let mut state = self.inner.write();
        match result {
            Ok(names) => {
                state.categories = resolve_categories(names);
                tracing::info!(count = state.categories.len(), "Categories loaded");
            }
            Err(err) => {
                tracing::warn!(error = %err, "Category fetch failed");
                state.categories.clear();
            }
        }
        state.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading_and_empty() {
        let provider = CategoryProvider::new();
        let state = provider.snapshot();
        assert!(state.loading);
        assert!(state.categories.is_empty());
    }

    #[test]
    fn clones_share_state() {
        let provider = CategoryProvider::new();
        let reader = provider.clone();
        provider.finish(Ok(vec!["audio".to_string()]));
        assert!(!reader.is_loading());
        assert_eq!(reader.snapshot().categories[0].name, "audio");
    }

    #[test]
    fn failure_ends_loading_with_empty_list() {
        let provider = CategoryProvider::new();
        provider.finish(Err(ApiError::Timeout {
            url: "http://localhost/products/categories".to_string(),
        }));
        let state = provider.snapshot();
        assert!(!state.loading);
        assert!(state.categories.is_empty());
    }
}
