use crate::catalog::{Product, ProductKey};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProductListState {
    #[default]
    Loading,
    Loaded {
        products: Vec<Product>,
        selected: usize,
    },
    Failed {
        message: String,
    },
}

impl UiState for ProductListState {}

impl ProductListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        match self {
            Self::Loaded { products, selected } => products.get(*selected),
            _ => None,
        }
    }

    /// Key of the highlighted product, if it has one.
    pub fn selected_key(&self) -> Option<&ProductKey> {
        self.selected_product().and_then(Product::key)
    }
}
