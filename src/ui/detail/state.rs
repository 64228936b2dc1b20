use crate::catalog::{Product, ProductKey};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Loading {
        key: ProductKey,
    },
    Loaded {
        key: ProductKey,
        product: Product,
    },
    NotFound {
        key: ProductKey,
    },
    Failed {
        key: ProductKey,
        message: String,
    },
}

impl UiState for DetailState {}

impl DetailState {
    pub fn key(&self) -> Option<&ProductKey> {
        match self {
            Self::Closed => None,
            Self::Loading { key }
            | Self::Loaded { key, .. }
            | Self::NotFound { key }
            | Self::Failed { key, .. } => Some(key),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}
