use crate::catalog::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProductListIntent {
    Reload,
    Loaded(Vec<Product>),
    Failed(String),
    MoveUp,
    MoveDown,
}

impl Intent for ProductListIntent {}
