use crate::catalog::ProductKey;
use crate::ui::mvi::Intent;
use crate::ui::navigation::state::Tab;

#[derive(Debug, Clone)]
pub enum NavIntent {
    /// Replace the whole stack with a tab's root screen.
    SwitchTab(Tab),
    /// Push the detail screen for a product.
    OpenProduct(ProductKey),
    /// Pop one screen. Does nothing on a tab root.
    Back,
}

impl Intent for NavIntent {}
