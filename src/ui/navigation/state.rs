use crate::catalog::ProductKey;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Products,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Products,
    ProductDetail(ProductKey),
}

impl Tab {
    pub fn root(self) -> Route {
        match self {
            Tab::Home => Route::Home,
            Tab::Products => Route::Products,
        }
    }
}

/// Stack of screens. Never empty; the bottom entry is a tab root.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    stack: Vec<Route>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }
}

impl UiState for NavigationState {}

impl NavigationState {
    pub(super) fn from_stack(stack: Vec<Route>) -> Self {
        if stack.is_empty() {
            Self::default()
        } else {
            Self { stack }
        }
    }

    pub(super) fn into_stack(self) -> Vec<Route> {
        self.stack
    }

    pub fn current(&self) -> &Route {
        // from_stack keeps at least one entry
        self.stack.last().unwrap_or(&Route::Home)
    }

    pub fn tab(&self) -> Tab {
        match self.stack.first() {
            Some(Route::Products) => Tab::Products,
            _ => Tab::Home,
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn contains(&self, route: &Route) -> bool {
        self.stack.contains(route)
    }
}
