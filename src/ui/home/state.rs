use crate::catalog::GroupedPreview;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PreviewState {
    #[default]
    Loading,
    Ready(GroupedPreview),
    Failed(String),
}

impl UiState for PreviewState {}

impl PreviewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
