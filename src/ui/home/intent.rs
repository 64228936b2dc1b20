use crate::catalog::GroupedPreview;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PreviewIntent {
    /// Home content was (re)entered; a fresh fetch is on its way.
    Reload,
    Loaded(GroupedPreview),
    Failed(String),
}

impl Intent for PreviewIntent {}
