use crate::catalog::images::category_image;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// 1-based position in the server's category list.
    pub id: u32,
    pub name: String,
    pub image: String,
}

/// Turns the server's category names into display categories.
///
/// Ids follow the input order, so a reordered response renumbers every
/// category.
pub fn resolve_categories<I>(names: I) -> Vec<Category>
where
    I: IntoIterator<Item = String>,
{
    names
        .into_iter()
        .zip(1u32..)
        .map(|(name, id)| Category {
            id,
            image: category_image(&name).to_string(),
            name,
        })
        .collect()
}
