//! Home screen preview: a few products per category.

use std::collections::HashMap;

use crate::catalog::product::Product;

/// Products kept per category unless configured otherwise.
pub const DEFAULT_PER_CATEGORY: usize = 2;

/// Group name for products the API sent without a category.
pub const UNCATEGORIZED: &str = "uncategorized";

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewGroup {
    pub category: String,
    pub products: Vec<Product>,
}

/// Category name → first `cap` products of that category.
///
/// Groups are ordered by the first appearance of their category in the
/// input; products keep arrival order within a group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupedPreview {
    groups: Vec<PreviewGroup>,
}

impl GroupedPreview {
    pub fn from_products<I>(products: I, cap: usize) -> Self
    where
        I: IntoIterator<Item = Product>,
    {
        let mut groups: Vec<PreviewGroup> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for product in products {
            let category = product
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string());
            let slot = *index.entry(category.clone()).or_insert_with(|| {
                groups.push(PreviewGroup {
                    category,
                    products: Vec::new(),
                });
                groups.len() - 1
            });
            let group = &mut groups[slot];
            if group.products.len() < cap {
                group.products.push(product);
            }
        }

        groups.retain(|group| !group.products.is_empty());
        Self { groups }
    }

    pub fn groups(&self) -> &[PreviewGroup] {
        &self.groups
    }

    pub fn get(&self, category: &str) -> Option<&[Product]> {
        self.groups
            .iter()
            .find(|group| group.category == category)
            .map(|group| group.products.as_slice())
    }

    /// All kept products in render order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.groups.iter().flat_map(|group| group.products.iter())
    }

    pub fn product_count(&self) -> usize {
        self.groups.iter().map(|group| group.products.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, category: Option<&str>) -> Product {
        Product {
            title: title.to_string(),
            category: category.map(str::to_string),
            ..Product::default()
        }
    }

    #[test]
    fn keeps_first_two_in_arrival_order() {
        let preview = GroupedPreview::from_products(
            vec![
                product("a1", Some("audio")),
                product("g1", Some("gaming")),
                product("a2", Some("audio")),
                product("a3", Some("audio")),
                product("g2", Some("gaming")),
            ],
            DEFAULT_PER_CATEGORY,
        );

        let categories: Vec<_> = preview.groups().iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["audio", "gaming"]);

        let audio: Vec<_> = preview
            .get("audio")
            .unwrap()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(audio, vec!["a1", "a2"]);
        assert_eq!(preview.product_count(), 4);
    }

    #[test]
    fn missing_category_is_grouped_as_uncategorized() {
        let preview = GroupedPreview::from_products(vec![product("x", None)], 2);
        assert_eq!(preview.get(UNCATEGORIZED).map(<[Product]>::len), Some(1));
    }

    #[test]
    fn empty_input_gives_empty_preview() {
        let preview = GroupedPreview::from_products(Vec::new(), 2);
        assert!(preview.is_empty());
        assert_eq!(preview.products().count(), 0);
    }

    #[test]
    fn zero_cap_keeps_nothing() {
        let preview = GroupedPreview::from_products(vec![product("a", Some("audio"))], 0);
        assert!(preview.is_empty());
    }
}
