use shopterm::catalog::{GroupedPreview, Product, DEFAULT_PER_CATEGORY, UNCATEGORIZED};

fn product(title: &str, category: Option<&str>) -> Product {
    Product {
        title: title.to_string(),
        category: category.map(str::to_string),
        ..Product::default()
    }
}

fn titles(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.title.as_str()).collect()
}

#[test]
fn keeps_first_two_per_category_in_arrival_order() {
    let products = vec![
        product("p1", Some("audio")),
        product("p2", Some("gaming")),
        product("p3", Some("audio")),
        product("p4", Some("audio")),
        product("p5", Some("gaming")),
        product("p6", Some("gaming")),
    ];

    let preview = GroupedPreview::from_products(products, DEFAULT_PER_CATEGORY);

    let order: Vec<&str> = preview.groups().iter().map(|g| g.category.as_str()).collect();
    assert_eq!(order, vec!["audio", "gaming"]);
    assert_eq!(titles(preview.get("audio").unwrap()), vec!["p1", "p3"]);
    assert_eq!(titles(preview.get("gaming").unwrap()), vec!["p2", "p5"]);
    assert_eq!(preview.product_count(), 4);
}

#[test]
fn never_exceeds_cap_for_any_mix() {
    let categories = ["a", "b", "c"];
    for cap in 1..5 {
        for total in 0..30 {
            let products = (0..total).map(|i| {
                product(
                    &format!("p{}", i),
                    Some(categories[(i * 7 + i / 3) % categories.len()]),
                )
            });
            let preview = GroupedPreview::from_products(products, cap);
            for group in preview.groups() {
                assert!(group.products.len() <= cap);
                assert!(!group.products.is_empty());
            }
            assert!(preview.product_count() <= total);
        }
    }
}

#[test]
fn products_without_category_are_grouped_together() {
    let preview = GroupedPreview::from_products(
        vec![product("x", None), product("y", Some("audio")), product("z", None)],
        2,
    );
    assert_eq!(titles(preview.get(UNCATEGORIZED).unwrap()), vec!["x", "z"]);
}

#[test]
fn empty_input_is_empty_preview() {
    let preview = GroupedPreview::from_products(Vec::new(), 2);
    assert!(preview.is_empty());
    assert_eq!(preview.product_count(), 0);
}
