//! Image URL resolution for categories and products.

/// Shown for products with neither a thumbnail nor a gallery image.
pub const PRODUCT_PLACEHOLDER: &str = "https://cdn-icons-png.flaticon.com/512/869/869636.png";

/// Shown for categories missing from [`CATEGORY_IMAGES`].
pub const CATEGORY_FALLBACK: &str = "https://cdn-icons-png.flaticon.com/512/1828/1828817.png";

/// Banner at the top of the home screen.
pub const HOME_BANNER: &str =
    "https://i.pinimg.com/1200x/16/95/6e/16956eb9de3e27707651aff3e055c168.jpg";

/// Representative image per known category name.
pub const CATEGORY_IMAGES: &[(&str, &str)] = &[
    (
        "smartphones",
        "https://i.pinimg.com/736x/83/39/82/8339823656ee1fb3d5487e9ecd86c971.jpg",
    ),
    (
        "laptops",
        "https://i.pinimg.com/736x/ae/73/2e/ae732ecfef3e2a6c6d6d19b73d080ca6.jpg",
    ),
    (
        "audio",
        "https://i.pinimg.com/736x/1f/d1/6a/1fd16aaad2f9150a6425876d26ff4c06.jpg",
    ),
    (
        "footwear",
        "https://i.pinimg.com/1200x/ab/94/77/ab9477826708ce854e4e5b08cc7df193.jpg",
    ),
    (
        "gaming",
        "https://i.pinimg.com/474x/c1/f6/5d/c1f65d71c68a5191d7280a50fff4cdc9.jpg",
    ),
    (
        "televisions",
        "https://i.pinimg.com/1200x/70/db/b7/70dbb78aa32eaddd440250833661b086.jpg",
    ),
    (
        "home-appliances",
        "https://i.pinimg.com/736x/9c/9c/9a/9c9c9af5b47d23db3ee71fbc32575dd3.jpg",
    ),
    (
        "cameras",
        "https://i.pinimg.com/736x/8b/6b/3d/8b6b3d9602fa5c34422d4bf4f78a8989.jpg",
    ),
];

/// Image for a category name. Lookup is exact (case-sensitive).
pub fn category_image(name: &str) -> &'static str {
    CATEGORY_IMAGES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, url)| *url)
        .unwrap_or(CATEGORY_FALLBACK)
}

/// Image for a product: non-empty thumbnail, then the first gallery image,
/// then [`PRODUCT_PLACEHOLDER`].
pub fn product_image<'a>(thumbnail: Option<&'a str>, images: &'a [String]) -> &'a str {
    thumbnail
        .filter(|url| !url.is_empty())
        .or_else(|| images.first().map(String::as_str).filter(|url| !url.is_empty()))
        .unwrap_or(PRODUCT_PLACEHOLDER)
}

/// Last path segment of an image URL, for places too narrow for the full URL.
pub fn file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
