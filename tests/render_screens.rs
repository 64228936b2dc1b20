mod common;

use common::{key, render_to_string};
use crossterm::event::KeyCode;
use serde_json::json;
use shopterm::catalog::{CategoryProvider, GroupedPreview, Product, ProductKey};
use shopterm::config::CatalogConfig;
use shopterm::session::{MemorySessionStore, Session, SessionKeeper};
use shopterm::ui::app::App;
use shopterm::ui::events::{AppEvent, ProductOutcome};
use std::sync::Arc;

/// App with no worker behind it; tests feed results in as events.
fn offline_app(session: Option<Session>) -> (App, CategoryProvider) {
    let store = match session {
        Some(session) => MemorySessionStore::with_session(session),
        None => MemorySessionStore::new(),
    };
    let categories = CategoryProvider::new();
    let mut app = App::new(
        CatalogConfig::default(),
        categories.clone(),
        SessionKeeper::new(Arc::new(store)),
    );
    app.start();
    (app, categories)
}

fn phone() -> Product {
    Product {
        object_id: Some(ProductKey::new("p1")),
        title: "Pixel 9".to_string(),
        price: Some(549.0),
        category: Some("smartphones".to_string()),
        stock: Some(0.0),
        rating: Some(4.5),
        brand: Some("Google".to_string()),
        description: Some("A phone".to_string()),
        ..Product::default()
    }
}

/// Opens the detail screen for `product` from the product list.
fn open_detail(app: &mut App, product: Product) -> ProductKey {
    let product_key = product.key().cloned().unwrap();
    app.on_event(key(KeyCode::F(2)));
    app.on_event(AppEvent::ProductsLoaded(Ok(vec![product])));
    app.on_event(key(KeyCode::Enter));
    product_key
}

#[test]
fn signed_out_home_shows_login_form() {
    let (app, _) = offline_app(None);
    let screen = render_to_string(&app, 80, 30);
    assert!(screen.contains("Welcome Back"));
    assert!(screen.contains("[ Login ]"));
    assert!(screen.contains("signed out"));
}

#[test]
fn password_is_masked() {
    let (mut app, _) = offline_app(None);
    app.on_event(key(KeyCode::Tab));
    for ch in "secret".chars() {
        app.on_event(key(KeyCode::Char(ch)));
    }
    let screen = render_to_string(&app, 80, 30);
    assert!(!screen.contains("secret"));
    assert!(screen.contains("••••••"));
}

#[test]
fn signed_in_home_shows_greeting_categories_and_preview() {
    let session = Session::from_value(json!({ "email": "ada@example.com" }));
    let (mut app, categories) = offline_app(Some(session));
    categories.finish(Ok(vec!["smartphones".to_string(), "gaming".to_string()]));
    app.on_event(AppEvent::PreviewLoaded(Ok(GroupedPreview::from_products(
        vec![phone()],
        2,
    ))));

    let screen = render_to_string(&app, 100, 60);
    assert!(screen.contains("E-commerce"));
    assert!(screen.contains("Hello, ada@example.com"));
    assert!(screen.contains("Categories"));
    assert!(screen.contains("gaming"));
    assert!(screen.contains("Pixel 9"));
    assert!(screen.contains("₹549"));
    assert!(screen.contains("[ Logout ]"));
}

#[test]
fn product_list_shows_cards_and_failure() {
    let (mut app, _) = offline_app(None);
    app.on_event(key(KeyCode::F(2)));
    app.on_event(AppEvent::ProductsLoaded(Err(
        "Could not reach the store".to_string()
    )));
    let screen = render_to_string(&app, 80, 30);
    assert!(screen.contains("Products"));
    assert!(screen.contains("Could not reach the store"));

    app.on_event(AppEvent::ProductsLoaded(Ok(vec![phone()])));
    let screen = render_to_string(&app, 80, 30);
    assert!(screen.contains("Pixel 9"));
    assert!(screen.contains("[−]  1  [+]"));
}

#[test]
fn unknown_product_shows_not_found() {
    let (mut app, _) = offline_app(None);
    let product_key = open_detail(&mut app, phone());
    app.on_event(AppEvent::ProductLoaded {
        key: product_key,
        outcome: ProductOutcome::NotFound,
    });

    let screen = render_to_string(&app, 80, 30);
    assert!(screen.contains("Details"));
    assert!(screen.contains("Product not found"));
}

#[test]
fn loaded_detail_shows_badge_price_and_info_rows() {
    let (mut app, _) = offline_app(None);
    let product_key = open_detail(&mut app, phone());
    app.on_event(AppEvent::ProductLoaded {
        key: product_key,
        outcome: ProductOutcome::Found(phone()),
    });

    let screen = render_to_string(&app, 80, 40);
    assert!(screen.contains("Pixel 9"));
    assert!(screen.contains("★ 4.5"));
    assert!(screen.contains("Out of Stock"));
    assert!(screen.contains("₹549"));
    assert!(screen.contains("Description"));
    assert!(screen.contains("Product Info"));
    assert!(screen.contains("Google"));
    assert!(screen.contains("Warranty"));
    assert!(screen.contains("Add to Cart"));
}

#[test]
fn failed_detail_is_not_reported_as_missing() {
    let (mut app, _) = offline_app(None);
    let product_key = open_detail(&mut app, phone());
    app.on_event(AppEvent::ProductLoaded {
        key: product_key,
        outcome: ProductOutcome::Failed("Could not reach the store".to_string()),
    });

    let screen = render_to_string(&app, 80, 30);
    assert!(!screen.contains("Product not found"));
    assert!(screen.contains("Could not reach the store"));
}

#[test]
fn home_scroll_stops_at_last_screenful() {
    let session = Session::from_value(json!({ "email": "ada@example.com" }));
    let (mut app, categories) = offline_app(Some(session));
    categories.finish(Ok(vec!["smartphones".to_string()]));
    app.on_event(AppEvent::PreviewLoaded(Ok(GroupedPreview::from_products(
        vec![phone()],
        2,
    ))));
    app.on_event(AppEvent::Resize(80, 12));

    for _ in 0..50 {
        app.on_event(key(KeyCode::Down));
    }
    let bottom = app.home_scroll();
    assert!(bottom > 0 && bottom < 50, "scroll stopped at {}", bottom);
    assert!(render_to_string(&app, 80, 12).contains("[ Logout ]"));

    app.on_event(key(KeyCode::Up));
    assert_eq!(app.home_scroll(), bottom - 1);

    app.on_event(AppEvent::Resize(80, 60));
    assert_eq!(app.home_scroll(), 0);
}
