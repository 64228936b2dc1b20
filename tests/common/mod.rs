//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mock_backend::{MockResponse, MockStorefront};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::{json, Value};
use shopterm::api::StorefrontClient;
use shopterm::catalog::CategoryProvider;
use shopterm::config::{ApiConfig, CatalogConfig};
use shopterm::session::{MemorySessionStore, Session, SessionKeeper, SessionStore};
use shopterm::ui::app::App;
use shopterm::ui::events::{AppEvent, EventHandler};
use shopterm::ui::render::draw;
use shopterm::worker::{Worker, COMMAND_BUFFER};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

pub const WAIT: Duration = Duration::from_secs(5);

/// Client config pointed at `base_url` with short timeouts.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

/// Write `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn product_json(id: &str, title: &str, category: &str, price: f64) -> Value {
    json!({
        "_id": id,
        "title": title,
        "price": price,
        "category": category,
        "thumbnail": format!("https://cdn.example.com/{}.png", id),
        "images": [],
        "stock": 5,
        "rating": 4.5,
    })
}

pub fn login_payload(email: &str) -> Value {
    json!({
        "user": { "email": email, "name": "Test User" },
        "token": "token-123",
    })
}

pub fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(ch: char) -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

/// Draw `app` into a `width` x `height` test terminal and return the
/// screen as text, one line per row.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// App wired to a real worker and a mock storefront, driven from the test
/// thread the way the event loop drives it.
pub struct Harness {
    pub app: App,
    pub events: EventHandler,
    pub mock: MockStorefront,
    pub store: Arc<MemorySessionStore>,
    pub categories: CategoryProvider,
    runtime: Runtime,
}

impl Harness {
    pub fn new() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("Failed to build runtime");
        let mock = runtime.block_on(MockStorefront::start());

        let client = StorefrontClient::new(&api_config(&mock.base_url())).unwrap();
        let store = Arc::new(MemorySessionStore::new());
        let sessions = SessionKeeper::new(store.clone() as Arc<dyn SessionStore>);
        let categories = CategoryProvider::new();
        let events = EventHandler::detached();

        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let worker = Worker::new(
            client,
            categories.clone(),
            sessions.clone(),
            events.sender(),
        );
        runtime.spawn(worker.run(command_rx));

        let app = App::new(CatalogConfig::default(), categories.clone(), sessions)
            .with_commands(command_tx);

        Self {
            app,
            events,
            mock,
            store,
            categories,
            runtime,
        }
    }

    pub fn route(&self, method: &str, path: &str, resp: MockResponse) {
        self.runtime.block_on(self.mock.route(method, path, resp));
    }

    pub fn requests_to(&self, path: &str) -> Vec<mock_backend::CapturedRequest> {
        self.runtime.block_on(self.mock.requests_to(path))
    }

    pub fn send(&mut self, event: AppEvent) {
        self.app.on_event(event);
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.send(key(KeyCode::Char(ch)));
        }
    }

    /// Feeds worker events into the app until `done` holds or `timeout`
    /// passes. Returns whether `done` held.
    pub fn pump_until(&mut self, timeout: Duration, done: impl Fn(&App) -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if done(&self.app) {
                return true;
            }
            if let Ok(event) = self.events.next(Duration::from_millis(20)) {
                self.app.on_event(event);
            }
        }
        done(&self.app)
    }

    pub fn screen(&self) -> String {
        render_to_string(&self.app, 80, 40)
    }
}
