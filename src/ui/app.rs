use crate::catalog::{CategoryProvider, CategoryState};
use crate::config::CatalogConfig;
use crate::session::{Session, SessionKeeper};
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::events::{AppEvent, ProductOutcome};
use crate::ui::home::{max_home_scroll, HomeView, PreviewIntent, PreviewReducer, PreviewState};
use crate::ui::input::handle_key;
use crate::ui::layout::layout_regions;
use crate::ui::login::{LoginIntent, LoginReducer, LoginState};
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{NavIntent, NavReducer, NavigationState, Route, Tab};
use crate::ui::products::{ProductListIntent, ProductListReducer, ProductListState};
use crate::worker::{UiCommand, UiCommandSender};
use ratatui::layout::Rect;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    tick: usize,
    catalog: CatalogConfig,
    categories: CategoryProvider,
    sessions: SessionKeeper,
    commands: Option<UiCommandSender>,
    session: Option<Session>,
    navigation: NavigationState,
    login: LoginState,
    preview: PreviewState,
    products: ProductListState,
    detail: DetailState,
    home_scroll: u16,
    viewport: Option<Rect>,
}

impl App {
    pub fn new(
        catalog: CatalogConfig,
        categories: CategoryProvider,
        sessions: SessionKeeper,
    ) -> Self {
        Self {
            should_quit: false,
            tick: 0,
            catalog,
            categories,
            sessions,
            commands: None,
            session: None,
            navigation: NavigationState::default(),
            login: LoginState::default(),
            preview: PreviewState::default(),
            products: ProductListState::default(),
            detail: DetailState::default(),
            home_scroll: 0,
            viewport: None,
        }
    }

    pub fn with_commands(mut self, sender: UiCommandSender) -> Self {
        self.commands = Some(sender);
        self
    }

    /// Restores a saved session and kicks off the startup fetches.
    pub fn start(&mut self) {
        self.session = self.sessions.restore();
        self.send_command(UiCommand::LoadCategories);
        if self.session.is_some() {
            self.request_preview();
        }
    }

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Resize(cols, rows) => self.resize(cols, rows),
            AppEvent::Tick => self.on_tick(),
            AppEvent::LoginSucceeded(session) => {
                dispatch_mvi!(self, login, LoginReducer, LoginIntent::Succeeded);
                self.session = Some(session);
                self.home_scroll = 0;
                self.request_preview();
            }
            AppEvent::LoginFailed(message) => {
                dispatch_mvi!(self, login, LoginReducer, LoginIntent::Failed(message));
            }
            AppEvent::CategoriesReady => {
                tracing::debug!("Category context ready");
            }
            AppEvent::ProductsLoaded(result) => {
                let intent = match result {
                    Ok(products) => ProductListIntent::Loaded(products),
                    Err(message) => ProductListIntent::Failed(message),
                };
                dispatch_mvi!(self, products, ProductListReducer, intent);
            }
            AppEvent::PreviewLoaded(result) => {
                // A logout while the fetch was in flight drops the result.
                if self.session.is_none() {
                    return;
                }
                let intent = match result {
                    Ok(preview) => PreviewIntent::Loaded(preview),
                    Err(message) => PreviewIntent::Failed(message),
                };
                dispatch_mvi!(self, preview, PreviewReducer, intent);
            }
            AppEvent::ProductLoaded { key, outcome } => {
                let intent = match outcome {
                    ProductOutcome::Found(product) => DetailIntent::Found { key, product },
                    ProductOutcome::NotFound => DetailIntent::Missing { key },
                    ProductOutcome::Failed(message) => DetailIntent::Failed { key, message },
                };
                dispatch_mvi!(self, detail, DetailReducer, intent);
            }
        }
    }

    /// Records the terminal size and pulls the home scroll back inside it.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Some(Rect::new(0, 0, cols, rows));
        if let Some(max) = self.home_max_scroll() {
            self.home_scroll = self.home_scroll.min(max);
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn route(&self) -> &Route {
        self.navigation.current()
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// The home screen is gated: without a session it is the login form.
    pub fn is_login_form(&self) -> bool {
        self.session.is_none() && matches!(self.route(), Route::Home)
    }

    pub fn login(&self) -> &LoginState {
        &self.login
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    pub fn products(&self) -> &ProductListState {
        &self.products
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn categories(&self) -> CategoryState {
        self.categories.snapshot()
    }

    pub fn home_scroll(&self) -> u16 {
        self.home_scroll
    }

    pub fn dispatch_login(&mut self, intent: LoginIntent) {
        dispatch_mvi!(self, login, LoginReducer, intent);
    }

    pub fn submit_login(&mut self) {
        if self.login.submitting {
            return;
        }
        let credentials = self.login.credentials();
        dispatch_mvi!(self, login, LoginReducer, LoginIntent::Submit);
        if !self.send_command(UiCommand::Login(credentials)) {
            dispatch_mvi!(
                self,
                login,
                LoginReducer,
                LoginIntent::Failed("Login is unavailable".to_string())
            );
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        let entering = self.navigation.tab() != tab;
        let at_root = self.navigation.depth() == 1;
        if !entering && at_root {
            return;
        }
        dispatch_mvi!(self, navigation, NavReducer, NavIntent::SwitchTab(tab));
        self.close_detail_if_left();
        if !entering {
            return;
        }
        match tab {
            Tab::Products => self.request_products(),
            Tab::Home if self.session.is_some() => {
                self.home_scroll = 0;
                self.request_preview();
            }
            Tab::Home => {}
        }
    }

    pub fn back(&mut self) {
        dispatch_mvi!(self, navigation, NavReducer, NavIntent::Back);
        self.close_detail_if_left();
    }

    pub fn move_selection(&mut self, down: bool) {
        let intent = if down {
            ProductListIntent::MoveDown
        } else {
            ProductListIntent::MoveUp
        };
        dispatch_mvi!(self, products, ProductListReducer, intent);
    }

    /// Opens the detail screen for the highlighted product. Products
    /// without a navigation key stay put.
    pub fn open_selected_product(&mut self) {
        let Some(key) = self.products.selected_key().cloned() else {
            return;
        };
        dispatch_mvi!(self, navigation, NavReducer, NavIntent::OpenProduct(key.clone()));
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Open(key.clone()));
        self.send_command(UiCommand::LoadProduct { key });
    }

    /// Scrolls the home content one row, never past its last screenful.
    pub fn scroll_home(&mut self, down: bool) {
        self.home_scroll = if down {
            let next = self.home_scroll.saturating_add(1);
            match self.home_max_scroll() {
                Some(max) => next.min(max),
                None => next,
            }
        } else {
            self.home_scroll.saturating_sub(1)
        };
    }

    /// Forgets the session locally and on disk, back to the login form.
    pub fn logout(&mut self) {
        if self.session.is_none() {
            return;
        }
        if let Err(err) = self.sessions.clear() {
            tracing::warn!(error = %err, "Failed to clear stored session");
        }
        self.session = None;
        self.login = LoginState::default();
        self.preview = PreviewState::default();
        self.home_scroll = 0;
        dispatch_mvi!(self, navigation, NavReducer, NavIntent::SwitchTab(Tab::Home));
        self.close_detail_if_left();
        tracing::info!("Logged out");
    }

    /// `None` until the terminal size is known or while signed out.
    fn home_max_scroll(&self) -> Option<u16> {
        let area = self.viewport?;
        let session = self.session.as_ref()?;
        let (_, body, _) = layout_regions(area);
        let categories = self.categories.snapshot();
        let view = HomeView {
            session,
            categories: &categories,
            preview: &self.preview,
            scroll: self.home_scroll,
            tick: self.tick,
        };
        Some(max_home_scroll(&view, body))
    }

    fn request_preview(&mut self) {
        dispatch_mvi!(self, preview, PreviewReducer, PreviewIntent::Reload);
        let command = UiCommand::LoadPreview {
            limit: self.catalog.preview_page_size,
            per_category: self.catalog.preview_per_category,
        };
        if !self.send_command(command) {
            dispatch_mvi!(
                self,
                preview,
                PreviewReducer,
                PreviewIntent::Failed("Products are unavailable".to_string())
            );
        }
    }

    fn request_products(&mut self) {
        dispatch_mvi!(self, products, ProductListReducer, ProductListIntent::Reload);
        let command = UiCommand::LoadProducts {
            limit: self.catalog.list_page_size,
        };
        if !self.send_command(command) {
            dispatch_mvi!(
                self,
                products,
                ProductListReducer,
                ProductListIntent::Failed("Products are unavailable".to_string())
            );
        }
    }

    fn close_detail_if_left(&mut self) {
        if !matches!(self.route(), Route::ProductDetail(_)) {
            dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Close);
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.commands else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to queue command");
                false
            }
        }
    }
}
