use crate::session::Session;
use crate::ui::app::App;
use crate::ui::detail::render_detail;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::home::{render_home, HomeView};
use crate::ui::layout::layout_regions;
use crate::ui::login::render_login;
use crate::ui::navigation::Route;
use crate::ui::products::render_products;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let route = app.route();
    let email = app.session().and_then(Session::email);

    frame.render_widget(Header::new(route, email).widget(), header);
    frame.render_widget(Clear, body);
    match route {
        Route::Home => match app.session() {
            None => render_login(frame, body, app.login(), app.tick()),
            Some(session) => {
                let categories = app.categories();
                let view = HomeView {
                    session,
                    categories: &categories,
                    preview: app.preview(),
                    scroll: app.home_scroll(),
                    tick: app.tick(),
                };
                render_home(frame, body, &view);
            }
        },
        Route::Products => render_products(frame, body, app.products(), app.tick()),
        Route::ProductDetail(_) => render_detail(frame, body, app.detail(), app.tick()),
    }
    frame.render_widget(Footer::new(route, app.is_logged_in()).widget(footer), footer);
}
