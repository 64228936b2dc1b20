use crate::ui::app::App;
use crate::ui::login::LoginIntent;
use crate::ui::navigation::{Route, Tab};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.is_login_form() {
        handle_login_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => app.back(),
        KeyCode::Char('1') | KeyCode::F(1) => app.switch_tab(Tab::Home),
        KeyCode::Char('2') | KeyCode::F(2) | KeyCode::Char('p') => app.switch_tab(Tab::Products),
        KeyCode::Char('l') => app.logout(),
        KeyCode::Up | KeyCode::Down => {
            let down = key.code == KeyCode::Down;
            match app.route() {
                Route::Home => app.scroll_home(down),
                Route::Products => app.move_selection(down),
                Route::ProductDetail(_) => {}
            }
        }
        KeyCode::Enter if matches!(app.route(), Route::Products) => app.open_selected_product(),
        _ => {}
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_login(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.dispatch_login(LoginIntent::NextField)
        }
        KeyCode::Backspace => app.dispatch_login(LoginIntent::Erase),
        KeyCode::F(2) => app.switch_tab(Tab::Products),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.dispatch_login(LoginIntent::Type(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
