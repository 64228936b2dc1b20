use crate::ui::navigation::Route;
use crate::ui::theme::{GLOBAL_BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the current screen plus the version on the right.
pub struct Footer<'a> {
    route: &'a Route,
    signed_in: bool,
}

impl<'a> Footer<'a> {
    pub fn new(route: &'a Route, signed_in: bool) -> Self {
        Self { route, signed_in }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = hints(self.route, self.signed_in);
        let version = format!("v{} ", VERSION);

        // Char counts, not bytes: hints contain box-drawing characters.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

pub fn hints(route: &Route, signed_in: bool) -> &'static str {
    match route {
        Route::Home if !signed_in => {
            " Tab: Next field │ Enter: Login │ F2: Products │ Ctrl+C: Quit"
        }
        Route::Home => " ↑↓: Scroll │ p: Products │ l: Logout │ q: Quit",
        Route::Products => " ↑↓: Select │ Enter: Open │ 1: Home │ q: Quit",
        Route::ProductDetail(_) => " Esc: Back │ 1: Home │ 2: Products │ q: Quit",
    }
}
