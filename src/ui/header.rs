use crate::ui::navigation::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_BAR, MUTED};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar: screen title on the accent bar, then who is signed in.
pub struct Header<'a> {
    route: &'a Route,
    email: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(route: &'a Route, email: Option<&'a str>) -> Self {
        Self { route, email }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let title_style = Style::default()
            .fg(Color::Black)
            .bg(HEADER_BAR)
            .add_modifier(Modifier::BOLD);
        let mut spans = Vec::new();
        if matches!(self.route, Route::ProductDetail(_)) {
            spans.push(Span::styled(" ← ", title_style));
        }
        spans.push(Span::styled(format!(" {} ", title(self.route)), title_style));
        spans.push(Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)));
        spans.push(Span::styled(
            self.email.unwrap_or("signed out").to_string(),
            Style::default().fg(MUTED),
        ));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

pub fn title(route: &Route) -> &'static str {
    match route {
        Route::Home => "E-commerce",
        Route::Products => "Products",
        Route::ProductDetail(_) => "Details",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductKey;

    #[test]
    fn titles_follow_route() {
        assert_eq!(title(&Route::Home), "E-commerce");
        assert_eq!(title(&Route::Products), "Products");
        assert_eq!(
            title(&Route::ProductDetail(ProductKey::new("7"))),
            "Details"
        );
    }
}
