use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::Product;
use crate::ui::detail::state::DetailState;
use crate::ui::theme::{
    ACCENT, DETAIL_PRICE, ERROR, GLOBAL_BORDER, IN_STOCK, MUTED, OUT_OF_STOCK, RATING, TEXT,
};
use crate::ui::widgets::{render_centered, spinner, truncate};

pub const NOT_FOUND_MESSAGE: &str = "Product not found";

/// Label/value rows of the "Product Info" box. Missing or empty values
/// show as `-`.
pub fn info_rows(product: &Product) -> Vec<(&'static str, String)> {
    let value = |field: &Option<String>| {
        field
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or("-")
            .to_string()
    };
    vec![
        ("Brand", value(&product.brand)),
        ("Category", value(&product.category)),
        ("Warranty", value(&product.warranty_information)),
        ("Shipping", value(&product.shipping_information)),
    ]
}

pub fn render_detail(frame: &mut Frame<'_>, area: Rect, state: &DetailState, tick: usize) {
    match state {
        DetailState::Closed => {}
        DetailState::Loading { .. } => render_centered(
            frame,
            area,
            Line::from(Span::styled(spinner(tick), Style::default().fg(ACCENT))),
        ),
        DetailState::NotFound { .. } => render_centered(
            frame,
            area,
            Line::from(Span::styled(NOT_FOUND_MESSAGE, Style::default().fg(TEXT))),
        ),
        DetailState::Failed { message, .. } => render_centered(
            frame,
            area,
            Line::from(vec![
                Span::styled("Could not load product: ", Style::default().fg(ERROR)),
                Span::styled(message.clone(), Style::default().fg(MUTED)),
            ]),
        ),
        DetailState::Loaded { product, .. } => render_product(frame, area, product),
    }
}

fn render_product(frame: &mut Frame<'_>, area: Rect, product: &Product) {
    let [content, footer] = split_footer(area);
    let width = usize::from(content.width);

    let mut lines = vec![
        Line::from(Span::styled(
            truncate(&format!("img {}", product.image_url()), width),
            Style::default().fg(MUTED),
        )),
        Line::from(""),
        Line::from(Span::styled(
            product.title.clone(),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
    ];

    let rating = product
        .rating
        .map(|rating| rating.to_string())
        .unwrap_or_else(|| "-".to_string());
    let (stock_label, stock_color) = if product.in_stock() {
        ("In Stock", IN_STOCK)
    } else {
        ("Out of Stock", OUT_OF_STOCK)
    };
    lines.push(Line::from(vec![
        Span::styled("★ ", Style::default().fg(RATING)),
        Span::styled(rating, Style::default().fg(TEXT)),
        Span::raw("   "),
        Span::styled(
            format!(" {} ", stock_label),
            Style::default()
                .fg(stock_color)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        product.price_label(),
        Style::default()
            .fg(DETAIL_PRICE)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Description"));
    lines.push(Line::from(Span::styled(
        product.description.clone().unwrap_or_default(),
        Style::default().fg(MUTED),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Product Info"));
    for (label, value) in info_rows(product) {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", label), Style::default().fg(MUTED)),
            Span::styled(value, Style::default().fg(TEXT)),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        content,
    );

    // The cart does not exist yet; the button is drawn but does nothing.
    let button = Paragraph::new(Line::from(Span::styled(
        "🛒 Add to Cart",
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(button, footer);
}

fn section_title(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ))
}

fn split_footer(area: Rect) -> [Rect; 2] {
    let footer_height = if area.height >= 6 { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
        .split(area);
    [chunks[0], chunks[1]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_rows_fill_missing_values_with_dash() {
        let product = Product {
            brand: Some("Apple".to_string()),
            category: Some("smartphones".to_string()),
            warranty_information: Some("  ".to_string()),
            ..Product::default()
        };
        assert_eq!(
            info_rows(&product),
            vec![
                ("Brand", "Apple".to_string()),
                ("Category", "smartphones".to_string()),
                ("Warranty", "-".to_string()),
                ("Shipping", "-".to_string()),
            ]
        );
    }
}
