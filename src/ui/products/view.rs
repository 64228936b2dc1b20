use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::layout::scroll_offset;
use crate::ui::products::state::ProductListState;
use crate::ui::theme::{ACCENT, ERROR, MUTED};
use crate::ui::widgets::{product_card, render_centered, spinner, CARD_HEIGHT};

pub fn render_products(frame: &mut Frame<'_>, area: Rect, state: &ProductListState, tick: usize) {
    match state {
        ProductListState::Loading => render_centered(
            frame,
            area,
            Line::from(vec![
                Span::styled(spinner(tick), Style::default().fg(ACCENT)),
                Span::styled(" Loading products", Style::default().fg(MUTED)),
            ]),
        ),
        ProductListState::Failed { message } => render_centered(
            frame,
            area,
            Line::from(Span::styled(message.clone(), Style::default().fg(ERROR))),
        ),
        ProductListState::Loaded { products, .. } if products.is_empty() => render_centered(
            frame,
            area,
            Line::from(Span::styled("No products", Style::default().fg(MUTED))),
        ),
        ProductListState::Loaded { products, selected } => {
            let lines: Vec<Line<'static>> = products
                .iter()
                .enumerate()
                .flat_map(|(idx, product)| product_card(product, area.width, idx == *selected))
                .collect();
            let offset = scroll_offset(*selected, CARD_HEIGHT, area.height);
            frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);

            if let Some(product) = state.selected_product() {
                if product.key().is_none() && area.height > 0 {
                    let hint = Rect {
                        y: area.y + area.height - 1,
                        height: 1,
                        ..area
                    };
                    frame.render_widget(
                        Paragraph::new(Span::styled(
                            "This product has no id and cannot be opened",
                            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
                        )),
                        hint,
                    );
                }
            }
        }
    }
}
