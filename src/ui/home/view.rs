use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::catalog::images::{file_name, HOME_BANNER};
use crate::catalog::{Category, CategoryState};
use crate::session::Session;
use crate::ui::home::state::PreviewState;
use crate::ui::theme::{ACCENT, ERROR, MUTED, TEXT};
use crate::ui::widgets::{product_card, spinner, truncate};

const GRID_COLUMNS: usize = 4;

/// Everything the logged-in home screen draws.
pub struct HomeView<'a> {
    pub session: &'a Session,
    pub categories: &'a CategoryState,
    pub preview: &'a PreviewState,
    pub scroll: u16,
    pub tick: usize,
}

pub fn render_home(frame: &mut Frame<'_>, area: Rect, view: &HomeView<'_>) {
    let lines = home_lines(view, area.width);
    let max_scroll = (lines.len() as u16).saturating_sub(area.height);
    let paragraph = Paragraph::new(lines).scroll((view.scroll.min(max_scroll), 0));
    frame.render_widget(paragraph, area);
}

/// Largest scroll offset that still fills `area`: content rows past the
/// viewport height.
pub fn max_home_scroll(view: &HomeView<'_>, area: Rect) -> u16 {
    let rows = u16::try_from(home_lines(view, area.width).len()).unwrap_or(u16::MAX);
    rows.saturating_sub(area.height)
}

fn home_lines(view: &HomeView<'_>, area_width: u16) -> Vec<Line<'static>> {
    let width = usize::from(area_width);
    let mut lines: Vec<Line<'static>> = Vec::new();

    let greeting = match view.session.email() {
        Some(email) => format!("Hello, {}", email),
        None => "Hello".to_string(),
    };
    lines.push(Line::from(Span::styled(
        greeting,
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        truncate(&format!("banner {}", HOME_BANNER), width),
        Style::default().fg(MUTED),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Categories"));
    if view.categories.loading {
        lines.push(loading_line(view.tick, "Loading categories"));
    } else if view.categories.categories.is_empty() {
        lines.push(Line::from(Span::styled(
            "No categories",
            Style::default().fg(MUTED),
        )));
    } else {
        lines.extend(category_grid(&view.categories.categories, width));
    }
    lines.push(Line::from(""));

    match view.preview {
        PreviewState::Loading => lines.push(loading_line(view.tick, "Loading products")),
        PreviewState::Failed(message) => lines.push(Line::from(Span::styled(
            truncate(message, width),
            Style::default().fg(ERROR),
        ))),
        PreviewState::Ready(preview) if preview.is_empty() => lines.push(Line::from(
            Span::styled("No products", Style::default().fg(MUTED)),
        )),
        PreviewState::Ready(preview) => {
            for group in preview.groups() {
                lines.push(Line::from(Span::styled(
                    group.category.clone(),
                    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
                )));
                for product in &group.products {
                    lines.extend(product_card(product, area_width, false));
                }
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[ Logout ]",
        Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
    )));
    lines
}

fn section_title(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ))
}

fn loading_line(tick: usize, label: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(spinner(tick), Style::default().fg(ACCENT)),
        Span::styled(format!(" {}", label), Style::default().fg(MUTED)),
    ])
}

/// Categories in rows of four: name, then image file name.
fn category_grid(categories: &[Category], width: usize) -> Vec<Line<'static>> {
    let cell = (width / GRID_COLUMNS).max(1);
    let text_width = cell.saturating_sub(1).max(1);
    let mut lines = Vec::new();

    for row in categories.chunks(GRID_COLUMNS) {
        let names: Vec<Span<'static>> = row
            .iter()
            .map(|category| {
                Span::styled(
                    format!("{:<cell$}", truncate(&category.name, text_width), cell = cell),
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        let images: Vec<Span<'static>> = row
            .iter()
            .map(|category| {
                Span::styled(
                    format!(
                        "{:<cell$}",
                        truncate(file_name(&category.image), text_width),
                        cell = cell
                    ),
                    Style::default().fg(MUTED),
                )
            })
            .collect();
        lines.push(Line::from(names));
        lines.push(Line::from(images));
    }
    lines
}
