//! Building blocks shared by the screens: product cards, spinner, text
//! clamping.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::catalog::Product;
use crate::ui::theme::{MUTED, PRICE, SELECTED, TEXT};

/// Rows taken by one [`product_card`], separator included.
pub const CARD_HEIGHT: u16 = 6;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Cuts `text` to `width` characters, ending in `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Word-wraps `text` to `width` and keeps at most `max_lines` lines. The
/// last kept line ends in `…` when text was dropped.
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }
        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
        }
        // Words wider than a line are hard-split.
        let chars: Vec<char> = word.chars().collect();
        let mut chunks = chars.chunks(width).peekable();
        current_len = 0;
        while let Some(chunk) = chunks.next() {
            let piece: String = chunk.iter().collect();
            if chunks.peek().is_some() {
                lines.push(piece);
            } else {
                current_len = chunk.len();
                current = piece;
            }
        }
    }
    if current_len > 0 {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let kept: String = last.chars().take(width - 1).collect();
            *last = format!("{}…", kept);
        }
    }
    lines
}

/// Card for list and preview screens: image, two-line title, price and a
/// quantity stepper fixed at 1.
pub fn product_card(product: &Product, width: u16, selected: bool) -> Vec<Line<'static>> {
    let inner = usize::from(width).saturating_sub(4).max(1);
    let marker = if selected { "▶ " } else { "  " };
    let base = if selected {
        Style::default().bg(SELECTED)
    } else {
        Style::default()
    };

    let mut title = clamp_lines(&product.title, inner, 2);
    title.resize(2, String::new());

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, base.fg(TEXT)),
        Span::styled(
            truncate(&format!("img {}", product.image_url()), inner),
            base.fg(MUTED),
        ),
    ])];
    for row in title {
        lines.push(Line::from(vec![
            Span::styled("  ", base),
            Span::styled(row, base.fg(TEXT).add_modifier(Modifier::BOLD)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("  ", base),
        Span::styled(
            product.price_label(),
            base.fg(PRICE).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  ", base),
        Span::styled("[−]", base.fg(TEXT)),
        Span::styled("  1  ", base.fg(TEXT).add_modifier(Modifier::BOLD)),
        Span::styled("[+]", base.fg(TEXT)),
    ]));
    lines.push(Line::from(Span::styled(
        "─".repeat(usize::from(width)),
        Style::default().fg(MUTED),
    )));
    lines
}

/// Centered single-line message, used for loading and empty states.
pub fn render_centered(frame: &mut Frame<'_>, area: Rect, line: Line<'static>) {
    if area.height == 0 {
        return;
    }
    let row = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}
