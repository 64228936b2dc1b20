use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::login::state::{LoginField, LoginState};
use crate::ui::theme::{ACCENT, ERROR, GLOBAL_BORDER, MUTED, TEXT};
use crate::ui::widgets::{spinner, truncate};

const FORM_WIDTH: u16 = 48;
const FIELD_WIDTH: usize = 36;

pub fn render_login(frame: &mut Frame<'_>, area: Rect, state: &LoginState, tick: usize) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Welcome Back",
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let masked = "•".repeat(state.password.char_count());
    lines.extend(field_lines(
        "Email",
        &state.email,
        state.focus == LoginField::Email,
    ));
    lines.extend(field_lines(
        "Password",
        &masked,
        state.focus == LoginField::Password,
    ));

    let button = if state.submitting {
        format!("{} Signing in", spinner(tick))
    } else {
        "[ Login ]".to_string()
    };
    lines.push(Line::from(Span::styled(
        button,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));

    if let Some(error) = &state.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            truncate(error, FIELD_WIDTH),
            Style::default().fg(ERROR),
        )));
    }

    let height = lines.len() as u16 + 2;
    let rect = centered_rect_by_size(area, FORM_WIDTH, height);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn field_lines(label: &'static str, value: &str, focused: bool) -> Vec<Line<'static>> {
    let label_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    };
    let cursor = if focused { "▏" } else { "" };
    let shown = tail(value, FIELD_WIDTH.saturating_sub(1));
    vec![
        Line::from(Span::styled(label, label_style)),
        Line::from(vec![
            Span::styled(format!(" {}", shown), Style::default().fg(TEXT)),
            Span::styled(cursor, Style::default().fg(ACCENT)),
        ]),
        Line::from(""),
    ]
}

/// Last `width` characters, so the cursor end of a long value stays visible.
fn tail(value: &str, width: usize) -> String {
    let count = value.chars().count();
    value.chars().skip(count.saturating_sub(width)).collect()
}
