use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;
use crate::utils::dates;

pub fn render(frame: &mut Frame, area: Rect, selected: NaiveDate) {
    let title_line = Line::from(vec![
        Span::styled("  دستیار  ", theme::gold().add_modifier(Modifier::BOLD)),
        Span::styled("dastyar", theme::gold()),
    ]);

    let selected_str = selected.format("%A, %b %d, %Y").to_string();
    let is_today = selected == dates::today();
    let date_line = Line::from(vec![
        Span::styled(selected_str, theme::amber()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(dates::iso(selected), theme::dim()),
        if is_today {
            Span::styled("  (today)", theme::green())
        } else {
            Span::styled("  [← →] change day", theme::dim())
        },
    ]);

    let text = vec![title_line, Line::from(""), date_line];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
