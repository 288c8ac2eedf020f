use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::Totals;
use crate::tui::theme;

/// All-time tallies, never limited to the dashboard window.
pub fn render(frame: &mut Frame, area: Rect, totals: &Totals) {
    let block = Block::default()
        .title(Span::styled(" All Time ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Prayers recorded  ", theme::dim()),
            Span::styled(
                format!("{}", totals.total_prayers),
                theme::green().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Duas read         ", theme::dim()),
            Span::styled(
                format!("{}", totals.total_duas),
                theme::amber().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
