use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;

/// Banner showing today's motivational line (or the awaiting-entry
/// placeholder while no log exists for today).
pub fn render(frame: &mut Frame, area: Rect, line: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::amber())
        .style(theme::surface());

    let text = Line::from(Span::styled(
        format!("« {} »", line),
        theme::gold().add_modifier(Modifier::ITALIC),
    ));

    let paragraph = Paragraph::new(vec![text])
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
