use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::DailyLog;
use crate::stats::{score_of, MAX_DAY_SCORE};
use crate::tui::theme;
use crate::utils::format::progress_bar;

/// Live score preview for the day being edited, plus a saved/unsaved marker.
pub fn render(frame: &mut Frame, area: Rect, log: &DailyLog, dirty: bool) {
    let block = Block::default()
        .title(Span::styled(" Score ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let score = score_of(log);
    let bar = progress_bar(score, MAX_DAY_SCORE, 18);

    let score_line = Line::from(vec![
        Span::styled("  ", theme::dim()),
        Span::styled(bar, theme::green()),
        Span::styled(
            format!("  {} / {}", score, MAX_DAY_SCORE),
            theme::gold().add_modifier(Modifier::BOLD),
        ),
    ]);

    let detail_line = Line::from(Span::styled(
        format!(
            "  {} prayers  ·  {} duas",
            log.prayer_count(),
            log.dua_count()
        ),
        theme::dim(),
    ));

    let state_line = if dirty {
        Line::from(Span::styled("  unsaved — [s] to save", theme::amber()))
    } else {
        Line::from(Span::styled("  ✓ saved", theme::green()))
    };

    let text = vec![
        Line::from(""),
        score_line,
        Line::from(""),
        detail_line,
        Line::from(""),
        state_line,
    ];
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
