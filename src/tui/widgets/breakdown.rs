use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::collections::BTreeMap;

use crate::models::PrayerTiming;
use crate::tui::theme;
use crate::utils::format::progress_bar;

/// Timing quality within the window. Buckets with a zero count never appear.
pub fn render(frame: &mut Frame, area: Rect, breakdown: &BTreeMap<PrayerTiming, u32>) {
    let block = Block::default()
        .title(Span::styled(" Timing Quality ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut lines = vec![Line::from("")];

    if breakdown.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No prayers in this window yet",
            theme::dim(),
        )));
    } else {
        let max = breakdown.values().copied().max().unwrap_or(1);
        for (timing, count) in breakdown {
            let style = match timing {
                PrayerTiming::Early => theme::green(),
                PrayerTiming::Mid => theme::amber(),
                _ => theme::red(),
            };
            let bar = progress_bar(*count, max, 12);
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<10}", timing.display_name()), theme::bold()),
                Span::styled(bar, style),
                Span::styled(format!("  {}", count), theme::dim()),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
