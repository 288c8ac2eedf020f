use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::{PrayerRecord, PrayerSlot, PrayerTiming};
use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    prayers: &PrayerRecord,
    focus_idx: usize,
    focused: bool,
) {
    let block = Block::default()
        .title(Span::styled(" Prayers ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused { theme::gold() } else { theme::border() })
        .style(theme::surface());

    let items: Vec<ListItem> = PrayerSlot::all()
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let timing = prayers.get(*slot);
            let is_focused = focused && i == focus_idx;

            let name_style = if is_focused {
                theme::gold().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };

            let (icon, status_style) = match timing {
                PrayerTiming::Early => ("●", theme::green()),
                PrayerTiming::Mid => ("◕", theme::amber()),
                PrayerTiming::Late => ("◑", theme::amber()),
                PrayerTiming::None => ("○", theme::dim()),
            };

            let points = if timing.is_prayed() {
                format!("  {} (+{})", timing.display_name(), timing.points())
            } else {
                "  not prayed".to_string()
            };

            let line = Line::from(vec![
                Span::styled(format!("  {:<16}", slot.display_name()), name_style),
                Span::styled(icon, status_style),
                Span::styled(points, theme::dim()),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
