use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::{DailyLog, Dua};
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, log: &DailyLog, focus_idx: usize, focused: bool) {
    let block = Block::default()
        .title(Span::styled(" Duas ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused { theme::gold() } else { theme::border() })
        .style(theme::surface());

    let items: Vec<ListItem> = Dua::all()
        .iter()
        .enumerate()
        .map(|(i, dua)| {
            let done = log.has_dua(*dua);
            let is_focused = focused && i == focus_idx;

            let name_style = if is_focused {
                theme::gold().add_modifier(Modifier::BOLD)
            } else if done {
                theme::bold()
            } else {
                theme::dim()
            };

            let icon = if done {
                Span::styled("●", theme::green())
            } else {
                Span::styled("○", theme::dim())
            };

            let line = Line::from(vec![
                Span::styled(format!("  {:<20}", dua.display_name()), name_style),
                icon,
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
