use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::View;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, view: &View) {
    let hints: &[(&str, &str)] = match view {
        View::Tracker => &[
            ("[Enter]", " cycle/toggle  "),
            ("[Tab]", " section  "),
            ("[← →]", " day  "),
            ("[s]", " save  "),
            ("[g]", " dashboard  "),
            ("[?]", " help  "),
            ("[Esc]", " quit"),
        ],
        View::Dashboard => &[
            ("[w]", " 7/30 days  "),
            ("[C]", " clear all  "),
            ("[g]", " tracker  "),
            ("[?]", " help  "),
            ("[Esc]", " back"),
        ],
        View::Help => &[("[Esc]", " close")],
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(*key, theme::gold()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
