use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::SeriesPoint;
use crate::stats::{Window, MAX_DAY_SCORE};
use crate::tui::theme;
use crate::utils::format::{progress_bar, spark_cell};

/// Score trend over the selected window. The 7-day window gets one row per
/// day; 30 days collapse into a sparkline so the chart still fits.
pub fn render(frame: &mut Frame, area: Rect, series: &[SeriesPoint], window: Window) {
    let block = Block::default()
        .title(Span::styled(
            format!(" Score Trend — {} ", window.display_name()),
            theme::gold(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut lines = vec![Line::from("")];

    match window {
        Window::Week => {
            for point in series {
                let bar = progress_bar(point.score, MAX_DAY_SCORE, 20);
                let bar_style = if point.score > 0 {
                    theme::green()
                } else {
                    theme::dim()
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<4}", point.label), theme::bold()),
                    Span::styled(bar, bar_style),
                    Span::styled(format!("  {:>2}", point.score), theme::gold()),
                ]));
            }
        }
        Window::Month => {
            let spark: String = series
                .iter()
                .map(|p| spark_cell(p.score, MAX_DAY_SCORE))
                .collect();
            lines.push(Line::from(vec![
                Span::styled("  ", theme::dim()),
                Span::styled(spark, theme::green()),
            ]));
            lines.push(Line::from(""));

            let first = series.first().map(|p| p.label.as_str()).unwrap_or("");
            let last = series.last().map(|p| p.label.as_str()).unwrap_or("");
            lines.push(Line::from(Span::styled(
                format!("  day {} … day {} (oldest → today)", first, last),
                theme::dim(),
            )));

            let best = series.iter().map(|p| p.score).max().unwrap_or(0);
            let active = series.iter().filter(|p| p.score > 0).count();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  best day: {}  ·  active days: {}/30", best, active),
                theme::dim(),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
