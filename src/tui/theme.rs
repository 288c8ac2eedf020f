use ratatui::style::{Color, Modifier, Style};

// Emerald-and-amber palette.
pub const BG: Color = Color::Rgb(14, 18, 16);
pub const SURFACE: Color = Color::Rgb(20, 28, 24);
pub const BORDER: Color = Color::Rgb(40, 56, 46);
pub const TEXT: Color = Color::Rgb(214, 228, 218);
pub const TEXT_DIM: Color = Color::Rgb(108, 126, 112);
pub const GOLD: Color = Color::Rgb(212, 175, 55);
pub const GREEN: Color = Color::Rgb(52, 168, 112);
pub const AMBER: Color = Color::Rgb(217, 144, 56);
pub const RED: Color = Color::Rgb(190, 84, 66);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}
