use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::collections::BTreeMap;
use std::sync::mpsc;
use std::thread;

use crate::config::AppConfig;
use crate::models::{DailyLog, Dua, PrayerSlot, PrayerTiming, SeriesPoint, Totals};
use crate::motivation::{fetch_or_fallback, GeminiProvider, AWAITING_ENTRY};
use crate::stats::{build_series, quality_breakdown, totals, Window};
use crate::store::LogStore;
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{
    breakdown, duas, header, motivation, prayers, scorecard, statusbar, totals as totals_widget,
    trend,
};
use crate::utils::dates;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Tracker,
    Dashboard,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FocusSection {
    Prayers,
    Duas,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub store: LogStore,
    pub focus_section: FocusSection,
    pub focus_idx: usize,
    pub should_quit: bool,
    pub show_clear_confirm: bool,

    // Entry form state: local edits for one day, written through on save.
    pub selected_date: NaiveDate,
    pub draft: DailyLog,
    pub dirty: bool,

    // Derived state, recomputed from the store on every mutation.
    pub window: Window,
    pub series: Vec<SeriesPoint>,
    pub totals: Totals,
    pub breakdown: BTreeMap<PrayerTiming, u32>,

    pub motivation_line: String,
    next_fetch_seq: u64,
    applied_seq: u64,
}

impl App {
    pub fn new(store: LogStore, config: AppConfig) -> Self {
        let today = dates::today();
        let draft = store.get_or_empty(&dates::iso(today));
        let window = config.default_window();

        let mut app = App {
            view: View::Tracker,
            config,
            store,
            focus_section: FocusSection::Prayers,
            focus_idx: 0,
            should_quit: false,
            show_clear_confirm: false,
            selected_date: today,
            draft,
            dirty: false,
            window,
            series: Vec::new(),
            totals: Totals::default(),
            breakdown: BTreeMap::new(),
            motivation_line: AWAITING_ENTRY.to_string(),
            next_fetch_seq: 0,
            applied_seq: 0,
        };
        app.refresh_derived();
        app
    }

    /// Recompute series, totals, and breakdown from the current store
    /// snapshot. The mapping is small, so nothing is cached incrementally.
    pub fn refresh_derived(&mut self) {
        let today = dates::today();
        self.series = build_series(self.store.logs(), today, self.window);
        self.totals = totals(self.store.logs());
        self.breakdown = quality_breakdown(self.store.logs(), today, self.window);
    }

    /// Replace the draft with whatever the store holds for the selected date,
    /// discarding unsaved edits.
    fn load_draft(&mut self) {
        self.draft = self.store.get_or_empty(&dates::iso(self.selected_date));
        self.dirty = false;
    }

    fn change_date(&mut self, offset: i64) {
        let next = self.selected_date + chrono::Duration::days(offset);
        // The entry form never goes past today.
        if next > dates::today() {
            return;
        }
        self.selected_date = next;
        self.load_draft();
    }

    fn save_draft(&mut self, tx: &mpsc::Sender<Event>) {
        if let Err(err) = self.store.save(self.draft.clone()) {
            log::error!("Saving log failed: {}", err);
            return;
        }
        self.dirty = false;
        self.refresh_derived();
        if self.draft.date == dates::iso(dates::today()) {
            self.trigger_motivation(tx);
        }
    }

    fn clear_store(&mut self, tx: &mpsc::Sender<Event>) {
        if let Err(err) = self.store.clear() {
            log::error!("Clearing store failed: {}", err);
        }
        self.load_draft();
        self.refresh_derived();
        self.trigger_motivation(tx);
    }

    /// Kick off a background fetch of today's motivational line. Skipped
    /// entirely when today has no entry or the feature is disabled.
    pub fn trigger_motivation(&mut self, tx: &mpsc::Sender<Event>) {
        let today_key = dates::iso(dates::today());
        let Some(log) = self.store.get(&today_key) else {
            self.motivation_line = AWAITING_ENTRY.to_string();
            return;
        };
        if !self.config.motivation.enabled {
            self.motivation_line = self.config.fallback_line().to_string();
            return;
        }

        let prayer_count = log.prayer_count();
        let dua_count = log.dua_count();
        self.next_fetch_seq += 1;
        let seq = self.next_fetch_seq;
        let language = self.config.motivation.language.clone();
        let fallback = self.config.fallback_line().to_string();
        let tx = tx.clone();

        thread::spawn(move || {
            let text = match GeminiProvider::from_env(&language) {
                Ok(provider) => {
                    fetch_or_fallback(&provider, prayer_count, dua_count, &fallback)
                }
                Err(err) => {
                    log::warn!("Motivation provider unavailable: {}", err);
                    fallback
                }
            };
            let _ = tx.send(Event::Motivation { seq, text });
        });
    }

    /// Apply a completed fetch. A response from an older trigger than the
    /// last one applied is dropped so it cannot overwrite a newer line.
    pub fn apply_motivation(&mut self, seq: u64, text: String) {
        if seq < self.applied_seq {
            return;
        }
        self.applied_seq = seq;
        self.motivation_line = text;
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent, tx: &mpsc::Sender<Event>) {
        // Only handle actual key presses — ignore release/repeat events from
        // some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.show_clear_confirm {
            match key.code {
                KeyCode::Char('y') => {
                    self.show_clear_confirm = false;
                    self.clear_store(tx);
                }
                _ => self.show_clear_confirm = false,
            }
            return;
        }

        match self.view {
            View::Tracker => self.handle_tracker_key(key, tx),
            View::Dashboard => self.handle_dashboard_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_tracker_key(&mut self, key: crossterm::event::KeyEvent, tx: &mpsc::Sender<Event>) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Char('g') => {
                self.view = View::Dashboard;
            }
            KeyCode::Char('s') => {
                self.save_draft(tx);
            }
            KeyCode::Left => {
                self.change_date(-1);
            }
            KeyCode::Right => {
                self.change_date(1);
            }
            KeyCode::Tab => {
                self.focus_section = match self.focus_section {
                    FocusSection::Prayers => FocusSection::Duas,
                    FocusSection::Duas => FocusSection::Prayers,
                };
                self.focus_idx = 0;
            }
            KeyCode::Up => {
                if self.focus_idx > 0 {
                    self.focus_idx -= 1;
                }
            }
            KeyCode::Down => {
                let max = match self.focus_section {
                    FocusSection::Prayers => PrayerSlot::all().len() - 1,
                    FocusSection::Duas => Dua::all().len() - 1,
                };
                if self.focus_idx < max {
                    self.focus_idx += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.cycle_focused();
            }
            // Direct timing keys for the focused prayer slot
            KeyCode::Char('e') => self.set_focused_timing(PrayerTiming::Early),
            KeyCode::Char('m') => self.set_focused_timing(PrayerTiming::Mid),
            KeyCode::Char('l') => self.set_focused_timing(PrayerTiming::Late),
            KeyCode::Char('n') => self.set_focused_timing(PrayerTiming::None),
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('g') => {
                self.view = View::Tracker;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Char('w') => {
                self.window = self.window.toggled();
                self.refresh_derived();
            }
            KeyCode::Char('C') => {
                self.show_clear_confirm = true;
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Tracker;
            }
            _ => {}
        }
    }

    /// Enter on a prayer cycles its timing; on a dua it toggles membership.
    fn cycle_focused(&mut self) {
        match self.focus_section {
            FocusSection::Prayers => {
                if let Some(slot) = PrayerSlot::all().get(self.focus_idx).copied() {
                    let next = self.draft.prayers.get(slot).next();
                    self.draft.prayers.set(slot, next);
                    self.dirty = true;
                }
            }
            FocusSection::Duas => {
                if let Some(dua) = Dua::all().get(self.focus_idx).copied() {
                    self.draft.toggle_dua(dua);
                    self.dirty = true;
                }
            }
        }
    }

    fn set_focused_timing(&mut self, timing: PrayerTiming) {
        if self.focus_section != FocusSection::Prayers {
            return;
        }
        if let Some(slot) = PrayerSlot::all().get(self.focus_idx).copied() {
            self.draft.prayers.set(slot, timing);
            self.dirty = true;
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Tracker => self.draw_tracker(frame),
            View::Dashboard => self.draw_dashboard(frame),
            View::Help => {
                self.draw_tracker(frame);
                self.draw_help_overlay(frame);
            }
        }

        if self.show_clear_confirm {
            self.draw_clear_confirm(frame);
        }
    }

    fn draw_tracker(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Length(3), // motivation banner
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, outer_chunks[0], self.selected_date);
        motivation::render(frame, outer_chunks[1], &self.motivation_line);
        statusbar::render(frame, outer_chunks[3], &self.view);

        let body = outer_chunks[2];
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(body);

        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // prayers
                Constraint::Min(8),    // duas
            ])
            .split(columns[0]);

        let focused_prayers = self.focus_section == FocusSection::Prayers;
        let focused_duas = self.focus_section == FocusSection::Duas;

        prayers::render(
            frame,
            left_chunks[0],
            &self.draft.prayers,
            self.focus_idx,
            focused_prayers,
        );
        duas::render(frame, left_chunks[1], &self.draft, self.focus_idx, focused_duas);
        scorecard::render(frame, columns[1], &self.draft, self.dirty);
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, outer_chunks[0], dates::today());
        statusbar::render(frame, outer_chunks[2], &self.view);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(outer_chunks[1]);

        trend::render(frame, columns[0], &self.series, self.window);

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // totals
                Constraint::Min(6),    // breakdown
            ])
            .split(columns[1]);

        totals_widget::render(frame, right_chunks[0], &self.totals);
        breakdown::render(frame, right_chunks[1], &self.breakdown);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: area.height / 2,
        };

        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  [Enter]      ", theme::gold()),
                Span::styled("Cycle timing / toggle dua", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [e m l n]    ", theme::gold()),
                Span::styled("Set timing: early, mid, late, none", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Tab]        ", theme::gold()),
                Span::styled("Switch prayers / duas", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [← →]        ", theme::gold()),
                Span::styled("Previous / next day (max today)", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [s]          ", theme::gold()),
                Span::styled("Save the day", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [g]          ", theme::gold()),
                Span::styled("Toggle dashboard", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [w]          ", theme::gold()),
                Span::styled("7 / 30 day window (dashboard)", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [C]          ", theme::gold()),
                Span::styled("Clear all data (dashboard)", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Esc]        ", theme::gold()),
                Span::styled("Quit", theme::dim()),
            ]),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }

    fn draw_clear_confirm(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 2 - 3,
            width: area.width / 2,
            height: 7,
        };

        frame.render_widget(Clear, popup_area);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  Delete all {} recorded days?", self.store.len()),
                theme::amber().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  [y] delete everything  ·  [any key] cancel",
                theme::dim(),
            )),
        ];

        let block = Block::default()
            .title(Span::styled(" Clear All Data ", theme::red()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::red())
            .style(theme::surface());

        let paragraph = Paragraph::new(text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(store: LogStore, config: AppConfig) -> Result<()> {
    let mut app = App::new(store, config);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(500);

    let tx = events.sender();
    app.trigger_motivation(&tx);

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key, &tx);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => {}
            Event::Motivation { seq, text } => {
                app.apply_motivation(seq, text);
            }
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motivation::FALLBACK_LINE;

    fn test_app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::open(dir.path().join("logs.json"));
        let mut config = AppConfig::default();
        // Keep unit tests off the network.
        config.motivation.enabled = false;
        (dir, App::new(store, config))
    }

    #[test]
    fn stale_motivation_response_is_dropped() {
        let (_dir, mut app) = test_app();

        app.apply_motivation(2, "newer line".to_string());
        app.apply_motivation(1, "older line".to_string());
        assert_eq!(app.motivation_line, "newer line");

        // A later trigger still wins.
        app.apply_motivation(3, "latest line".to_string());
        assert_eq!(app.motivation_line, "latest line");
    }

    #[test]
    fn trigger_without_todays_entry_shows_placeholder() {
        let (_dir, mut app) = test_app();
        let (tx, _rx) = mpsc::channel();
        app.trigger_motivation(&tx);
        assert_eq!(app.motivation_line, AWAITING_ENTRY);
    }

    #[test]
    fn trigger_with_motivation_disabled_uses_fallback() {
        let (_dir, mut app) = test_app();
        let (tx, _rx) = mpsc::channel();

        app.cycle_focused(); // fajr none -> early
        app.save_draft(&tx);
        app.trigger_motivation(&tx);
        assert_eq!(app.motivation_line, FALLBACK_LINE);
    }

    #[test]
    fn save_refreshes_derived_state() {
        let (_dir, mut app) = test_app();
        let (tx, _rx) = mpsc::channel();

        app.cycle_focused(); // fajr -> early
        assert!(app.dirty);
        app.save_draft(&tx);
        assert!(!app.dirty);
        assert_eq!(app.totals.total_prayers, 1);
        assert_eq!(app.series.last().unwrap().score, 10);
    }

    #[test]
    fn date_navigation_never_passes_today() {
        let (_dir, mut app) = test_app();
        let today = dates::today();

        app.change_date(1);
        assert_eq!(app.selected_date, today);

        app.change_date(-1);
        assert_eq!(app.selected_date, today - chrono::Duration::days(1));
        app.change_date(1);
        assert_eq!(app.selected_date, today);
    }

    #[test]
    fn changing_date_discards_unsaved_draft() {
        let (_dir, mut app) = test_app();

        app.cycle_focused();
        assert!(app.dirty);
        app.change_date(-1);
        assert!(!app.dirty);
        assert_eq!(app.draft.prayer_count(), 0);
    }

    #[test]
    fn cycle_in_duas_section_toggles_membership() {
        let (_dir, mut app) = test_app();
        app.focus_section = FocusSection::Duas;
        app.focus_idx = 0;

        app.cycle_focused();
        assert!(app.draft.has_dua(Dua::Ashura));
        app.cycle_focused();
        assert!(!app.draft.has_dua(Dua::Ashura));
    }

    #[test]
    fn clear_resets_store_and_derived() {
        let (_dir, mut app) = test_app();
        let (tx, _rx) = mpsc::channel();

        app.cycle_focused();
        app.save_draft(&tx);
        assert_eq!(app.store.len(), 1);

        app.clear_store(&tx);
        assert!(app.store.is_empty());
        assert_eq!(app.totals, Totals::default());
        assert_eq!(app.motivation_line, AWAITING_ENTRY);
    }
}
