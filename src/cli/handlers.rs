use anyhow::{anyhow, Result};
use std::str::FromStr;

use crate::config::AppConfig;
use crate::models::{Dua, PrayerSlot, PrayerTiming};
use crate::motivation::{fetch_or_fallback, GeminiProvider, AWAITING_ENTRY};
use crate::stats::{build_series, quality_breakdown, score_of, totals, Window, MAX_DAY_SCORE};
use crate::store::LogStore;
use crate::utils::dates;
use crate::utils::format::progress_bar;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn resolve_date(date: &Option<String>) -> Result<String> {
    match date {
        Some(raw) => Ok(dates::iso(dates::parse_iso(raw)?)),
        None => Ok(dates::iso(dates::today())),
    }
}

// ─── Mark prayer ─────────────────────────────────────────────────────────────

pub fn handle_mark(
    store: &mut LogStore,
    prayer_str: &str,
    timing_str: &str,
    date: &Option<String>,
) -> Result<()> {
    let slot = PrayerSlot::from_str(prayer_str)
        .map_err(|_| anyhow!("Unknown prayer '{}'. Use: fajr, dhuhr, maghrib", prayer_str))?;
    let timing = PrayerTiming::from_str(timing_str)
        .map_err(|_| anyhow!("Unknown timing '{}'. Use: none, early, mid, late", timing_str))?;
    let date = resolve_date(date)?;

    let mut log = store.get_or_empty(&date);
    log.prayers.set(slot, timing);
    store.save(log)?;

    if timing.is_prayed() {
        println_colored!(
            GREEN,
            "  ✓ {} — {} ({} pts) on {}",
            slot.display_name(),
            timing.display_name(),
            timing.points(),
            date
        );
    } else {
        println_colored!(DIM, "  ○ {} — cleared on {}", slot.display_name(), date);
    }
    Ok(())
}

// ─── Duas ────────────────────────────────────────────────────────────────────

pub fn handle_dua(
    store: &mut LogStore,
    name: &Option<String>,
    list: bool,
    date: &Option<String>,
) -> Result<()> {
    if list {
        println!();
        println_colored!(GOLD, "  Tracked duas");
        println!();
        for dua in Dua::all() {
            println!("  {:<16}  {}", dua.as_str(), dua.display_name());
        }
        println!();
        return Ok(());
    }

    let name = name
        .as_deref()
        .ok_or_else(|| anyhow!("Give a dua name, or use --list to see them"))?;
    let dua = Dua::from_str(name)
        .map_err(|_| anyhow!("Unknown dua '{}'. Use --list to see the six names", name))?;
    let date = resolve_date(date)?;

    let mut log = store.get_or_empty(&date);
    log.toggle_dua(dua);
    let now_present = log.has_dua(dua);
    store.save(log)?;

    if now_present {
        println_colored!(GREEN, "  ✓ {} — read on {}", dua.display_name(), date);
    } else {
        println_colored!(DIM, "  ○ {} — unmarked on {}", dua.display_name(), date);
    }
    Ok(())
}

// ─── Show a day ──────────────────────────────────────────────────────────────

pub fn handle_show(store: &LogStore, date: &Option<String>) -> Result<()> {
    let date = resolve_date(date)?;
    let log = store.get_or_empty(&date);

    println!();
    println_colored!(GOLD, "  {}", date);
    println!();
    for slot in PrayerSlot::all() {
        let timing = log.prayers.get(slot);
        if timing.is_prayed() {
            println_colored!(
                BOLD,
                "  {:<16}  {} (+{})",
                slot.display_name(),
                timing.display_name(),
                timing.points()
            );
        } else {
            println_colored!(DIM, "  {:<16}  not prayed", slot.display_name());
        }
    }
    println!();
    if log.duas.is_empty() {
        println_colored!(DIM, "  No duas recorded");
    } else {
        for dua in &log.duas {
            println_colored!(GREEN, "  ✓ {}", dua.display_name());
        }
    }
    println!();
    println_colored!(AMBER, "  Score: {}", score_of(&log));
    println!();
    Ok(())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(store: &LogStore, month: bool) -> Result<()> {
    let window = if month { Window::Month } else { Window::Week };
    let today = dates::today();

    let series = build_series(store.logs(), today, window);
    let all_time = totals(store.logs());
    let breakdown = quality_breakdown(store.logs(), today, window);

    println!();
    println_colored!(GOLD, "  Score trend — last {}", window.display_name());
    println!();
    for point in &series {
        let bar = progress_bar(point.score, MAX_DAY_SCORE, 20);
        println!("  {:<4} {}  {:>2}", point.label, bar, point.score);
    }

    println!();
    println_colored!(
        BOLD,
        "  All time:  {} prayers  ·  {} duas",
        all_time.total_prayers,
        all_time.total_duas
    );

    if !breakdown.is_empty() {
        println!();
        println_colored!(GOLD, "  Timing breakdown ({})", window.display_name());
        for (timing, count) in &breakdown {
            println!("  {:<10}  {}", timing.display_name(), count);
        }
    }
    println!();
    Ok(())
}

// ─── Motivation ──────────────────────────────────────────────────────────────

pub fn handle_motivation(store: &LogStore, config: &AppConfig) -> Result<()> {
    let line = motivation_line(store, config);
    println!();
    println_colored!(GOLD, "  « {} »", line);
    println!();
    Ok(())
}

/// Today's motivational line, never an error: placeholder when no entry
/// exists yet, the remote line when the fetch works, the fallback otherwise.
pub fn motivation_line(store: &LogStore, config: &AppConfig) -> String {
    let today = dates::iso(dates::today());
    let Some(log) = store.get(&today) else {
        return AWAITING_ENTRY.to_string();
    };

    if !config.motivation.enabled {
        return config.fallback_line().to_string();
    }

    match GeminiProvider::from_env(&config.motivation.language) {
        Ok(provider) => fetch_or_fallback(
            &provider,
            log.prayer_count(),
            log.dua_count(),
            config.fallback_line(),
        ),
        Err(err) => {
            log::warn!("Motivation provider unavailable: {}", err);
            config.fallback_line().to_string()
        }
    }
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(store: &LogStore) -> Result<()> {
    let today = dates::today();
    let series = build_series(store.logs(), today, Window::Week);
    let all_time = totals(store.logs());
    let breakdown = quality_breakdown(store.logs(), today, Window::Week);

    println!("# dastyar — Weekly Summary");
    println!("# {}", dates::iso(today));
    println!();
    println!("## Daily Score (last 7 days)");
    for point in &series {
        let bar = progress_bar(point.score, MAX_DAY_SCORE, 10);
        println!(
            "  {:<4} {:>2}  {}  ({} prayers, {} duas)",
            point.label, point.score, bar, point.prayer_count, point.dua_count
        );
    }
    println!();
    println!("## Summary");
    println!("  Prayers recorded:  {}", all_time.total_prayers);
    println!("  Duas read:         {}", all_time.total_duas);
    for (timing, count) in &breakdown {
        println!("  {:<10} this week: {}", timing.display_name(), count);
    }
    Ok(())
}

// ─── Clear ───────────────────────────────────────────────────────────────────

pub fn handle_clear(store: &mut LogStore, yes: bool) -> Result<()> {
    if !yes {
        println_colored!(
            AMBER,
            "  This deletes every recorded day. Re-run with --yes to confirm."
        );
        return Ok(());
    }
    let removed = store.len();
    store.clear()?;
    println_colored!(GREEN, "  ✓ Cleared {} recorded days", removed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyLog;

    fn temp_store() -> (tempfile::TempDir, LogStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::open(dir.path().join("logs.json"));
        (dir, store)
    }

    #[test]
    fn motivation_line_without_todays_entry_is_placeholder() {
        let (_dir, store) = temp_store();
        let config = AppConfig::default();
        assert_eq!(motivation_line(&store, &config), AWAITING_ENTRY);
    }

    #[test]
    fn motivation_line_disabled_uses_fallback() {
        let (_dir, mut store) = temp_store();
        store
            .save(DailyLog::empty(dates::iso(dates::today())))
            .unwrap();

        let mut config = AppConfig::default();
        config.motivation.enabled = false;
        config.motivation.fallback = Some("one step at a time".to_string());
        assert_eq!(motivation_line(&store, &config), "one step at a time");
    }

    #[test]
    fn mark_then_show_roundtrip() {
        let (_dir, mut store) = temp_store();
        handle_mark(
            &mut store,
            "fajr",
            "early",
            &Some("2024-05-06".to_string()),
        )
        .unwrap();

        let log = store.get("2024-05-06").unwrap();
        assert_eq!(log.prayers.fajr, PrayerTiming::Early);
        assert_eq!(score_of(log), 10);
    }

    #[test]
    fn mark_rejects_unknown_timing() {
        let (_dir, mut store) = temp_store();
        assert!(handle_mark(&mut store, "fajr", "whenever", &None).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn dua_toggles_on_and_off() {
        let (_dir, mut store) = temp_store();
        let date = Some("2024-05-06".to_string());
        handle_dua(&mut store, &Some("kisa".to_string()), false, &date).unwrap();
        assert!(store.get("2024-05-06").unwrap().has_dua(Dua::Kisa));

        handle_dua(&mut store, &Some("kisa".to_string()), false, &date).unwrap();
        assert!(!store.get("2024-05-06").unwrap().has_dua(Dua::Kisa));
    }

    #[test]
    fn clear_requires_confirmation() {
        let (_dir, mut store) = temp_store();
        store.save(DailyLog::empty("2024-05-06")).unwrap();

        handle_clear(&mut store, false).unwrap();
        assert_eq!(store.len(), 1);

        handle_clear(&mut store, true).unwrap();
        assert!(store.is_empty());
    }
}
