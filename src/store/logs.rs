use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::models::DailyLog;

/// The single writable source of truth: a mapping from ISO date to that day's
/// log, backed by one JSON file. Every mutation rewrites the whole blob.
#[derive(Debug)]
pub struct LogStore {
    path: PathBuf,
    logs: BTreeMap<String, DailyLog>,
}

impl LogStore {
    /// Open the store at `path`. An absent or unreadable blob yields an empty
    /// store — load never fails; whatever went wrong is logged and the user
    /// starts fresh.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let logs = load_blob(&path);
        Self { path, logs }
    }

    pub fn get(&self, date: &str) -> Option<&DailyLog> {
        self.logs.get(date)
    }

    /// The log for `date`, or the implicit empty default if none is stored.
    pub fn get_or_empty(&self, date: &str) -> DailyLog {
        self.logs
            .get(date)
            .cloned()
            .unwrap_or_else(|| DailyLog::empty(date))
    }

    pub fn logs(&self) -> &BTreeMap<String, DailyLog> {
        &self.logs
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    /// Insert or overwrite the entry at `log.date`, then persist the full
    /// mapping.
    pub fn save(&mut self, log: DailyLog) -> Result<()> {
        self.logs.insert(log.date.clone(), log);
        self.persist()
    }

    /// Remove every entry and persist the empty mapping.
    pub fn clear(&mut self) -> Result<()> {
        self.logs.clear();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Creating {:?}", parent))?;
        }
        let payload =
            serde_json::to_vec_pretty(&self.logs).context("Serializing log store")?;

        // Whole-blob replace: write a sibling temp file, then rename over the
        // old blob so a crash mid-write cannot leave a torn file.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, payload).with_context(|| format!("Writing {:?}", tmp))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Replacing {:?}", self.path))?;
        Ok(())
    }
}

/// Read and sanitize the persisted blob. Each entry is decoded independently:
/// one corrupt entry drops that entry, not the whole history. A `date` field
/// that disagrees with its key is coerced to the key.
fn load_blob(path: &Path) -> BTreeMap<String, DailyLog> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return BTreeMap::new();
        }
        Err(err) => {
            log::warn!("Could not read {:?}: {} — starting empty", path, err);
            return BTreeMap::new();
        }
    };

    let entries: BTreeMap<String, serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("Could not parse {:?}: {} — starting empty", path, err);
            return BTreeMap::new();
        }
    };

    let mut logs = BTreeMap::new();
    for (date, value) in entries {
        match serde_json::from_value::<DailyLog>(value) {
            Ok(mut entry) => {
                if entry.date != date {
                    log::warn!(
                        "Entry under key {} claims date {} — keeping the key",
                        date,
                        entry.date
                    );
                    entry.date = date.clone();
                }
                entry.dedup_duas();
                logs.insert(date, entry);
            }
            Err(err) => {
                log::warn!("Dropping undecodable entry for {}: {}", date, err);
            }
        }
    }
    logs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dua, PrayerSlot, PrayerTiming};

    fn temp_store() -> (tempfile::TempDir, LogStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::open(dir.path().join("logs.json"));
        (dir, store)
    }

    #[test]
    fn missing_blob_loads_empty() {
        let (_dir, store) = temp_store();
        assert!(store.is_empty());
    }

    #[test]
    fn save_is_pure_overwrite() {
        let (dir, mut store) = temp_store();

        let mut monday = DailyLog::empty("2024-05-06");
        monday.prayers.set(PrayerSlot::Fajr, PrayerTiming::Early);
        store.save(monday.clone()).unwrap();

        let mut tuesday = DailyLog::empty("2024-05-07");
        tuesday.toggle_dua(Dua::Ashura);
        store.save(tuesday.clone()).unwrap();

        // Overwrite monday; tuesday must be untouched.
        monday.prayers.set(PrayerSlot::Fajr, PrayerTiming::Late);
        store.save(monday.clone()).unwrap();

        let reloaded = LogStore::open(dir.path().join("logs.json"));
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("2024-05-06"), Some(&monday));
        assert_eq!(reloaded.get("2024-05-07"), Some(&tuesday));
    }

    #[test]
    fn clear_empties_regardless_of_contents() {
        let (dir, mut store) = temp_store();
        store.save(DailyLog::empty("2024-05-06")).unwrap();
        store.save(DailyLog::empty("2024-05-07")).unwrap();
        store.clear().unwrap();
        assert!(store.is_empty());

        let reloaded = LogStore::open(dir.path().join("logs.json"));
        assert!(reloaded.is_empty());
    }

    #[test]
    fn garbage_blob_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs.json");
        std::fs::write(&path, "not json at all {{{").unwrap();
        let store = LogStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn bad_entry_is_dropped_good_entries_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs.json");
        std::fs::write(
            &path,
            r#"{
                "2024-05-06": {
                    "date": "2024-05-06",
                    "prayers": { "fajr": "early", "dhuhr": "none", "maghrib": "none" },
                    "duas": ["ashura"]
                },
                "2024-05-07": {
                    "date": "2024-05-07",
                    "prayers": { "fajr": "whenever", "dhuhr": "none", "maghrib": "none" },
                    "duas": []
                }
            }"#,
        )
        .unwrap();

        let store = LogStore::open(&path);
        assert_eq!(store.len(), 1);
        assert!(store.get("2024-05-06").is_some());
        assert!(store.get("2024-05-07").is_none());
    }

    #[test]
    fn mismatched_date_field_is_coerced_to_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs.json");
        std::fs::write(
            &path,
            r#"{
                "2024-05-06": {
                    "date": "1999-01-01",
                    "prayers": { "fajr": "none", "dhuhr": "none", "maghrib": "none" },
                    "duas": ["ahd", "ahd"]
                }
            }"#,
        )
        .unwrap();

        let store = LogStore::open(&path);
        let entry = store.get("2024-05-06").unwrap();
        assert_eq!(entry.date, "2024-05-06");
        // Duplicate duas from a hand-edited blob collapse to one.
        assert_eq!(entry.duas, vec![Dua::Ahd]);
    }

    #[test]
    fn get_or_empty_substitutes_default() {
        let (_dir, store) = temp_store();
        let log = store.get_or_empty("2024-05-06");
        assert_eq!(log.date, "2024-05-06");
        assert_eq!(log.prayer_count(), 0);
        assert!(log.duas.is_empty());
    }
}
