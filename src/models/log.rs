use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The three tracked prayer slots. Dhuhr and Maghrib each cover a combined
/// pair of prayers, so a day has exactly three entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerSlot {
    Fajr,
    Dhuhr,
    Maghrib,
}

impl PrayerSlot {
    pub fn all() -> [PrayerSlot; 3] {
        [PrayerSlot::Fajr, PrayerSlot::Dhuhr, PrayerSlot::Maghrib]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerSlot::Fajr => "fajr",
            PrayerSlot::Dhuhr => "dhuhr",
            PrayerSlot::Maghrib => "maghrib",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerSlot::Fajr => "Fajr",
            PrayerSlot::Dhuhr => "Dhuhr & Asr",
            PrayerSlot::Maghrib => "Maghrib & Isha",
        }
    }
}

impl std::fmt::Display for PrayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerSlot {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerSlot::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerSlot::Dhuhr),
            "maghrib" => Ok(PrayerSlot::Maghrib),
            _ => Err(anyhow::anyhow!("Unknown prayer slot: {}", s)),
        }
    }
}

/// How promptly a prayer slot was observed. `None` is the untouched default
/// and contributes nothing to the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerTiming {
    #[default]
    None,
    Early,
    Mid,
    Late,
}

impl PrayerTiming {
    pub fn all() -> [PrayerTiming; 4] {
        [
            PrayerTiming::None,
            PrayerTiming::Early,
            PrayerTiming::Mid,
            PrayerTiming::Late,
        ]
    }

    /// Score contribution of a single slot.
    pub fn points(&self) -> u32 {
        match self {
            PrayerTiming::None => 0,
            PrayerTiming::Early => 10,
            PrayerTiming::Mid => 7,
            PrayerTiming::Late => 4,
        }
    }

    pub fn is_prayed(&self) -> bool {
        !matches!(self, PrayerTiming::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerTiming::None => "none",
            PrayerTiming::Early => "early",
            PrayerTiming::Mid => "mid",
            PrayerTiming::Late => "late",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerTiming::None => "not prayed",
            PrayerTiming::Early => "early",
            PrayerTiming::Mid => "mid-time",
            PrayerTiming::Late => "late",
        }
    }

    /// Next timing in entry order, wrapping back to `None`. Used by the TUI
    /// to cycle a slot with a single key.
    pub fn next(&self) -> PrayerTiming {
        match self {
            PrayerTiming::None => PrayerTiming::Early,
            PrayerTiming::Early => PrayerTiming::Mid,
            PrayerTiming::Mid => PrayerTiming::Late,
            PrayerTiming::Late => PrayerTiming::None,
        }
    }
}

impl std::fmt::Display for PrayerTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PrayerTiming {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(PrayerTiming::None),
            "early" => Ok(PrayerTiming::Early),
            "mid" => Ok(PrayerTiming::Mid),
            "late" => Ok(PrayerTiming::Late),
            _ => Err(anyhow::anyhow!("Unknown timing: {}", s)),
        }
    }
}

/// The closed vocabulary of tracked devotional readings. A fixed set — free
/// text would let typos create entries the scoring never sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dua {
    Ashura,
    AlYasin,
    AminAllah,
    SalawatZahra,
    Ahd,
    Kisa,
}

impl Dua {
    pub fn all() -> [Dua; 6] {
        [
            Dua::Ashura,
            Dua::AlYasin,
            Dua::AminAllah,
            Dua::SalawatZahra,
            Dua::Ahd,
            Dua::Kisa,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dua::Ashura => "ashura",
            Dua::AlYasin => "al_yasin",
            Dua::AminAllah => "amin_allah",
            Dua::SalawatZahra => "salawat_zahra",
            Dua::Ahd => "ahd",
            Dua::Kisa => "kisa",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Dua::Ashura => "Ziyarat Ashura",
            Dua::AlYasin => "Dua Al-Yasin",
            Dua::AminAllah => "Dua Amin Allah",
            Dua::SalawatZahra => "Salawat of Fatima",
            Dua::Ahd => "Dua al-Ahd",
            Dua::Kisa => "Hadith al-Kisa",
        }
    }
}

impl std::fmt::Display for Dua {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Dua {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "ashura" => Ok(Dua::Ashura),
            "al_yasin" | "yasin" => Ok(Dua::AlYasin),
            "amin_allah" => Ok(Dua::AminAllah),
            "salawat_zahra" | "salawat" => Ok(Dua::SalawatZahra),
            "ahd" => Ok(Dua::Ahd),
            "kisa" => Ok(Dua::Kisa),
            _ => Err(anyhow::anyhow!("Unknown dua: {}", s)),
        }
    }
}

/// Timings for the three slots of one day. Every slot is always present;
/// an untouched slot is `PrayerTiming::None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerRecord {
    #[serde(default)]
    pub fajr: PrayerTiming,
    #[serde(default)]
    pub dhuhr: PrayerTiming,
    #[serde(default)]
    pub maghrib: PrayerTiming,
}

impl PrayerRecord {
    pub fn get(&self, slot: PrayerSlot) -> PrayerTiming {
        match slot {
            PrayerSlot::Fajr => self.fajr,
            PrayerSlot::Dhuhr => self.dhuhr,
            PrayerSlot::Maghrib => self.maghrib,
        }
    }

    pub fn set(&mut self, slot: PrayerSlot, timing: PrayerTiming) {
        match slot {
            PrayerSlot::Fajr => self.fajr = timing,
            PrayerSlot::Dhuhr => self.dhuhr = timing,
            PrayerSlot::Maghrib => self.maghrib = timing,
        }
    }

    pub fn timings(&self) -> [PrayerTiming; 3] {
        [self.fajr, self.dhuhr, self.maghrib]
    }
}

/// One day's entry, keyed in the store by its ISO date.
/// Invariant: `date` always equals the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: String,
    #[serde(default)]
    pub prayers: PrayerRecord,
    #[serde(default)]
    pub duas: Vec<Dua>,
}

impl DailyLog {
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            prayers: PrayerRecord::default(),
            duas: Vec::new(),
        }
    }

    pub fn has_dua(&self, dua: Dua) -> bool {
        self.duas.contains(&dua)
    }

    /// Flip membership of `dua`. Toggling twice restores the original set.
    pub fn toggle_dua(&mut self, dua: Dua) {
        if let Some(pos) = self.duas.iter().position(|d| *d == dua) {
            self.duas.remove(pos);
        } else {
            self.duas.push(dua);
        }
    }

    /// Drop duplicate duas while keeping first-seen order. Membership is the
    /// only thing that matters; duplicates can only come from a hand-edited
    /// blob.
    pub fn dedup_duas(&mut self) {
        let mut seen = Vec::with_capacity(self.duas.len());
        self.duas.retain(|d| {
            if seen.contains(d) {
                false
            } else {
                seen.push(*d);
                true
            }
        });
    }

    /// Count of slots with any timing other than `none`.
    pub fn prayer_count(&self) -> u32 {
        self.prayers
            .timings()
            .iter()
            .filter(|t| t.is_prayed())
            .count() as u32
    }

    pub fn dua_count(&self) -> u32 {
        self.duas.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_dua_twice_is_identity() {
        let mut log = DailyLog::empty("2024-05-01");
        log.toggle_dua(Dua::Ashura);
        log.toggle_dua(Dua::Ahd);
        let before = log.duas.clone();

        log.toggle_dua(Dua::Kisa);
        log.toggle_dua(Dua::Kisa);
        assert_eq!(log.duas, before);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let mut log = DailyLog::empty("2024-05-01");
        log.duas = vec![Dua::Ahd, Dua::Kisa, Dua::Ahd, Dua::Ashura, Dua::Kisa];
        log.dedup_duas();
        assert_eq!(log.duas, vec![Dua::Ahd, Dua::Kisa, Dua::Ashura]);
    }

    #[test]
    fn prayer_count_ignores_none() {
        let mut log = DailyLog::empty("2024-05-01");
        assert_eq!(log.prayer_count(), 0);
        log.prayers.set(PrayerSlot::Fajr, PrayerTiming::Early);
        log.prayers.set(PrayerSlot::Maghrib, PrayerTiming::Late);
        assert_eq!(log.prayer_count(), 2);
    }

    #[test]
    fn timing_roundtrips_through_str() {
        for timing in PrayerTiming::all() {
            assert_eq!(timing.as_str().parse::<PrayerTiming>().unwrap(), timing);
        }
    }

    #[test]
    fn dua_serializes_as_snake_case() {
        let json = serde_json::to_string(&Dua::SalawatZahra).unwrap();
        assert_eq!(json, "\"salawat_zahra\"");
    }
}
