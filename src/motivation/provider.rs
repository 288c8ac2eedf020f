use thiserror::Error;

/// Shown when the remote fetch fails for any reason.
pub const FALLBACK_LINE: &str = "در مسیر بندگی مستدام باشید.";

/// Shown when the remote call succeeds but returns blank text.
pub const DEFAULT_LINE: &str = "خداوند پشتیبان شماست.";

/// Shown instead of calling the provider when today has no log yet.
pub const AWAITING_ENTRY: &str = "منتظر ثبت بندگی شما هستیم...";

#[derive(Debug, Clone, Error)]
pub enum MotivationError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("client build failure: {0}")]
    ClientBuild(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("HTTP {0} from Gemini")]
    Status(u16),
    #[error("malformed completion payload")]
    MalformedPayload,
}

/// Source of the daily motivational line. Takes only today's tallies.
pub trait MotivationProvider {
    fn fetch(&self, prayer_count: u32, dua_count: u32) -> Result<String, MotivationError>;
}

/// Invoke the provider and absorb every failure into `fallback`. The result
/// is always a non-empty line; nothing here ever propagates an error.
pub fn fetch_or_fallback(
    provider: &dyn MotivationProvider,
    prayer_count: u32,
    dua_count: u32,
    fallback: &str,
) -> String {
    match provider.fetch(prayer_count, dua_count) {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                DEFAULT_LINE.to_string()
            } else {
                trimmed.to_string()
            }
        }
        Err(err) => {
            log::warn!("Motivation fetch failed: {}", err);
            if fallback.trim().is_empty() {
                FALLBACK_LINE.to_string()
            } else {
                fallback.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;
    impl MotivationProvider for Failing {
        fn fetch(&self, _: u32, _: u32) -> Result<String, MotivationError> {
            Err(MotivationError::Transport("connection refused".into()))
        }
    }

    struct Blank;
    impl MotivationProvider for Blank {
        fn fetch(&self, _: u32, _: u32) -> Result<String, MotivationError> {
            Ok("   ".into())
        }
    }

    struct Echo;
    impl MotivationProvider for Echo {
        fn fetch(&self, p: u32, d: u32) -> Result<String, MotivationError> {
            Ok(format!("  {} prayers, {} duas  ", p, d))
        }
    }

    #[test]
    fn failure_yields_fallback_never_error() {
        let line = fetch_or_fallback(&Failing, 2, 1, FALLBACK_LINE);
        assert_eq!(line, FALLBACK_LINE);
    }

    #[test]
    fn failure_with_empty_fallback_still_non_empty() {
        let line = fetch_or_fallback(&Failing, 2, 1, "");
        assert_eq!(line, FALLBACK_LINE);
    }

    #[test]
    fn blank_success_yields_default_line() {
        let line = fetch_or_fallback(&Blank, 0, 0, FALLBACK_LINE);
        assert_eq!(line, DEFAULT_LINE);
    }

    #[test]
    fn success_is_trimmed() {
        let line = fetch_or_fallback(&Echo, 3, 2, FALLBACK_LINE);
        assert_eq!(line, "3 prayers, 2 duas");
    }
}
