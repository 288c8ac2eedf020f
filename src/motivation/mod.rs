pub mod gemini;
pub mod provider;

pub use gemini::GeminiProvider;
pub use provider::{
    fetch_or_fallback, MotivationError, MotivationProvider, AWAITING_ENTRY, DEFAULT_LINE,
    FALLBACK_LINE,
};
